const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';

/// `0.8712 -> "87.12%"`. Values outside [0, 1] and NaN are printed as-is.
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Fixed-width bar for a probability. Only the bar is clamped; NaN draws empty.
pub fn format_bar(value: f64, width: usize) -> String {
    let ratio = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    };
    let filled = ((ratio * width as f64).round() as usize).min(width);

    let mut bar = String::with_capacity(width * BAR_FILLED.len_utf8());
    bar.extend(std::iter::repeat_n(BAR_FILLED, filled));
    bar.extend(std::iter::repeat_n(BAR_EMPTY, width - filled));
    bar
}
