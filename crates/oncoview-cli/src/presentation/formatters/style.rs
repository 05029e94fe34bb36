use oncoview_engine::ColorToken;
use owo_colors::OwoColorize;

/// Truecolor foreground from a catalog color, or the plain text when disabled
pub fn paint(text: &str, color: ColorToken, enabled: bool) -> String {
    match color.rgb() {
        Some((r, g, b)) if enabled => text.truecolor(r, g, b).to_string(),
        _ => text.to_string(),
    }
}

pub fn bold(text: &str, enabled: bool) -> String {
    if enabled {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn dimmed(text: &str, enabled: bool) -> String {
    if enabled {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}
