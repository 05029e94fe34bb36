use std::fmt;

use crate::presentation::formatters::{bold, dimmed, format_bar, format_percentage, paint};
use crate::presentation::view_models::{
    ModelCardViewModel, PredictionReportViewModel, RenderOptions, ViewMode,
};

const BAR_WIDTH: usize = 20;

// --------------------------------------------------------
// Prediction Report View
// --------------------------------------------------------

pub struct PredictionReportView<'a> {
    data: &'a PredictionReportViewModel,
    options: RenderOptions,
}

impl<'a> PredictionReportView<'a> {
    pub fn new(data: &'a PredictionReportViewModel, options: RenderOptions) -> Self {
        Self { data, options }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for card in &self.data.models {
            writeln!(f, "{}\t{}", card.result.model_name, card.result.code)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.models.is_empty() {
            writeln!(f, "No model predictions")?;
            return Ok(());
        }

        let color = self.options.color;
        for card in &self.data.models {
            let result = &card.result;
            write!(
                f,
                "{} {}: {}",
                result.icon.glyph(),
                bold(&result.model_name, color),
                paint(&result.detailed_label, result.color, color)
            )?;
            if let Some(confidence) = &result.confidence_display {
                write!(f, " ({})", confidence)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn render_cards(&self, f: &mut fmt::Formatter, verbose: bool) -> fmt::Result {
        if self.data.models.is_empty() {
            writeln!(f, "No model predictions.")?;
            return Ok(());
        }

        for (i, card) in self.data.models.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            self.render_card(f, card, verbose)?;
        }

        if verbose {
            let consensus = &self.data.consensus;
            writeln!(f)?;
            writeln!(
                f,
                "Consensus: {} (code {}), {}/{} votes, agreement: {}",
                paint(&consensus.label, consensus.color, self.options.color),
                consensus.code,
                consensus.vote_count,
                consensus.total_models,
                if consensus.agreement { "yes" } else { "no" }
            )?;
        }

        Ok(())
    }

    fn render_card(
        &self,
        f: &mut fmt::Formatter,
        card: &ModelCardViewModel,
        verbose: bool,
    ) -> fmt::Result {
        let color = self.options.color;
        let result = &card.result;

        write!(f, "{} {}", result.icon.glyph(), bold(&result.model_name, color))?;
        if let Some(confidence) = &result.confidence_display {
            write!(f, "  {}", confidence)?;
        }
        writeln!(f)?;

        writeln!(f, "   {}", paint(&result.detailed_label, result.color, color))?;
        writeln!(f, "   {}", dimmed(&result.description, color))?;
        if verbose {
            writeln!(f, "   code: {}, color: {}", result.code, result.color)?;
        }

        if !result.has_distribution {
            return Ok(());
        }

        if !card.expanded {
            writeln!(
                f,
                "   ▶ Probabilities ({} classes, collapsed)",
                result.probabilities.len()
            )?;
            return Ok(());
        }

        writeln!(f, "   ▼ Probabilities")?;
        let width = result
            .probabilities
            .iter()
            .map(|entry| entry.label.chars().count())
            .max()
            .unwrap_or(0);

        for entry in &result.probabilities {
            let label = format!("{:<width$}", entry.label, width = width);
            writeln!(
                f,
                "     {}  {:>7}  {}",
                paint(&label, entry.color, color),
                format_percentage(entry.probability),
                paint(&format_bar(entry.probability, BAR_WIDTH), entry.color, color)
            )?;
        }

        Ok(())
    }
}

impl<'a> fmt::Display for PredictionReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.options.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_cards(f, false),
            ViewMode::Verbose => self.render_cards(f, true),
        }
    }
}
