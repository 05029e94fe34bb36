// Engine module - catalog lookups, distribution summarization and consensus.
// This layer sits between the payload types and the CLI presentation.

pub mod catalog;
pub mod class_codes;
pub mod consensus;
pub mod summarizer;

pub use catalog::{CategoryDisplay, CategoryEntry, ColorToken};
pub use class_codes::ClassCodeTable;
pub use consensus::{compute_consensus, Consensus};
pub use summarizer::{summarize, ProbabilityEntry};

use oncoview_types::{ClassificationCode, ModelPrediction};

// Façade API - Stable public interface for CLI layer

/// Resolve color, label and description for any code (never fails)
pub fn lookup_category(code: ClassificationCode) -> CategoryDisplay {
    catalog::lookup(code)
}

/// Summarize one model's distribution, using its predicted code as fallback.
/// A model without probabilities yields an empty list.
pub fn summarize_prediction(
    prediction: &ModelPrediction,
    class_codes: &ClassCodeTable,
) -> Vec<ProbabilityEntry> {
    match &prediction.probabilities {
        Some(distribution) => summarize(distribution, class_codes, prediction.cancer_type_code),
        None => Vec::new(),
    }
}
