use oncoview_types::{ClassificationCode, ProbabilityDistribution};
use serde::Serialize;
use std::cmp::Ordering;

use crate::catalog::{self, ColorToken};
use crate::class_codes::ClassCodeTable;

/// One class of a model's distribution, annotated for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityEntry {
    pub label: String,
    pub probability: f64,
    pub code: ClassificationCode,
    pub color: ColorToken,
}

/// Annotate and order a probability distribution.
///
/// Each label is mapped to a code through `class_codes` (falling back to
/// `fallback_code`), then colored through the catalog. Entries are sorted by
/// probability, highest first, with a stable sort so equal probabilities keep
/// their source order. Values are not validated or renormalized.
pub fn summarize(
    distribution: &ProbabilityDistribution,
    class_codes: &ClassCodeTable,
    fallback_code: ClassificationCode,
) -> Vec<ProbabilityEntry> {
    let mut entries: Vec<ProbabilityEntry> = distribution
        .iter()
        .map(|(label, probability)| {
            let code = class_codes.resolve_or(label, fallback_code);
            ProbabilityEntry {
                label: label.to_string(),
                probability,
                code,
                color: catalog::color_for(code),
            }
        })
        .collect();

    entries.sort_by(|a, b| descending(a.probability, b.probability));
    entries
}

// NaN has no place in a numeric order; it goes last so the comparator stays total.
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
