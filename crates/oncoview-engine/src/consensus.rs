use oncoview_types::{ClassificationCode, ModelPrediction};
use serde::Serialize;

use crate::catalog;

/// Score assumed for a tied candidate whose voters reported no confidence
const NEUTRAL_CONFIDENCE: f64 = 0.5;

/// Majority verdict across all models of one response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Consensus {
    pub code: ClassificationCode,
    pub label: &'static str,
    /// True when every model voted for `code`
    pub agreement: bool,
    pub vote_count: usize,
    pub total_models: usize,
}

impl Consensus {
    fn empty() -> Self {
        Self {
            code: ClassificationCode::NONE,
            label: catalog::FALLBACK_LABEL,
            agreement: false,
            vote_count: 0,
            total_models: 0,
        }
    }
}

struct Tally {
    code: ClassificationCode,
    votes: usize,
    confidences: Vec<f64>,
}

impl Tally {
    fn score(&self) -> f64 {
        if self.confidences.is_empty() {
            NEUTRAL_CONFIDENCE
        } else {
            self.confidences.iter().sum::<f64>() / self.confidences.len() as f64
        }
    }
}

/// Vote the predictions into a single verdict.
///
/// Each model casts one vote for its predicted code. On a tie in vote count
/// the candidate with the highest mean confidence wins; if scores tie too,
/// the code voted for first wins.
pub fn compute_consensus(predictions: &[ModelPrediction]) -> Consensus {
    if predictions.is_empty() {
        return Consensus::empty();
    }

    // Insertion-ordered so ties resolve to the first code seen
    let mut tallies: Vec<Tally> = Vec::new();
    for pred in predictions {
        let idx = match tallies.iter().position(|t| t.code == pred.cancer_type_code) {
            Some(idx) => idx,
            None => {
                tallies.push(Tally {
                    code: pred.cancer_type_code,
                    votes: 0,
                    confidences: Vec::new(),
                });
                tallies.len() - 1
            }
        };

        let tally = &mut tallies[idx];
        tally.votes += 1;
        if let Some(confidence) = pred.confidence {
            tally.confidences.push(confidence);
        }
    }

    let max_votes = tallies.iter().map(|t| t.votes).max().unwrap_or(0);

    let mut winner: Option<&Tally> = None;
    for tally in tallies.iter().filter(|t| t.votes == max_votes) {
        winner = match winner {
            Some(best) if tally.score() > best.score() => Some(tally),
            Some(best) => Some(best),
            None => Some(tally),
        };
    }

    let Some(winner) = winner else {
        return Consensus::empty();
    };

    let total_models = predictions.len();
    Consensus {
        code: winner.code,
        label: catalog::lookup(winner.code).label,
        agreement: winner.votes == total_models,
        vote_count: winner.votes,
        total_models,
    }
}
