use oncoview_engine::{compute_consensus, ClassCodeTable, Consensus};
use oncoview_types::MultiModelPredictionResult;
use std::collections::{HashMap, HashSet};
use tracing::warn;

use super::prediction::build_model_result;
use crate::presentation::view_models::ModelResultView;

/// Per-model expand/collapse flags, keyed by model name.
///
/// Models are collapsed until toggled. Names need not belong to the current
/// response; an entry is created on first toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ExpansionState {
    expanded: HashMap<String, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, model_name: &str) {
        let flag = self.expanded.entry(model_name.to_string()).or_insert(false);
        *flag = !*flag;
    }

    pub fn is_expanded(&self, model_name: &str) -> bool {
        self.expanded.get(model_name).copied().unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }
}

/// Holds one prediction response and the display state of its model cards.
///
/// `present` replaces the response wholesale and resets expansion; `toggle`
/// only touches display state. Nothing here can fail.
#[derive(Debug, Clone)]
pub struct AggregatePresenter {
    class_codes: ClassCodeTable,
    result: MultiModelPredictionResult,
    views: Vec<ModelResultView>,
    expansion: ExpansionState,
}

impl AggregatePresenter {
    /// `class_codes` is the base label table; a response may extend it
    pub fn new(class_codes: ClassCodeTable) -> Self {
        Self {
            class_codes,
            result: MultiModelPredictionResult::default(),
            views: Vec::new(),
            expansion: ExpansionState::new(),
        }
    }

    /// Take ownership of a new response and rebuild the views in its model order
    pub fn present(&mut self, result: MultiModelPredictionResult) -> &[ModelResultView] {
        let mut class_codes = self.class_codes.clone();
        class_codes.extend(
            result
                .class_codes
                .iter()
                .map(|(label, code)| (label.clone(), *code)),
        );

        let mut seen = HashSet::new();
        for prediction in &result.predictions {
            if !seen.insert(prediction.model_name.as_str()) {
                warn!(
                    model = %prediction.model_name,
                    "duplicate model name in response; its cards share one expand state"
                );
            }
        }

        self.views = result
            .predictions
            .iter()
            .map(|prediction| build_model_result(prediction, &class_codes))
            .collect();
        self.result = result;
        self.expansion.clear();

        &self.views
    }

    pub fn toggle(&mut self, model_name: &str) {
        self.expansion.toggle(model_name);
    }

    pub fn is_expanded(&self, model_name: &str) -> bool {
        self.expansion.is_expanded(model_name)
    }

    /// Expand every model of the current response that is still collapsed
    pub fn expand_all(&mut self) {
        for view in &self.views {
            if !self.expansion.is_expanded(&view.model_name) {
                self.expansion.toggle(&view.model_name);
            }
        }
    }

    pub fn views(&self) -> &[ModelResultView] {
        &self.views
    }

    pub fn contains_model(&self, model_name: &str) -> bool {
        self.views.iter().any(|view| view.model_name == model_name)
    }

    pub fn consensus(&self) -> Consensus {
        compute_consensus(&self.result.predictions)
    }
}

impl Default for AggregatePresenter {
    fn default() -> Self {
        Self::new(ClassCodeTable::default())
    }
}
