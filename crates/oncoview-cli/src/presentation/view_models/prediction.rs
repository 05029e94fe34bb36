use oncoview_engine::ColorToken;
use serde::Serialize;
use std::fmt;

use super::{CreateView, RenderOptions};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

/// Symbolic icon for a classifier family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelIcon {
    Svm,
    RandomForest,
    DecisionTree,
    Generic,
}

impl ModelIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            ModelIcon::Svm => "🤖",
            ModelIcon::RandomForest => "🌲",
            ModelIcon::DecisionTree => "🌳",
            ModelIcon::Generic => "📊",
        }
    }
}

/// Everything needed to render one model's result card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelResultView {
    pub model_name: String,
    pub icon: ModelIcon,
    pub detailed_label: String,
    pub code: i64,
    pub color: ColorToken,
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_display: Option<String>,

    /// Sorted highest probability first
    pub probabilities: Vec<ProbabilityEntryViewModel>,
    pub has_distribution: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityEntryViewModel {
    pub label: String,
    pub probability: f64,
    pub code: i64,
    pub color: ColorToken,
}

/// A model card as shown right now: the result plus its expand state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelCardViewModel {
    #[serde(flatten)]
    pub result: ModelResultView,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsensusViewModel {
    pub code: i64,
    pub label: String,
    pub color: ColorToken,
    pub agreement: bool,
    pub vote_count: usize,
    pub total_models: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReportViewModel {
    pub models: Vec<ModelCardViewModel>,
    pub consensus: ConsensusViewModel,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for PredictionReportViewModel {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::prediction::PredictionReportView;
        Box::new(PredictionReportView::new(self, options))
    }
}
