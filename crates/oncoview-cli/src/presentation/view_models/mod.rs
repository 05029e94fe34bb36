pub mod catalog;
pub mod common;
pub mod config;
pub mod prediction;
pub mod result;

pub use catalog::{ClassEntryViewModel, ClassFallbackViewModel, ClassListViewModel};
pub use common::{Guidance, RenderOptions, StatusBadge, StatusLevel, ViewMode};
pub use config::{AliasSetViewModel, ConfigViewModel};
pub use prediction::{
    ConsensusViewModel, ModelCardViewModel, ModelIcon, ModelResultView,
    PredictionReportViewModel, ProbabilityEntryViewModel,
};
pub use result::CommandResultViewModel;

use std::fmt;

/// Bridge from a ViewModel to the `fmt::Display` view that lays it out
pub trait CreateView {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a>;
}
