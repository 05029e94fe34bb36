pub mod catalog;
pub mod config;
pub mod prediction;

pub use catalog::ClassListView;
pub use config::{AliasSetView, ConfigView};
pub use prediction::PredictionReportView;
