pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod prediction;

pub use aggregate::AggregatePresenter;
pub use catalog::present_class_list;
pub use config::{present_alias_set, present_config};
pub use prediction::{build_model_result, model_icon, present_prediction_report};
