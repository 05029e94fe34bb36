pub mod code;
pub mod distribution;
pub mod payload;

pub use code::ClassificationCode;
pub use distribution::ProbabilityDistribution;
pub use payload::{parse_payload, read_payload, ModelPrediction, MultiModelPredictionResult};
