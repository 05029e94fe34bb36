pub mod error;
pub mod prediction;

pub use error::{Error, Result};
pub use prediction::*;
