use serde::{Deserialize, Serialize};
use std::fmt;

/// Cancer subtype category emitted by a classifier.
///
/// Any integer is representable; the known categories are a small fixed set
/// and everything else resolves to fallback display values downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationCode(i64);

impl ClassificationCode {
    /// Sentinel used when no model produced a vote
    pub const NONE: ClassificationCode = ClassificationCode(-1);

    pub const fn new(code: i64) -> Self {
        Self(code)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ClassificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ClassificationCode {
    fn from(code: i64) -> Self {
        Self(code)
    }
}

impl From<i32> for ClassificationCode {
    fn from(code: i32) -> Self {
        Self(i64::from(code))
    }
}

impl From<ClassificationCode> for i64 {
    fn from(code: ClassificationCode) -> Self {
        code.0
    }
}
