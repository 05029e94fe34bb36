use oncoview_types::ClassificationCode;
use std::collections::HashMap;

use crate::catalog;

/// Explicit mapping from a probability label to its category code.
///
/// Seeded with the catalog class names; callers layer extra aliases on top
/// (configuration, or a table shipped with the payload). Later inserts win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCodeTable {
    codes: HashMap<String, ClassificationCode>,
}

impl ClassCodeTable {
    /// Empty table: every label resolves to the caller's fallback
    pub fn empty() -> Self {
        Self {
            codes: HashMap::new(),
        }
    }

    pub fn from_catalog() -> Self {
        let mut table = Self::empty();
        for entry in catalog::entries() {
            table.insert(entry.label, entry.code);
        }
        table
    }

    pub fn insert(&mut self, label: impl Into<String>, code: impl Into<ClassificationCode>) {
        self.codes.insert(label.into(), code.into());
    }

    pub fn with_alias(mut self, label: impl Into<String>, code: impl Into<ClassificationCode>) -> Self {
        self.insert(label, code);
        self
    }

    pub fn resolve(&self, label: &str) -> Option<ClassificationCode> {
        self.codes.get(label).copied()
    }

    pub fn resolve_or(&self, label: &str, fallback: ClassificationCode) -> ClassificationCode {
        self.resolve(label).unwrap_or(fallback)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for ClassCodeTable {
    fn default() -> Self {
        Self::from_catalog()
    }
}

impl<S, C> Extend<(S, C)> for ClassCodeTable
where
    S: Into<String>,
    C: Into<ClassificationCode>,
{
    fn extend<I: IntoIterator<Item = (S, C)>>(&mut self, iter: I) {
        for (label, code) in iter {
            self.insert(label, code);
        }
    }
}
