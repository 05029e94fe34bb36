use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use super::{CreateView, RenderOptions, ViewMode};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: PathBuf,
    pub exists: bool,
    pub view_mode: ViewMode,
    pub color: bool,
    pub expand_all: bool,
    pub class_codes: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AliasSetViewModel {
    pub label: String,
    pub code: i64,
    /// Catalog label the alias now resolves to
    pub category: String,
    pub known_code: bool,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigView;
        Box::new(ConfigView::new(self, options))
    }
}

impl CreateView for AliasSetViewModel {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::AliasSetView;
        Box::new(AliasSetView::new(self, options))
    }
}
