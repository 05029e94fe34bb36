use oncoview_engine::ColorToken;
use serde::Serialize;
use std::fmt;

use super::{CreateView, RenderOptions};

#[derive(Debug, Clone, Serialize)]
pub struct ClassListViewModel {
    pub classes: Vec<ClassEntryViewModel>,
    pub fallback: ClassFallbackViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassEntryViewModel {
    pub code: i64,
    pub label: String,
    pub description: String,
    pub color: ColorToken,
}

/// Display values used for codes outside the catalog
#[derive(Debug, Clone, Serialize)]
pub struct ClassFallbackViewModel {
    pub label: String,
    pub description: String,
    pub color: ColorToken,
}

impl CreateView for ClassListViewModel {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::catalog::ClassListView;
        Box::new(ClassListView::new(self, options))
    }
}
