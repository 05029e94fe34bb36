use crate::args::OutputFormat;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, RenderOptions, Renderer};
use anyhow::Result;
use serde::Serialize;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub options: RenderOptions,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, options: RenderOptions) -> Self {
        Self { format, options }
    }

    /// Render a view model using the configured format and render options
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format == OutputFormat::Json, self.options);
        renderer.render(view_model)
    }
}
