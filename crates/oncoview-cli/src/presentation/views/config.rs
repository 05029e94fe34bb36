use std::fmt;

use crate::presentation::view_models::{
    AliasSetViewModel, ConfigViewModel, RenderOptions, ViewMode,
};

// --------------------------------------------------------
// Config View
// --------------------------------------------------------

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    options: RenderOptions,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel, options: RenderOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.options.mode == ViewMode::Minimal {
            writeln!(f, "{}", self.data.path.display())?;
            return Ok(());
        }

        let status = if self.data.exists { "" } else { " (not found)" };
        writeln!(f, "Config file: {}{}", self.data.path.display(), status)?;
        writeln!(f, "view_mode:   {}", self.data.view_mode)?;
        writeln!(f, "color:       {}", self.data.color)?;
        writeln!(f, "expand_all:  {}", self.data.expand_all)?;

        if self.data.class_codes.is_empty() {
            writeln!(f, "class_codes: (none)")?;
        } else {
            writeln!(f, "class_codes:")?;
            for (label, code) in &self.data.class_codes {
                writeln!(f, "  {} -> {}", label, code)?;
            }
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Alias Set View
// --------------------------------------------------------

pub struct AliasSetView<'a> {
    data: &'a AliasSetViewModel,
    options: RenderOptions,
}

impl<'a> AliasSetView<'a> {
    pub fn new(data: &'a AliasSetViewModel, options: RenderOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for AliasSetView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.options.mode {
            ViewMode::Minimal => writeln!(f, "{}\t{}", self.data.label, self.data.code),
            _ => writeln!(
                f,
                "Alias '{}' -> {} ({})",
                self.data.label, self.data.code, self.data.category
            ),
        }
    }
}
