use std::fmt;

use crate::presentation::formatters::paint;
use crate::presentation::view_models::{ClassListViewModel, RenderOptions, ViewMode};

pub struct ClassListView<'a> {
    data: &'a ClassListViewModel,
    options: RenderOptions,
}

impl<'a> ClassListView<'a> {
    pub fn new(data: &'a ClassListViewModel, options: RenderOptions) -> Self {
        Self { data, options }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for class in &self.data.classes {
            writeln!(f, "{}\t{}", class.code, class.label)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for class in &self.data.classes {
            writeln!(
                f,
                "{} {}",
                class.code,
                paint(&class.label, class.color, self.options.color)
            )?;
        }
        Ok(())
    }

    fn render_table(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:<5} {:<8} {:<42} DESCRIPTION", "CODE", "COLOR", "LABEL")?;
        writeln!(f, "{}", "-".repeat(80))?;

        for class in &self.data.classes {
            let label = format!("{:<42}", class.label);
            writeln!(
                f,
                "{:<5} {:<8} {} {}",
                class.code,
                class.color.as_str(),
                paint(&label, class.color, self.options.color),
                class.description
            )?;
        }

        let fallback = &self.data.fallback;
        writeln!(
            f,
            "{:<5} {:<8} {:<42} {}",
            "*",
            fallback.color.as_str(),
            fallback.label,
            fallback.description
        )?;

        Ok(())
    }
}

impl<'a> fmt::Display for ClassListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.options.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard | ViewMode::Verbose => self.render_table(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::presentation::presenters::present_class_list;
    use crate::presentation::view_models::{CreateView, RenderOptions, ViewMode};

    #[test]
    fn test_minimal_lists_codes() {
        let list = present_class_list();
        let output = list
            .content
            .create_view(RenderOptions::plain(ViewMode::Minimal))
            .to_string();
        insta::assert_snapshot!(output.trim_end(), @r"
        0	Breast
        1	Breast Invasive Ductal Carcinoma
        2	Breast Invasive Lobular Carcinoma
        3	Breast Invasive Mixed Mucinous Carcinoma
        4	Breast Mixed Ductal and Lobular Carcinoma
        ");
    }

    #[test]
    fn test_table_ends_with_fallback() {
        let list = present_class_list();
        let output = list
            .content
            .create_view(RenderOptions::plain(ViewMode::Standard))
            .to_string();

        assert!(output.starts_with("CODE  COLOR    LABEL"));
        assert!(output.contains("1     #e74c3c  Breast Invasive Ductal Carcinoma"));
        let last = output.lines().last().unwrap();
        assert!(last.starts_with("*     #95a5a6  Unknown"));
        assert!(last.ends_with("No detail available"));
    }
}
