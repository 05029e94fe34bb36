use oncoview_engine::catalog;
use oncoview_types::ClassificationCode;
use std::path::Path;

use crate::config::Config;
use crate::presentation::view_models::{
    AliasSetViewModel, CommandResultViewModel, ConfigViewModel, Guidance, StatusBadge,
};

pub fn present_config(config: &Config, path: &Path) -> CommandResultViewModel<ConfigViewModel> {
    let exists = path.exists();
    let content = ConfigViewModel {
        path: path.to_path_buf(),
        exists,
        view_mode: config.display.view_mode,
        color: config.display.color,
        expand_all: config.display.expand_all,
        class_codes: config.class_codes.clone(),
    };

    let result = CommandResultViewModel::new(content);
    if exists {
        result
    } else {
        result
            .with_badge(StatusBadge::info("No config file, using defaults"))
            .with_suggestion(
                Guidance::new("Create one by adding a label alias")
                    .with_command("oncoview config set-alias <LABEL> <CODE>"),
            )
    }
}

pub fn present_alias_set(label: String, code: i64) -> CommandResultViewModel<AliasSetViewModel> {
    let code_value = ClassificationCode::new(code);
    let known_code = catalog::is_known(code_value);
    let category = catalog::lookup(code_value).label.to_string();

    let badge_label = format!("'{}' now maps to code {} ({})", label, code, category);
    let content = AliasSetViewModel {
        label,
        code,
        category,
        known_code,
    };

    let result = CommandResultViewModel::new(content);
    if known_code {
        result.with_badge(StatusBadge::success(badge_label))
    } else {
        result
            .with_badge(StatusBadge::warning(badge_label))
            .with_suggestion(
                Guidance::new("List the known category codes").with_command("oncoview classes"),
            )
    }
}
