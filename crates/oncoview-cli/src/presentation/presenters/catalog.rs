use oncoview_engine::catalog;

use crate::presentation::view_models::{
    ClassEntryViewModel, ClassFallbackViewModel, ClassListViewModel, CommandResultViewModel,
    Guidance, StatusBadge,
};

pub fn present_class_list() -> CommandResultViewModel<ClassListViewModel> {
    let classes: Vec<ClassEntryViewModel> = catalog::entries()
        .iter()
        .map(|entry| ClassEntryViewModel {
            code: entry.code.value(),
            label: entry.label.to_string(),
            description: entry.description.to_string(),
            color: entry.color,
        })
        .collect();

    let fallback = ClassFallbackViewModel {
        label: catalog::FALLBACK.label.to_string(),
        description: catalog::FALLBACK.description.to_string(),
        color: catalog::FALLBACK.color,
    };

    let label = format!("{} known categories", classes.len());

    CommandResultViewModel::new(ClassListViewModel { classes, fallback })
        .with_badge(StatusBadge::info(label))
        .with_suggestion(
            Guidance::new("Map a custom probability label to a category")
                .with_command("oncoview config set-alias <LABEL> <CODE>"),
        )
}
