use oncoview_engine::{self as engine, ClassCodeTable, Consensus, ProbabilityEntry};
use oncoview_types::ModelPrediction;
use tracing::debug;

use super::aggregate::AggregatePresenter;
use crate::presentation::formatters::format_percentage;
use crate::presentation::view_models::{
    CommandResultViewModel, ConsensusViewModel, Guidance, ModelCardViewModel, ModelIcon,
    ModelResultView, PredictionReportViewModel, ProbabilityEntryViewModel, StatusBadge,
};

/// Icon for a model name; names outside the known families get the generic icon
pub fn model_icon(model_name: &str) -> ModelIcon {
    match model_name {
        "SVM" => ModelIcon::Svm,
        "Random Forest" => ModelIcon::RandomForest,
        "Decision Tree" => ModelIcon::DecisionTree,
        _ => ModelIcon::Generic,
    }
}

/// Build the renderable result for one model. Pure: same input, same output.
///
/// The description follows the predicted code; probability colors follow the
/// code of each probability label (see `oncoview_engine::summarize`).
pub fn build_model_result(
    prediction: &ModelPrediction,
    class_codes: &ClassCodeTable,
) -> ModelResultView {
    let code = prediction.cancer_type_code;
    let category = engine::lookup_category(code);

    let icon = model_icon(&prediction.model_name);
    if icon == ModelIcon::Generic {
        debug!(model = %prediction.model_name, "no dedicated icon for model");
    }
    if !engine::catalog::is_known(code) {
        debug!(model = %prediction.model_name, %code, "category code not in catalog");
    }

    let probabilities: Vec<ProbabilityEntryViewModel> =
        engine::summarize_prediction(prediction, class_codes)
            .into_iter()
            .map(probability_entry)
            .collect();

    ModelResultView {
        model_name: prediction.model_name.clone(),
        icon,
        detailed_label: prediction.cancer_type_detailed.clone(),
        code: code.value(),
        color: category.color,
        description: category.description.to_string(),
        confidence: prediction.confidence,
        confidence_display: prediction.confidence.map(format_percentage),
        has_distribution: !probabilities.is_empty(),
        probabilities,
    }
}

fn probability_entry(entry: ProbabilityEntry) -> ProbabilityEntryViewModel {
    ProbabilityEntryViewModel {
        label: entry.label,
        probability: entry.probability,
        code: entry.code.value(),
        color: entry.color,
    }
}

pub fn consensus_view(consensus: &Consensus) -> ConsensusViewModel {
    ConsensusViewModel {
        code: consensus.code.value(),
        label: consensus.label.to_string(),
        color: engine::catalog::color_for(consensus.code),
        agreement: consensus.agreement,
        vote_count: consensus.vote_count,
        total_models: consensus.total_models,
    }
}

/// Snapshot the presenter's current response and expansion state as a report
pub fn present_prediction_report(
    presenter: &AggregatePresenter,
) -> CommandResultViewModel<PredictionReportViewModel> {
    let models: Vec<ModelCardViewModel> = presenter
        .views()
        .iter()
        .map(|view| ModelCardViewModel {
            expanded: presenter.is_expanded(&view.model_name),
            result: view.clone(),
        })
        .collect();

    let consensus = consensus_view(&presenter.consensus());

    let collapsed_with_distribution = models
        .iter()
        .filter(|card| card.result.has_distribution && !card.expanded)
        .count();

    let content = PredictionReportViewModel { models, consensus };
    let mut result = CommandResultViewModel::new(content);

    if result.content.models.is_empty() {
        return result
            .with_badge(StatusBadge::warning("No model predictions in response"))
            .with_suggestion(Guidance::new(
                "Check that the prediction service loaded at least one model",
            ));
    }

    let consensus = &result.content.consensus;
    let badge = if consensus.agreement {
        StatusBadge::success(format!(
            "All {} model(s) agree: {}",
            consensus.total_models, consensus.label
        ))
    } else {
        StatusBadge::info(format!(
            "{}/{} models agree: {}",
            consensus.vote_count, consensus.total_models, consensus.label
        ))
    };
    result = result.with_badge(badge);

    if collapsed_with_distribution > 0 {
        result = result.with_suggestion(
            Guidance::new("Show the probability breakdown")
                .with_command("oncoview show --expand <MODEL>  (or --expand-all)"),
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use oncoview_types::{MultiModelPredictionResult, ProbabilityDistribution};

    fn svm_prediction() -> ModelPrediction {
        let dist: ProbabilityDistribution =
            [("A", 0.1), ("B", 0.6), ("C", 0.3)].into_iter().collect();
        ModelPrediction::new("SVM", "Invasive Ductal Carcinoma", 1)
            .with_confidence(0.87)
            .with_probabilities(dist)
    }

    #[test]
    fn test_build_scenario() {
        let view = build_model_result(&svm_prediction(), &ClassCodeTable::default());

        assert_eq!(view.model_name, "SVM");
        assert_eq!(view.icon, ModelIcon::Svm);
        assert_eq!(view.detailed_label, "Invasive Ductal Carcinoma");
        assert_eq!(view.description, "Invasive Ductal Carcinoma");
        assert_eq!(view.color.as_str(), "#e74c3c");
        assert_eq!(view.confidence, Some(0.87));
        assert_eq!(view.confidence_display.as_deref(), Some("87.00%"));
        assert!(view.has_distribution);

        let order: Vec<(&str, f64)> = view
            .probabilities
            .iter()
            .map(|e| (e.label.as_str(), e.probability))
            .collect();
        assert_eq!(order, vec![("B", 0.6), ("C", 0.3), ("A", 0.1)]);
    }

    #[test]
    fn test_build_is_idempotent() {
        let prediction = svm_prediction();
        let table = ClassCodeTable::default();
        assert_eq!(
            build_model_result(&prediction, &table),
            build_model_result(&prediction, &table)
        );
    }

    #[test]
    fn test_unknown_code_uses_fallbacks() {
        let prediction = ModelPrediction::new("Gradient Boosting", "Something", 99);
        let view = build_model_result(&prediction, &ClassCodeTable::default());

        assert_eq!(view.icon, ModelIcon::Generic);
        assert_eq!(view.description, "No detail available");
        assert_eq!(view.color.as_str(), "#95a5a6");
    }

    #[test]
    fn test_missing_optionals_are_omitted() {
        let prediction = ModelPrediction::new("Decision Tree", "Breast", 0);
        let view = build_model_result(&prediction, &ClassCodeTable::default());

        assert_eq!(view.confidence, None);
        assert_eq!(view.confidence_display, None);
        assert!(view.probabilities.is_empty());
        assert!(!view.has_distribution);

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("confidence").is_none());
        assert!(json.get("confidence_display").is_none());
        assert_eq!(json["has_distribution"], serde_json::json!(false));
    }

    #[test]
    fn test_zero_confidence_is_displayed() {
        let prediction = ModelPrediction::new("SVM", "Breast", 0).with_confidence(0.0);
        let view = build_model_result(&prediction, &ClassCodeTable::default());
        assert_eq!(view.confidence_display.as_deref(), Some("0.00%"));
    }

    #[test]
    fn test_empty_distribution_has_no_section() {
        let prediction = ModelPrediction::new("SVM", "Breast", 0)
            .with_probabilities(ProbabilityDistribution::new());
        let view = build_model_result(&prediction, &ClassCodeTable::default());
        assert!(!view.has_distribution);
    }

    #[test]
    fn test_model_icons() {
        assert_eq!(model_icon("SVM"), ModelIcon::Svm);
        assert_eq!(model_icon("Random Forest"), ModelIcon::RandomForest);
        assert_eq!(model_icon("Decision Tree"), ModelIcon::DecisionTree);
        assert_eq!(model_icon("svm"), ModelIcon::Generic);
        assert_eq!(model_icon(""), ModelIcon::Generic);
    }

    #[test]
    fn test_report_badges() {
        let mut presenter = AggregatePresenter::new(ClassCodeTable::default());

        presenter.present(MultiModelPredictionResult::default());
        let empty = present_prediction_report(&presenter);
        assert_eq!(empty.badge.unwrap().level, crate::presentation::StatusLevel::Warning);

        presenter.present(MultiModelPredictionResult::new(vec![
            svm_prediction(),
            ModelPrediction::new("Random Forest", "Breast Invasive Lobular Carcinoma", 2)
                .with_confidence(0.64),
        ]));
        let split = present_prediction_report(&presenter);
        let badge = split.badge.unwrap();
        assert_eq!(badge.level, crate::presentation::StatusLevel::Info);
        assert_eq!(badge.label, "1/2 models agree: Breast Invasive Ductal Carcinoma");
        assert_eq!(split.suggestions.len(), 1);
    }

    #[test]
    fn test_report_carries_expansion() {
        let mut presenter = AggregatePresenter::new(ClassCodeTable::default());
        presenter.present(MultiModelPredictionResult::new(vec![svm_prediction()]));
        presenter.toggle("SVM");

        let report = present_prediction_report(&presenter);
        assert!(report.content.models[0].expanded);
        assert!(report.suggestions.is_empty());
    }
}
