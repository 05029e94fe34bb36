use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;

use super::{ClassificationCode, ProbabilityDistribution};
use crate::Result;

/// Output of a single classifier for one patient submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPrediction {
    pub model_name: String,
    pub cancer_type_detailed: String,
    pub cancer_type_code: ClassificationCode,

    /// Probability of the predicted class, when the model exposes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probabilities: Option<ProbabilityDistribution>,
}

impl ModelPrediction {
    pub fn new(
        model_name: impl Into<String>,
        cancer_type_detailed: impl Into<String>,
        cancer_type_code: impl Into<ClassificationCode>,
    ) -> Self {
        Self {
            model_name: model_name.into(),
            cancer_type_detailed: cancer_type_detailed.into(),
            cancer_type_code: cancer_type_code.into(),
            confidence: None,
            probabilities: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_probabilities(mut self, probabilities: ProbabilityDistribution) -> Self {
        self.probabilities = Some(probabilities);
        self
    }
}

/// Response of the multi-model prediction endpoint.
///
/// `predictions` keeps the order in which the models ran. `class_codes` is an
/// optional label -> code table the service may send alongside the
/// distributions so that probability labels can be mapped back to categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiModelPredictionResult {
    pub predictions: Vec<ModelPrediction>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub class_codes: BTreeMap<String, ClassificationCode>,
}

impl MultiModelPredictionResult {
    pub fn new(predictions: Vec<ModelPrediction>) -> Self {
        Self {
            predictions,
            class_codes: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}

/// Parse a prediction payload from its JSON text
pub fn parse_payload(json: &str) -> Result<MultiModelPredictionResult> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a prediction payload from any reader (file, stdin)
pub fn read_payload<R: Read>(mut reader: R) -> Result<MultiModelPredictionResult> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_payload(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_absent() {
        let json = r#"{
            "predictions": [
                {"model_name": "Decision Tree", "cancer_type_detailed": "Breast", "cancer_type_code": 0}
            ]
        }"#;

        let result = parse_payload(json).unwrap();
        let pred = &result.predictions[0];
        assert_eq!(pred.confidence, None);
        assert_eq!(pred.probabilities, None);
        assert!(result.class_codes.is_empty());
    }

    #[test]
    fn test_null_confidence_is_absent_not_zero() {
        let json = r#"{
            "predictions": [
                {"model_name": "SVM", "cancer_type_detailed": "Breast", "cancer_type_code": 0,
                 "confidence": null, "probabilities": null}
            ]
        }"#;

        let result = parse_payload(json).unwrap();
        assert_eq!(result.predictions[0].confidence, None);
        assert_eq!(result.predictions[0].probabilities, None);
    }

    #[test]
    fn test_zero_confidence_is_kept() {
        let pred = ModelPrediction::new("SVM", "Breast", 0).with_confidence(0.0);
        let json = serde_json::to_value(&pred).unwrap();
        assert_eq!(json["confidence"], serde_json::json!(0.0));
    }

    #[test]
    fn test_absent_fields_are_not_serialized() {
        let pred = ModelPrediction::new("SVM", "Breast", 0);
        let json = serde_json::to_value(&pred).unwrap();
        assert!(json.get("confidence").is_none());
        assert!(json.get("probabilities").is_none());
    }

    #[test]
    fn test_read_payload_from_reader() {
        let json = br#"{"predictions": [], "class_codes": {"Breast": 0}}"#;
        let result = read_payload(&json[..]).unwrap();
        assert!(result.is_empty());
        assert_eq!(
            result.class_codes.get("Breast"),
            Some(&ClassificationCode::new(0))
        );
    }

    #[test]
    fn test_invalid_payload_is_json_error() {
        let err = parse_payload(r#"{"predictions": "nope"}"#).unwrap_err();
        assert!(matches!(err, crate::Error::Json(_)));
        assert!(err.to_string().starts_with("Invalid prediction payload"));
    }
}
