use oncoview_engine::{summarize, summarize_prediction, ClassCodeTable, ProbabilityEntry};
use oncoview_types::{ClassificationCode, ModelPrediction, ProbabilityDistribution};

fn sample_distributions() -> Vec<ProbabilityDistribution> {
    let raw: Vec<Vec<(&str, f64)>> = vec![
        vec![],
        vec![("only", 1.0)],
        vec![("A", 0.1), ("B", 0.6), ("C", 0.3)],
        vec![("a", 0.25), ("b", 0.25), ("c", 0.25), ("d", 0.25)],
        vec![("p", 0.0), ("q", 0.9), ("r", 0.0), ("s", 0.05), ("t", 0.05)],
        vec![
            ("Breast", 0.0213),
            ("Breast Invasive Ductal Carcinoma", 0.8712),
            ("Breast Invasive Lobular Carcinoma", 0.0655),
            ("Breast Invasive Mixed Mucinous Carcinoma", 0.0102),
            ("Breast Mixed Ductal and Lobular Carcinoma", 0.0318),
        ],
        vec![("over", 3.0), ("under", -1.0), ("sum", 0.7)],
    ];

    raw.into_iter()
        .map(|pairs| pairs.into_iter().collect())
        .collect()
}

fn run(dist: &ProbabilityDistribution) -> Vec<ProbabilityEntry> {
    summarize(dist, &ClassCodeTable::default(), ClassificationCode::new(1))
}

#[test]
fn test_output_is_permutation_of_input() {
    for dist in sample_distributions() {
        let entries = run(&dist);
        assert_eq!(entries.len(), dist.len());

        let mut expected: Vec<(String, u64)> = dist
            .iter()
            .map(|(l, p)| (l.to_string(), p.to_bits()))
            .collect();
        let mut actual: Vec<(String, u64)> = entries
            .iter()
            .map(|e| (e.label.clone(), e.probability.to_bits()))
            .collect();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_output_is_non_increasing() {
    for dist in sample_distributions() {
        let entries = run(&dist);
        for pair in entries.windows(2) {
            assert!(
                pair[0].probability >= pair[1].probability,
                "{} before {}",
                pair[0].probability,
                pair[1].probability
            );
        }
    }
}

#[test]
fn test_equal_probabilities_keep_input_order() {
    for dist in sample_distributions() {
        let entries = run(&dist);
        let source_index = |label: &str| dist.iter().position(|(l, _)| l == label).unwrap();

        for pair in entries.windows(2) {
            if pair[0].probability == pair[1].probability {
                assert!(source_index(&pair[0].label) < source_index(&pair[1].label));
            }
        }
    }
}

#[test]
fn test_prediction_without_probabilities_is_empty() {
    let prediction = ModelPrediction::new("Decision Tree", "Breast", 0);
    assert!(summarize_prediction(&prediction, &ClassCodeTable::default()).is_empty());
}

#[test]
fn test_summarize_scenario_snapshot() {
    let dist: ProbabilityDistribution = [("A", 0.1), ("B", 0.6), ("C", 0.3)].into_iter().collect();
    let prediction = ModelPrediction::new("SVM", "Invasive Ductal Carcinoma", 1)
        .with_confidence(0.87)
        .with_probabilities(dist);

    let entries = summarize_prediction(&prediction, &ClassCodeTable::default());

    insta::assert_json_snapshot!(entries, @r###"
    [
      {
        "label": "B",
        "probability": 0.6,
        "code": 1,
        "color": "#e74c3c"
      },
      {
        "label": "C",
        "probability": 0.3,
        "code": 1,
        "color": "#e74c3c"
      },
      {
        "label": "A",
        "probability": 0.1,
        "code": 1,
        "color": "#e74c3c"
      }
    ]
    "###);
}
