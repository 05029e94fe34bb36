mod common;

use common::TestFixture;

#[test]
fn test_classes_table() {
    let fixture = TestFixture::new();

    let output = fixture.stdout(&["classes"]);

    assert!(output.starts_with("ℹ️ 5 known categories\n"));
    assert!(output.contains("0     #3498db  Breast "));
    assert!(output.contains("4     #e67e22  Breast Mixed Ductal and Lobular Carcinoma"));
    assert!(output.contains("*     #95a5a6  Unknown"));
    assert!(output.contains("oncoview config set-alias <LABEL> <CODE>"));
}

#[test]
fn test_classes_json() {
    let fixture = TestFixture::new();

    let output = fixture.stdout(&["classes", "--format", "json"]);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    let classes = json["content"]["classes"].as_array().unwrap();
    assert_eq!(classes.len(), 5);
    assert_eq!(classes[2]["label"], "Breast Invasive Lobular Carcinoma");
    assert_eq!(classes[2]["description"], "Invasive Lobular Carcinoma");
    assert_eq!(json["content"]["fallback"]["color"], "#95a5a6");
}
