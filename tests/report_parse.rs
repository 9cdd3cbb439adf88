use weed_identifier::report::WeedReport;

const FULL_REPLY: &str = r#"{
  "name": "Dandelion",
  "scientificName": "Taraxacum officinale",
  "description": "A perennial with a deep taproot and yellow flower heads.",
  "characteristics": ["Rosette leaves", "Yellow flowers", "Deep taproot"],
  "controlMethods": ["Hand pulling", "Mulching"],
  "impact": "Competes with crops for water and nutrients."
}"#;

fn full_report() -> WeedReport {
    WeedReport {
        name: "Dandelion".to_string(),
        scientific_name: "Taraxacum officinale".to_string(),
        description: "A perennial with a deep taproot and yellow flower heads.".to_string(),
        characteristics: vec![
            "Rosette leaves".to_string(),
            "Yellow flowers".to_string(),
            "Deep taproot".to_string(),
        ],
        control_methods: vec!["Hand pulling".to_string(), "Mulching".to_string()],
        impact: "Competes with crops for water and nutrients.".to_string(),
    }
}

#[test]
fn parses_bare_json_reply() {
    assert_eq!(WeedReport::from_model_reply(FULL_REPLY), full_report());
}

#[test]
fn parses_fenced_json_reply() {
    let fenced = format!("```json\n{FULL_REPLY}\n```");
    assert_eq!(WeedReport::from_model_reply(&fenced), full_report());
}

#[test]
fn extracts_object_surrounded_by_prose() {
    let chatty = "Sure! ```json {\"name\":\"Dandelion\"} ``` Let me know if you need more.";
    let report = WeedReport::from_model_reply(chatty);
    assert_eq!(report.name, "Dandelion");
    assert_eq!(report.scientific_name, "");
    assert!(report.characteristics.is_empty());
}

#[test]
fn missing_fields_default_to_empty() {
    let partial = r#"{"name": "Bindweed", "impact": "Chokes row crops."}"#;
    let report = WeedReport::from_model_reply(partial);
    assert_eq!(report.name, "Bindweed");
    assert_eq!(report.impact, "Chokes row crops.");
    assert_eq!(report.description, "");
    assert!(report.control_methods.is_empty());
}

#[test]
fn json_free_reply_falls_back_to_analysis_error() {
    let report = WeedReport::from_model_reply("The image is too blurry to tell.");
    assert_eq!(report, WeedReport::analysis_error());
    assert_eq!(report.name, "Analysis Error");
    assert!(report.characteristics.is_empty());
    assert!(report.control_methods.is_empty());
}

#[test]
fn wrong_typed_field_falls_back() {
    // A number where a string belongs fails both parse stages.
    let report = WeedReport::from_model_reply(r#"{"name": 3}"#);
    assert_eq!(report, WeedReport::analysis_error());
}

#[test]
fn non_object_json_falls_back() {
    let report = WeedReport::from_model_reply("[1, 2, 3]");
    assert_eq!(report, WeedReport::analysis_error());
}

#[test]
fn same_reply_yields_identical_reports() {
    let chatty = "Here you go: {\"name\":\"Crabgrass\"} enjoy!";
    assert_eq!(
        WeedReport::from_model_reply(chatty),
        WeedReport::from_model_reply(chatty)
    );
    assert_eq!(
        WeedReport::from_model_reply(FULL_REPLY),
        WeedReport::from_model_reply(FULL_REPLY)
    );
}

#[test]
fn serializes_with_camel_case_names() {
    let value = serde_json::to_value(full_report()).unwrap();
    assert!(value.get("scientificName").is_some());
    assert!(value.get("controlMethods").is_some());
    assert!(value.get("scientific_name").is_none());
}
