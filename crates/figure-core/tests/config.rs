// File: crates/figure-core/tests/config.rs
// Purpose: Validate JSON configuration of labels and style (requires the `serde` feature).
#![cfg(feature = "serde")]

use figure_core::{FontCode, Label, LuminosityLabel, Position, TdrStyle, TextAlign};

#[test]
fn partial_label_config_keeps_defaults() {
    let label: Label = serde_json::from_str(
        r#"{ "position": "outside", "sublabel": { "text": "Simulation" } }"#,
    )
    .expect("parse label");
    assert_eq!(label.position, Position::Outside);
    assert_eq!(label.text, "CMS");
    assert_eq!(label.font, FontCode::HELVETICA_BOLD);
    assert_eq!(label.sublabel.text, "Simulation");
    assert_eq!(label.sublabel.scale, 0.76);
    assert_eq!(label.padding_top, None);
}

#[test]
fn alignment_uses_legacy_code() {
    let lumi: LuminosityLabel = serde_json::from_str(r#"{ "text": "13 TeV", "align": 33 }"#).unwrap();
    assert_eq!(lumi.align, TextAlign::RIGHT_TOP);
    assert_eq!(serde_json::to_value(TextAlign::LEFT_TOP).unwrap(), serde_json::json!(13));
    assert!(serde_json::from_str::<LuminosityLabel>(r#"{ "align": 44 }"#).is_err());
    assert!(serde_json::from_str::<Label>(r#"{ "position": "diagonal" }"#).is_err());
}

#[test]
fn style_survives_json() {
    let json = serde_json::to_string(&TdrStyle::tdr()).unwrap();
    let back: TdrStyle = serde_json::from_str(&json).unwrap();
    assert_eq!(back, TdrStyle::tdr());
}
