//! 变调集成测试
//!
//! 通过 crate 公开接口测试完整的规则表覆盖

use sandhi_core::{RuleSetKind, SandhiEngine, SyllableClass, ToneMarker, UpstreamResponse};

/// 辅助：按字符调用引擎，返回字符结果
fn apply_char(engine: &SandhiEngine, marker: char, class: SyllableClass) -> char {
    let marker = ToneMarker::from_char(marker).unwrap();
    engine.apply(marker, class).as_char()
}

#[test]
fn test_tri_syllable_tables() {
    let engine = SandhiEngine::new(RuleSetKind::TriSyllable);

    // 舒声
    assert_eq!(apply_char(&engine, '1', SyllableClass::Plain), '9');
    assert_eq!(apply_char(&engine, '2', SyllableClass::Plain), '1');
    assert_eq!(apply_char(&engine, '3', SyllableClass::Plain), '2');
    assert_eq!(apply_char(&engine, '5', SyllableClass::Plain), '9');
    assert_eq!(apply_char(&engine, '7', SyllableClass::Plain), '9');

    // 入声
    assert_eq!(apply_char(&engine, '4', SyllableClass::Entering), '8');
    assert_eq!(apply_char(&engine, '8', SyllableClass::Entering), '4');

    // 喉入声
    assert_eq!(apply_char(&engine, '4', SyllableClass::GlottalEntering), '2');
}

#[test]
fn test_pre_diminutive_tables() {
    let engine = SandhiEngine::new(RuleSetKind::PreDiminutive);

    // 舒声
    assert_eq!(apply_char(&engine, '1', SyllableClass::Plain), '7');
    assert_eq!(apply_char(&engine, '2', SyllableClass::Plain), '1');
    assert_eq!(apply_char(&engine, '3', SyllableClass::Plain), '1');
    assert_eq!(apply_char(&engine, '5', SyllableClass::Plain), '7');
    assert_eq!(apply_char(&engine, '7', SyllableClass::Plain), '7');

    // 入声
    assert_eq!(apply_char(&engine, '8', SyllableClass::Entering), '4');

    // 喉入声
    assert_eq!(apply_char(&engine, '8', SyllableClass::GlottalEntering), '7');
    assert_eq!(apply_char(&engine, '4', SyllableClass::GlottalEntering), '1');
}

#[test]
fn test_regular_tables() {
    let engine = SandhiEngine::new(RuleSetKind::Regular);

    assert_eq!(apply_char(&engine, '1', SyllableClass::Plain), '7');
    assert_eq!(apply_char(&engine, '7', SyllableClass::Plain), '3');
    assert_eq!(apply_char(&engine, '5', SyllableClass::Plain), '7');
    assert_eq!(apply_char(&engine, '8', SyllableClass::Entering), '4');
    assert_eq!(apply_char(&engine, '8', SyllableClass::GlottalEntering), '3');
}

#[test]
fn test_unmapped_marker_returns_unchanged() {
    // 第 6 调在所有规则表中都缺席
    for kind in [
        RuleSetKind::Regular,
        RuleSetKind::TriSyllable,
        RuleSetKind::PreDiminutive,
    ] {
        let engine = SandhiEngine::new(kind);
        for class in [
            SyllableClass::Plain,
            SyllableClass::Entering,
            SyllableClass::GlottalEntering,
        ] {
            assert_eq!(apply_char(&engine, '6', class), '6');
        }
    }
}

#[test]
fn test_invalid_classification_tag() {
    for kind in [RuleSetKind::TriSyllable, RuleSetKind::PreDiminutive] {
        let engine = SandhiEngine::new(kind);
        let marker = ToneMarker::from_char('1').unwrap();
        assert!(engine.apply_tagged(marker, "tone").is_err());
        assert!(engine.apply_tagged(marker, "").is_err());
    }
}

#[test]
fn test_repeated_application_deterministic() {
    let engine = SandhiEngine::new(RuleSetKind::TriSyllable);

    for _ in 0..3 {
        assert_eq!(apply_char(&engine, '1', SyllableClass::Plain), '9');
        assert_eq!(apply_char(&engine, '4', SyllableClass::Entering), '8');
    }
}

#[test]
fn test_upstream_response_original_id() {
    let response = UpstreamResponse::from_json(r#"{"body": {"originalId": "abc123"}}"#).unwrap();
    assert_eq!(response.original_id().unwrap(), "abc123");

    let missing = UpstreamResponse::from_json(r#"{"body": {}}"#).unwrap();
    assert!(missing.original_id().is_err());
}

#[test]
fn test_config_selects_engine_ruleset() {
    use sandhi_core::SandhiConfig;

    let config: SandhiConfig = toml::from_str(r#"ruleset = "pre_diminutive""#).unwrap();
    let engine = SandhiEngine::new(config.ruleset);

    assert_eq!(apply_char(&engine, '1', SyllableClass::Plain), '7');
}
