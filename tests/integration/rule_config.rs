//! Integration test: rule sets loaded from JSON files drive inverse naming.

use std::io::Write;

use oak::library;
use oak::{OakError, Position, RuleSet};

fn write_rules(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write rules");
    file
}

#[test]
fn loaded_rules_rename_library_inverses() {
    let file = write_rules(
        r#"[
            {"position": "<", "old": "is_", "new": "not_", "stop_after": true},
            {"position": "<", "old": "", "new": "not_", "stop_after": true}
        ]"#,
    );
    let rules = RuleSet::load(file.path()).unwrap();
    assert_eq!(rules.rules()[0].position, Position::Prefix);

    let ns = library::build_with(rules).unwrap();
    assert!(ns.contains("not_list"));
    assert!(!ns.contains("isnt_list"));
    assert!(ns.resolve("not_list").unwrap().test("x").unwrap());
}

#[test]
fn suffix_rules_from_file() {
    let file = write_rules(
        r#"[
            {"position": "suffix", "old": "_valid", "new": "_invalid", "stop_after": true},
            {"position": "prefix", "old": "", "new": "not_", "stop_after": true}
        ]"#,
    );
    let rules = RuleSet::load(file.path()).unwrap();
    assert_eq!(oak::derive("name_valid", &rules).unwrap(), "name_invalid");
    assert_eq!(oak::derive("is_str", &rules).unwrap(), "not_is_str");
}

#[test]
fn rules_without_fallback_fail_library_build() {
    let file = write_rules(
        r#"[{"position": "anywhere", "old": "_str", "new": "_text", "stop_after": true}]"#,
    );
    let rules = RuleSet::load(file.path()).unwrap();
    let err = library::build_with(rules).unwrap_err();
    // is_of is defined first and has no "_str" in its name.
    assert!(matches!(err, OakError::NameDerivation { ref name } if name == "is_of"));
}

#[test]
fn invalid_rule_files_are_rejected() {
    let empty = write_rules("[]");
    assert!(matches!(
        RuleSet::load(empty.path()).unwrap_err(),
        OakError::InvalidRules(_)
    ));

    let malformed = write_rules("{not json");
    assert!(matches!(
        RuleSet::load(malformed.path()).unwrap_err(),
        OakError::Serialization(_)
    ));

    let missing = std::path::Path::new("/nonexistent/oak/rules.json");
    assert!(matches!(
        RuleSet::load(missing).unwrap_err(),
        OakError::Io(_)
    ));
}

#[test]
fn default_rules_survive_json_round_trip() {
    let json = RuleSet::default().to_json_pretty().unwrap();
    assert!(json.contains("\"prefix\""));
    assert_eq!(RuleSet::from_json_str(&json).unwrap(), RuleSet::default());
}
