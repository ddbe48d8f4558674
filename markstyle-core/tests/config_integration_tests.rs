// markstyle-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

// Import the specific types and functions needed from the main crate's config module
use markstyle_core::config::{self, StyleConfig, StyleRule, StyleSetting};

fn custom_rule(name: &str, pattern: Option<&str>, styles: Vec<StyleSetting>) -> StyleRule {
    StyleRule {
        name: name.to_string(),
        pattern: pattern.map(String::from),
        styles,
        ..Default::default()
    }
}

#[test]
fn test_load_default_rules() {
    let config = StyleConfig::load_default_rules().unwrap();
    let names: Vec<&str> = config.rules.iter().map(|r| r.name.as_str()).collect();
    // Canonical order is part of the contract: it breaks ties between
    // matches sharing a start offset.
    assert_eq!(names, vec!["bold", "italic", "h1", "h2", "h3", "h4", "h5", "h6"]);

    let bold = &config.rules[0];
    assert_eq!(bold.pattern.as_deref(), Some(r"\*(.*?)\*"));
    assert!(!bold.multiline);
    assert_eq!(bold.styles, vec![StyleSetting::Font("%bold%".to_string())]);

    let h1 = config.rules.iter().find(|r| r.name == "h1").unwrap();
    assert!(h1.multiline);
    assert_eq!(
        h1.styles,
        vec![
            StyleSetting::Font("%bold%".to_string()),
            StyleSetting::FontSize(72.0),
        ]
    );
}

#[test]
fn test_style_settings_use_property_map_yaml_form() -> Result<()> {
    // The documented rule-file shape is a one-entry `property: value` map
    // per setting, not a YAML-tagged enum.
    let yaml = r#"
- font: "%bold%"
- fontSize: 72
- fillColor: [1, 1, 0]
"#;
    let settings: Vec<StyleSetting> = serde_yml::from_str(yaml)?;
    assert_eq!(
        settings,
        vec![
            StyleSetting::Font("%bold%".to_string()),
            StyleSetting::FontSize(72.0),
            StyleSetting::FillColor(vec![1.0, 1.0, 0.0]),
        ]
    );

    let emitted = serde_yml::to_string(&settings)?;
    let reparsed: Vec<StyleSetting> = serde_yml::from_str(&emitted)?;
    assert_eq!(reparsed, settings);
    Ok(())
}

#[test]
fn test_style_setting_rejects_multiple_properties_in_one_entry() {
    let yaml = r#"
- font: "%bold%"
  fontSize: 72
"#;
    let err = serde_yml::from_str::<Vec<StyleSetting>>(yaml).unwrap_err();
    assert!(err.to_string().contains("exactly one property"));
}

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
rules:
  - name: highlight
    pattern: '==(.+?)=='
    description: "A highlight rule"
    styles:
      - fillColor: [1, 1, 0]
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = StyleConfig::load_from_file(file.path())?;
    assert_eq!(config.rules.len(), 1);
    assert_eq!(config.rules[0].name, "highlight");
    assert_eq!(config.rules[0].pattern, Some("==(.+?)==".to_string()));
    assert_eq!(
        config.rules[0].styles,
        vec![StyleSetting::FillColor(vec![1.0, 1.0, 0.0])]
    );
    Ok(())
}

#[test]
fn test_load_from_file_pattern_optional() -> Result<()> {
    // A user rule may omit the pattern entirely: it inherits the built-in
    // matcher when merged over a rule of the same name.
    let yaml_content = r#"
rules:
  - name: bold
    styles:
      - fillColor: [1, 1, 0]
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = StyleConfig::load_from_file(file.path())?;
    assert_eq!(config.rules.len(), 1);
    assert_eq!(config.rules[0].pattern, None);
    Ok(())
}

#[test]
fn test_merge_rules_no_user_config() {
    let default_config = StyleConfig::load_default_rules().unwrap();
    let merged = config::merge_rules(default_config.clone(), None);
    assert_eq!(merged, default_config);
}

#[test_log::test]
fn test_merge_styles_not_replace() {
    // Overriding only fillColor of the built-in bold rule must preserve its
    // original font style: merge semantics, not replace.
    let default_config = StyleConfig::load_default_rules().unwrap();
    let user_config = StyleConfig {
        rules: vec![custom_rule(
            "bold",
            None,
            vec![StyleSetting::FillColor(vec![1.0, 1.0, 0.0])],
        )],
    };

    let merged = config::merge_rules(default_config, Some(user_config));
    let bold = merged.rules.iter().find(|r| r.name == "bold").unwrap();

    assert_eq!(bold.pattern.as_deref(), Some(r"\*(.*?)\*"));
    assert_eq!(
        bold.styles,
        vec![
            StyleSetting::Font("%bold%".to_string()),
            StyleSetting::FillColor(vec![1.0, 1.0, 0.0]),
        ]
    );
}

#[test]
fn test_merge_user_pattern_wins() {
    let default_config = StyleConfig::load_default_rules().unwrap();
    let user_config = StyleConfig {
        rules: vec![custom_rule(
            "italic",
            Some("==(.+?)=="),
            vec![StyleSetting::FillColor(vec![1.0, 1.0, 0.0])],
        )],
    };

    let merged = config::merge_rules(default_config, Some(user_config));
    let italic = merged.rules.iter().find(|r| r.name == "italic").unwrap();

    assert_eq!(italic.pattern.as_deref(), Some("==(.+?)=="));
    assert_eq!(
        italic.styles,
        vec![
            StyleSetting::Font("%italic%".to_string()),
            StyleSetting::FillColor(vec![1.0, 1.0, 0.0]),
        ]
    );
}

#[test]
fn test_merge_user_style_value_overrides_builtin() {
    let default_config = StyleConfig::load_default_rules().unwrap();
    let user_config = StyleConfig {
        rules: vec![custom_rule(
            "h1",
            None,
            vec![StyleSetting::FontSize(96.0)],
        )],
    };

    let merged = config::merge_rules(default_config, Some(user_config));
    let h1 = merged.rules.iter().find(|r| r.name == "h1").unwrap();

    // Overridden property keeps its built-in position.
    assert_eq!(
        h1.styles,
        vec![
            StyleSetting::Font("%bold%".to_string()),
            StyleSetting::FontSize(96.0),
        ]
    );
}

#[test]
fn test_merge_appends_unmatched_user_rules_in_order() {
    let default_config = StyleConfig::load_default_rules().unwrap();
    let builtin_count = default_config.rules.len();
    let user_config = StyleConfig {
        rules: vec![
            custom_rule("highlight", Some("==(.+?)=="), vec![]),
            custom_rule("strike", Some("~~(.+?)~~"), vec![]),
        ],
    };

    let merged = config::merge_rules(default_config, Some(user_config));
    assert_eq!(merged.rules.len(), builtin_count + 2);
    assert_eq!(merged.rules[builtin_count].name, "highlight");
    assert_eq!(merged.rules[builtin_count + 1].name, "strike");
}

#[test]
fn test_set_active_rules_disables_by_name() {
    let mut config = StyleConfig::load_default_rules().unwrap();
    config.set_active_rules(&[], &["h4".to_string(), "h5".to_string(), "h6".to_string()]);
    let names: Vec<&str> = config.rules.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["bold", "italic", "h1", "h2", "h3"]);
}

#[test]
fn test_set_active_rules_enable_overrides_disabled_flag() {
    let mut config = StyleConfig {
        rules: vec![StyleRule {
            name: "opt_in".to_string(),
            pattern: Some("<<(.+?)>>".to_string()),
            enabled: Some(false),
            ..Default::default()
        }],
    };

    let mut filtered = config.clone();
    filtered.set_active_rules(&[], &[]);
    assert!(filtered.rules.is_empty());

    config.set_active_rules(&["opt_in".to_string()], &[]);
    assert_eq!(config.rules.len(), 1);
}

#[test]
fn test_validate_rejects_duplicate_names() {
    let rules = vec![
        custom_rule("bold", Some(r"\*(.*?)\*"), vec![]),
        custom_rule("bold", Some("__(.+?)__"), vec![]),
    ];
    let err = config::validate_rules(&rules).unwrap_err();
    assert!(err.to_string().contains("Duplicate rule name"));
}

#[test]
fn test_validate_rejects_wrong_capture_group_count() {
    // Zero groups: nothing marks the content to keep.
    let rules = vec![custom_rule("nogroups", Some(r"\*.*?\*"), vec![])];
    let err = config::validate_rules(&rules).unwrap_err();
    assert!(err.to_string().contains("exactly one capture group"));

    // Two groups: ambiguous content, would corrupt the offset remapping.
    let rules = vec![custom_rule("twogroups", Some(r"(\*)(.*?)\*"), vec![])];
    let err = config::validate_rules(&rules).unwrap_err();
    assert!(err.to_string().contains("exactly one capture group"));
}

#[test]
fn test_validate_rejects_invalid_pattern() {
    let rules = vec![custom_rule("broken", Some("(["), vec![])];
    let err = config::validate_rules(&rules).unwrap_err();
    assert!(err.to_string().contains("invalid matcher pattern"));
}
