use super::*;

#[test]
fn test_defaults_match_embedded_config() {
    let settings = Settings::load(None, true).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_without_defaults() {
    let settings = Settings::load(None, false).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_acl() {
    let settings = Settings::load([Source::required("src/testing/assets/configs/acl.yaml")], true).unwrap();
    assert_eq!(settings.case_mapping, CaseMappingOption::Ascii);
    assert_eq!(settings.default_action, Action::Allow);
    assert_eq!(settings.step_limit, Some(5000));
    assert!(!settings.resolve);
    assert_eq!(settings.rules.len(), 3);
    assert_eq!(
        settings.rules[0],
        RuleSettings {
            mask: "*!*@*.banned.example".into(),
            action: Action::Deny,
        }
    );
    assert_eq!(settings.rules[2].mask, "Admin!*@*");
    assert_eq!(settings.hosts.len(), 2);
    assert_eq!(settings.hosts[0].name, "irc.banned.example");
    assert_eq!(
        settings.hosts[0].addresses,
        vec!["192.0.2.10".parse::<IpAddr>().unwrap(), "2001:db8::10".parse().unwrap()]
    );
}

#[test]
fn test_load_layered() {
    let settings = Settings::load(
        [
            Source::required("src/testing/assets/configs/acl.yaml"),
            Source::required("src/testing/assets/configs/partial.yaml"),
        ],
        true,
    )
    .unwrap();
    assert_eq!(settings.case_mapping, CaseMappingOption::Ascii);
    assert_eq!(settings.default_action, Action::Allow);
    assert_eq!(settings.rules.len(), 3);
}

#[test]
fn test_load_partial_keeps_defaults() {
    let settings = Settings::load([Source::required("src/testing/assets/configs/partial.yaml")], true).unwrap();
    assert_eq!(settings.default_action, Action::Allow);
    assert_eq!(settings.case_mapping, CaseMappingOption::Rfc1459);
    assert_eq!(settings.step_limit, Some(DEFAULT_STEP_LIMIT));
}

#[test]
fn test_load_missing_optional() {
    let settings = Settings::load([Source::optional("src/testing/assets/configs/missing.yaml")], true).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_missing_required() {
    let result = Settings::load([Source::required("src/testing/assets/configs/missing.yaml")], true);
    assert!(result.is_err());
}

#[test]
fn test_case_mapping_option() {
    assert_eq!(CaseMappingOption::None.mapping(), None);
    assert_eq!(CaseMappingOption::Ascii.mapping(), Some(CaseMapping::Ascii));
    assert_eq!(CaseMappingOption::Rfc1459.mapping(), Some(CaseMapping::Rfc1459));
    assert_eq!(CaseMappingOption::StrictRfc1459.mapping(), Some(CaseMapping::StrictRfc1459));
}
