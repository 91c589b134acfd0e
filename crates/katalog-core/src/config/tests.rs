use super::*;

#[test]
fn test_i18n_config_default() {
    let cfg = I18nConfig::default();
    assert_eq!(cfg.default_language, "ru");
    assert_eq!(cfg.languages, vec!["ru", "en", "uz"]);
    assert_eq!(cfg.fallback_languages, vec!["ru"]);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_empty_toml_uses_defaults() {
    let cfg = from_toml("").unwrap();
    assert_eq!(cfg.katalog.catalog_path, "catalog.json");
    assert_eq!(cfg.katalog.log_level, "info");
    assert_eq!(cfg.i18n.default_language, "ru");
}

#[test]
fn test_i18n_config_from_toml() {
    let toml_str = r#"
        [i18n]
        default_language = "en"
        languages = ["en", "RU", "uz"]
        fallback_languages = ["uz", "en"]
    "#;
    let cfg = from_toml(toml_str).unwrap();
    assert_eq!(cfg.i18n.default_language, "en");
    assert_eq!(cfg.i18n.languages[1], "ru");
    assert_eq!(cfg.i18n.fallback_languages, vec!["uz", "en"]);
}

#[test]
fn test_partial_i18n_section_keeps_other_defaults() {
    let toml_str = r#"
        [katalog]
        catalog_path = "~/shop/catalog.json"

        [i18n]
        fallback_languages = ["en"]
    "#;
    let cfg = from_toml(toml_str).unwrap();
    assert_eq!(cfg.katalog.catalog_path, "~/shop/catalog.json");
    assert_eq!(cfg.katalog.log_level, "info");
    assert_eq!(cfg.i18n.default_language, "ru");
    assert_eq!(cfg.i18n.fallback_languages, vec!["en"]);
}

#[test]
fn test_default_language_must_be_supported() {
    let toml_str = r#"
        [i18n]
        default_language = "de"
    "#;
    let err = from_toml(toml_str).unwrap_err();
    assert!(err.to_string().contains("default_language 'de'"));
}

#[test]
fn test_fallback_language_must_be_supported() {
    let toml_str = r#"
        [i18n]
        fallback_languages = ["ru", "kk"]
    "#;
    let err = from_toml(toml_str).unwrap_err();
    assert!(err.to_string().contains("'kk'"));
}

#[test]
fn test_duplicate_languages_rejected() {
    let toml_str = r#"
        [i18n]
        languages = ["ru", "en", "ru"]
    "#;
    assert!(from_toml(toml_str).is_err());
}

#[test]
fn test_empty_languages_rejected() {
    let toml_str = r#"
        [i18n]
        languages = []
    "#;
    assert!(from_toml(toml_str).is_err());
}

#[test]
fn test_invalid_language_code_rejected() {
    let toml_str = r#"
        [i18n]
        languages = ["ru", "en us"]
    "#;
    assert!(from_toml(toml_str).is_err());
}

#[test]
fn test_supported_language_lookup() {
    let cfg = I18nConfig::default();
    assert!(cfg.is_supported("EN"));
    assert!(!cfg.is_supported("de"));
    assert_eq!(cfg.supported_language("Uz").unwrap(), "uz");
    let err = cfg.supported_language("de").unwrap_err();
    assert!(err.to_string().contains("ru, en, uz"));
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let cfg = load("/nonexistent/__katalog_test__/config.toml").unwrap();
    assert_eq!(cfg.i18n.languages.len(), 3);
}

#[test]
fn test_load_from_file() {
    let tmp = std::env::temp_dir().join("__katalog_test_config__.toml");
    std::fs::write(
        &tmp,
        "[i18n]\ndefault_language = \"uz\"\nfallback_languages = []\n",
    )
    .unwrap();

    let cfg = load(tmp.to_str().unwrap()).unwrap();
    assert_eq!(cfg.i18n.default_language, "uz");
    assert!(cfg.i18n.fallback_languages.is_empty());

    let _ = std::fs::remove_file(&tmp);
}

#[test]
fn test_shellexpand_leaves_plain_paths() {
    assert_eq!(shellexpand("catalog.json"), "catalog.json");
    assert_eq!(shellexpand("/srv/catalog.json"), "/srv/catalog.json");
}
