use std::io::Write;

use bulkedit_action::{BulkEditError, BulkEditSettings};
use bulkedit_model::DisplayContext;

#[test]
fn defaults() {
    let settings = BulkEditSettings::default();
    assert_eq!(settings.surface, "bulk_edit");
    assert_eq!(settings.display_context, DisplayContext::Form);
    assert_eq!(settings.selector_title, "Select fields to change");
    assert_eq!(settings.empty_selector_title, "There are no fields available to modify");
    assert_eq!(settings.selector_weight, -50);
    assert_eq!(settings.revision_log_field, "revision_log");
    assert_eq!(
        settings.add_values_description,
        "New values of multi-value fields will be added to the existing ones instead of overwriting them."
    );
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let settings = BulkEditSettings::from_toml_str(
        r#"
        surface = "mass_update"
        selector_weight = -10
        display_context = "view"
        "#,
    )
    .unwrap();
    assert_eq!(settings.surface, "mass_update");
    assert_eq!(settings.selector_weight, -10);
    assert_eq!(settings.display_context, DisplayContext::View);
    assert_eq!(settings.options_title, "Options");
}

#[test]
fn malformed_toml_is_an_error() {
    let err = BulkEditSettings::from_toml_str("selector_weight = \"heavy\"").unwrap_err();
    assert!(matches!(err, BulkEditError::Settings(_)));
}

#[test]
fn load_from_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = BulkEditSettings::load_from(&dir.path().join("bulk_edit.toml"));
    assert_eq!(settings, BulkEditSettings::default());
}

#[test]
fn load_from_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "revision_log_field = \"log\"").unwrap();
    let settings = BulkEditSettings::load_from(file.path());
    assert_eq!(settings.revision_log_field, "log");
}

#[test]
fn load_from_broken_file_falls_back() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "surface = [").unwrap();
    let settings = BulkEditSettings::load_from(file.path());
    assert_eq!(settings, BulkEditSettings::default());

    assert!(BulkEditSettings::read_from(file.path()).is_err());
}
