use anyhow::Result;

use crate::{CliTest, stderr, stdout};

const CONFIG: &str = r#"{
  "files": [
    { "id": "web", "name": "models", "format": "yaml" },
    { "id": "web", "name": "js", "format": "json" }
  ]
}"#;

#[test]
fn test_validate_accepts_well_formed_sources() -> Result<()> {
    let test = CliTest::with_config(CONFIG)?;
    test.write_file("config/locales/models.en.yml", "en:\n  user:\n    name: Name\n")?;
    test.write_file(
        "app/assets/javascripts/i18n/js.json",
        r#"{ "en": { "hi": "Hello" } }"#,
    )?;

    let output = test.validate_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "✓ Validated 2 files - no errors found\n"
    );
    Ok(())
}

#[test]
fn test_validate_reports_malformed_json() -> Result<()> {
    let test = CliTest::with_config(CONFIG)?;
    test.write_file("config/locales/models.en.yml", "en:\n  a: b\n")?;
    test.write_file("app/assets/javascripts/i18n/js.json", r#"{ "en": { "hi": "#)?;

    let output = test.validate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr(&output);
    assert!(stderr.starts_with("Error: "), "stderr: {}", stderr);
    assert!(stderr.contains("js.json"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn test_validate_reports_missing_source() -> Result<()> {
    let test = CliTest::with_config(CONFIG)?;

    let output = test.validate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("models.en.yml"));
    Ok(())
}

#[test]
fn test_validate_root_and_language_overrides() -> Result<()> {
    let test = CliTest::with_config(
        r#"{ "files": [{ "id": "web", "name": "models", "format": "yaml" }] }"#,
    )?;
    test.write_file("site/config/locales/models.fr.yml", "fr:\n  a: b\n")?;

    let output = test
        .validate_command()
        .args(["--root", "site", "--language", "fr", "-v"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("models.fr.yml"));
    Ok(())
}

#[test]
fn test_invalid_config_is_reported() -> Result<()> {
    let test = CliTest::with_config(r#"{ "languages": [] }"#)?;

    let output = test.validate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("languages"));
    Ok(())
}
