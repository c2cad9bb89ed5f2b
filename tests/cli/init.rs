use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["apiUrl"], "https://localise.biz/api/");
    assert_eq!(parsed["languages"], serde_json::json!(["en"]));
    assert!(parsed.get("files").is_some(), "Config should have 'files' field");
    assert_eq!(parsed["formats"]["gettext"]["srcExt"], "pot");
    assert!(
        parsed.get("apiKey").is_none(),
        "Config should not carry an API key"
    );

    // 2-space indentation
    assert!(content.contains("\n  \""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "✓ Created .locosync.json\n");
    assert!(test.root().join(".locosync.json").exists());

    let content = test.read_file(".locosync.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_config("{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".locosync.json already exists"));
    assert_eq!(test.read_file(".locosync.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;

    let output = test.validate_command().output()?;
    assert!(
        output.status.success(),
        "Validate command should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}
