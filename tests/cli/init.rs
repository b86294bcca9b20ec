use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["messagesRoot"], "./messages");
    assert_eq!(parsed["signaturesFile"], "./signatures.json");
    assert_eq!(parsed["primaryLocale"], "en");
    assert_eq!(parsed["missingLocales"], "skip");
    assert_eq!(parsed["failFast"], false);
    assert!(parsed.get("maxId").is_none(), "unset maxId should be omitted");

    // 2-space indentation
    assert!(content.contains("\n  \"messagesRoot\""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"));

    assert!(test.root().join(".catalintrc.json").exists());

    let content = test.read_file(".catalintrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".catalintrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"));

    // The existing file is left untouched
    assert_eq!(test.read_file(".catalintrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_then_check_uses_defaults() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", r#"{ "1": "Hello %s" }"#)?;
    test.write_file("signatures.json", r#"{ "1": ["string"] }"#)?;

    let init = test.command().arg("init").output()?;
    assert!(init.status.success());

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}
