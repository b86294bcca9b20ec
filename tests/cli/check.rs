use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, TEMP_DIR_FILTER};

const SIGNATURES: &str = r#"{
  "1": [],
  "5": ["int", "string"],
  "7": ["float"],
  "9": "unverified"
}"#;

const EN: &str = r#"{
  "1": "100%% done",
  "5": "Player %d killed %s",
  "7": "Ratio %+5.2f",
  "9": "%q whatever"
}"#;

#[test]
fn test_clean_catalog() -> Result<()> {
    let test = CliTest::with_catalog(&[("en", EN)], SIGNATURES)?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_arity_mismatch_in_second_locale() -> Result<()> {
    let test = CliTest::with_catalog(
        &[
            ("en", EN),
            ("de", r#"{
  "5": "Spieler %d erschlug %s und %s"
}"#),
        ],
        SIGNATURES,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_kind_and_unknown_conversion() -> Result<()> {
    let test = CliTest::with_catalog(
        &[
            ("en", EN),
            ("fr", r#"{
  "5": "Joueur %s a tué %d",
  "7": "Ratio %q"
}"#),
        ],
        SIGNATURES,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_fail_fast_stops_at_first_failing_locale() -> Result<()> {
    // Id 5 fails in both de and fr; only the first locale in order is reported
    let test = CliTest::with_catalog(
        &[
            ("en", EN),
            ("de", r#"{ "5": "%s" }"#),
            ("fr", r#"{ "5": "%d" }"#),
        ],
        SIGNATURES,
    )?;

    assert_cmd_snapshot!(test.check_command().args(["format", "--fail-fast"]));

    Ok(())
}

#[test]
fn test_missing_locale_skipped_by_default() -> Result<()> {
    let test = CliTest::with_catalog(
        &[("en", EN), ("de", r#"{ "1": "fertig" }"#)],
        SIGNATURES,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_missing_locale_required() -> Result<()> {
    let test = CliTest::with_catalog(
        &[("en", EN), ("de", r#"{ "1": "fertig" }"#)],
        SIGNATURES,
    )?;

    assert_cmd_snapshot!(test.check_command().args(["--missing-locales", "require"]));

    Ok(())
}

#[test]
fn test_undeclared_and_out_of_range_are_warnings() -> Result<()> {
    let test = CliTest::with_catalog(
        &[("en", r#"{
  "1": "Hello",
  "3": "No signature",
  "40": "Far away"
}"#)],
        r#"{ "1": [], "50": ["int"] }"#,
    )?;

    assert_cmd_snapshot!(test.check_command().args(["--max-id", "10"]));

    Ok(())
}

#[test]
fn test_selected_rule_only() -> Result<()> {
    let test = CliTest::with_catalog(
        &[("en", r#"{ "1": "Hello", "3": "No signature" }"#)],
        r#"{ "1": [] }"#,
    )?;

    assert_cmd_snapshot!(test.check_command().arg("format"));

    Ok(())
}

#[test]
fn test_parse_errors_reported() -> Result<()> {
    let test = CliTest::with_catalog(
        &[("en", r#"{ "1": "Hello", "greeting": "Hi", "2": 42 }"#)],
        r#"{ "1": [], "x": [] }"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_non_canonical_ids_reported() -> Result<()> {
    // "05" would otherwise shadow the entry for "5"
    let test = CliTest::with_catalog(
        &[("en", r#"{ "5": "%d %s", "05": "%s" }"#)],
        r#"{ "5": ["int", "string"] }"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_config_file_is_used() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".catalintrc.json",
        r#"{
  "messagesRoot": "./lang",
  "signaturesFile": "./params.json",
  "primaryLocale": "de"
}"#,
    )?;
    test.write_file("lang/de.json", r#"{ "5": "Spieler %d erschlug" }"#)?;
    test.write_file("params.json", r#"{ "5": ["int", "string"] }"#)?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_verbose_notes() -> Result<()> {
    let test = CliTest::with_catalog(&[("en", EN)], SIGNATURES)?;

    assert_cmd_snapshot!(test.check_command().arg("-v"));

    Ok(())
}

#[test]
fn test_missing_signature_file_is_internal_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", "{}")?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_missing_messages_dir_is_internal_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("signatures.json", "{}")?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_root_argument() -> Result<()> {
    let test = CliTest::with_catalog(
        &[
            ("en", EN),
            ("de", r#"{ "5": "Spieler %d erschlug %s und %s" }"#),
        ],
        SIGNATURES,
    )?;

    let mut cmd = test.command();
    cmd.current_dir(std::env::temp_dir());
    cmd.arg("check").arg("--root").arg(test.root());

    insta::with_settings!({ filters => vec![TEMP_DIR_FILTER] }, {
        assert_cmd_snapshot!(cmd);
    });

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"));

    Ok(())
}
