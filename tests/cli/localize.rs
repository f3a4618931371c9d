use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::CliTest;

fn read_json(test: &CliTest, path: &str) -> Result<Value> {
    Ok(serde_json::from_str(&test.read_file(path)?)?)
}

fn write_sources(test: &CliTest) -> Result<()> {
    test.write_file(
        "app/assistants/main-assistant.js",
        r#"
MainAssistant.prototype.setup = function() {
    this.controller.get("title").update($L("Welcome"));
    this.menuModel = {
        items: [{label: $L("Preferences")}, {label: $L('Help')}]
    };
};
"#,
    )?;
    test.write_file(
        "app/assistants/prefs-assistant.js",
        r##"
PrefsAssistant.prototype.setup = function() {
    var template = new Template($L({value: "#{count} unread", key: "unread_count"}));
    this.controller.get("help").update($L("Help"));
};
"##,
    )?;
    // Never scanned: hidden and administrative directories.
    test.write_file(".git/hooks/pre-commit.js", r#"$L("Hidden")"#)?;
    test.write_file("app/CVS/Entries.js", r#"$L("Administrative")"#)?;
    Ok(())
}

#[test]
fn test_localize_creates_language_files() -> Result<()> {
    let test = CliTest::app(&["de", "fr"])?;
    write_sources(&test)?;

    let output = test.localize_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Updated de"));
    assert!(stdout.contains("Updated fr"));
    assert!(stdout.contains("Localized 4 keys from 2 source files for 2 languages"));

    assert_snapshot!(test.read_file("resources/fr/lexicon.json")?, @r#"
    {
      "app/assistants/main-assistant.js": {
        "Preferences": "",
        "Welcome": ""
      },
      "app/assistants/main-assistant.js, app/assistants/prefs-assistant.js": {
        "Help": ""
      },
      "app/assistants/prefs-assistant.js": {
        "unread_count": ""
      }
    }
    "#);
    assert_eq!(test.read_file("resources/de/strings.json")?, "{}\n");
    Ok(())
}

#[test]
fn test_localize_keeps_translations_and_prunes_dead_keys() -> Result<()> {
    let test = CliTest::app(&["fr"])?;
    write_sources(&test)?;
    test.write_file(
        "resources/fr/lexicon.json",
        r#"{
 "app/old-assistant.js": {
  "Welcome": "Bienvenue",
  "Goodbye": "Au revoir"
 }
}"#,
    )?;
    test.write_file(
        "resources/fr/strings.json",
        r#"{"Help": "Aide", "Goodbye": "Au revoir", "Gone": "Parti"}"#,
    )?;

    let output = test.localize_command().output()?;
    assert!(output.status.success());

    assert_eq!(
        read_json(&test, "resources/fr/lexicon.json")?,
        json!({
            "app/assistants/main-assistant.js": {"Preferences": "", "Welcome": "Bienvenue"},
            "app/assistants/main-assistant.js, app/assistants/prefs-assistant.js": {"Help": "Aide"},
            "app/assistants/prefs-assistant.js": {"unread_count": ""}
        })
    );
    assert_eq!(
        test.read_file("resources/fr/strings.json")?,
        "{\"Help\":\"Aide\",\"Welcome\":\"Bienvenue\"}\n"
    );
    Ok(())
}

#[test]
fn test_localize_twice_is_stable() -> Result<()> {
    let test = CliTest::app(&["fr"])?;
    write_sources(&test)?;
    test.write_file("resources/fr/strings.json", r#"{"Welcome": "Bienvenue"}"#)?;

    assert!(test.localize_command().output()?.status.success());
    let lexicon = test.read_file("resources/fr/lexicon.json")?;
    let strings = test.read_file("resources/fr/strings.json")?;

    assert!(test.localize_command().output()?.status.success());
    assert_eq!(test.read_file("resources/fr/lexicon.json")?, lexicon);
    assert_eq!(test.read_file("resources/fr/strings.json")?, strings);
    Ok(())
}

#[test]
fn test_localize_reports_duplicate_keys() -> Result<()> {
    let test = CliTest::app(&["fr"])?;
    write_sources(&test)?;
    test.write_file(
        "resources/fr/lexicon.json",
        r#"{"a.js": {"Help": "Aide"}, "b.js": {"Help": "Secours"}}"#,
    )?;

    let output = test.localize_command().output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stderr.contains("warning:"));
    assert!(stderr.contains(r#"Multiple translations for key "Help""#));
    assert_eq!(
        read_json(&test, "resources/fr/strings.json")?,
        json!({"Help": "Aide"})
    );
    Ok(())
}

#[test]
fn test_localize_malformed_lexicon_fails_only_that_language() -> Result<()> {
    let test = CliTest::app(&["de", "fr"])?;
    write_sources(&test)?;
    test.write_file("resources/de/lexicon.json", "{ not json")?;

    let output = test.localize_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("error: Failed to update language 'de'"));
    assert!(stderr.contains("lexicon.json"));
    assert!(stdout.contains("Updated fr"));
    assert!(stdout.contains("Failed to update 1 of 2 languages"));
    assert_eq!(test.read_file("resources/de/lexicon.json")?, "{ not json");
    assert!(test.root().join("resources/fr/lexicon.json").is_file());
    Ok(())
}

#[test]
fn test_localize_verbose_lists_files() -> Result<()> {
    let test = CliTest::app(&["fr"])?;
    write_sources(&test)?;

    let output = test.localize_command().arg("--verbose").output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Reading file list"));
    assert!(stdout.contains("Processing app/assistants/main-assistant.js"));
    assert!(stdout.contains("Saving data for language 'fr'"));
    assert!(!stdout.contains("Entries.js"));
    Ok(())
}

#[test]
fn test_localize_quiet_prints_nothing() -> Result<()> {
    let test = CliTest::app(&["fr"])?;
    write_sources(&test)?;

    let output = test.localize_command().arg("-q").output()?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(test.root().join("resources/fr/strings.json").is_file());
    Ok(())
}

#[test]
fn test_localize_custom_marker() -> Result<()> {
    let test = CliTest::app(&["fr"])?;
    test.write_file("src/view.js", r#"label = tr("Save"); other = $L("Ignored");"#)?;

    let output = test
        .localize_command()
        .args(["--marker", "tr"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        read_json(&test, "resources/fr/lexicon.json")?,
        json!({"src/view.js": {"Save": ""}})
    );
    Ok(())
}

#[test]
fn test_localize_requires_app_dir() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("framework_config.json", r#"{"languages": ["fr"]}"#)?;

    let output = test.localize_command().output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("is not an application directory"));
    assert!(!test.root().join("resources").exists());
    Ok(())
}

#[test]
fn test_localize_path_argument() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("my-app/appinfo.json", "{}")?;
    test.write_file("my-app/framework_config.json", r#"{"languages": ["it"]}"#)?;
    test.write_file("my-app/app.js", r#"$L("Ciao")"#)?;

    let output = test.localize_command().arg("my-app").output()?;

    assert!(output.status.success());
    assert_eq!(
        read_json(&test, "my-app/resources/it/lexicon.json")?,
        json!({"app.js": {"Ciao": ""}})
    );
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("localize"));
    Ok(())
}
