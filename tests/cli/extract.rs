use anyhow::Result;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path, path_regex, query_param},
};

use crate::{CliTest, UNREACHABLE_API_URL, output_async, stderr, stdout};

const POT: &str = r#"msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"

msgid "hello"
msgstr ""
"#;

fn gettext_project() -> Result<CliTest> {
    let test = CliTest::with_config(
        r#"{ "files": [{ "id": "web", "name": "app", "format": "gettext" }] }"#,
    )?;
    test.write_file("locale/app.pot", POT)?;
    Ok(test)
}

#[test]
fn test_extract_without_api_key_aborts_before_file_work() -> Result<()> {
    let test = gettext_project()?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "Error: missing i18n API key, aborting\n");
    // The stale template is only removed once a client exists.
    assert!(test.root().join("locale/app.pot").exists());
    Ok(())
}

#[test]
fn test_extract_blank_api_key_is_missing() -> Result<()> {
    let test = gettext_project()?;

    let output = test
        .extract_command()
        .env("LOCO_API_KEY", "   ")
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("missing i18n API key"));
    Ok(())
}

#[test]
fn test_extract_unreachable_service_fails() -> Result<()> {
    let test = CliTest::with_config(
        r#"{ "files": [{ "id": "web", "name": "models", "format": "yaml" }] }"#,
    )?;
    test.write_file("config/locales/models.en.yml", "en:\n  user: User\n")?;

    let output = test
        .extract_command()
        .env("LOCO_API_KEY", "secret")
        .args(["--api-url", UNREACHABLE_API_URL])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr(&output);
    assert!(
        stderr.starts_with("Error: Grabbing the list of existing assets failed"),
        "stderr: {}",
        stderr
    );
    Ok(())
}

#[test]
fn test_extract_stops_on_failing_hook() -> Result<()> {
    let test = CliTest::with_config(
        r#"{
  "files": [{ "id": "web", "name": "app", "format": "gettext" }],
  "hooks": { "beforeExtract": ["exit 4"] }
}"#,
    )?;
    test.write_file("locale/app.pot", POT)?;

    let output = test
        .extract_command()
        .args(["--api-key", "secret", "--api-url", UNREACHABLE_API_URL])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("beforeExtract hook `exit 4` failed"));
    // Stale-file removal ran before the hook.
    assert!(!test.root().join("locale/app.pot").exists());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_extract_uploads_assets_plurals_and_tags() -> Result<()> {
    let test = CliTest::with_config(
        r#"{
  "files": [{ "id": "web", "name": "app", "format": "gettext" }],
  "formats": {
    "gettext": {
      "path": "locale", "srcExt": "pot", "dstExt": "po", "apiExt": "po",
      "delete": false, "languageDirs": true
    }
  }
}"#,
    )?;
    test.write_file(
        "locale/app.pot",
        r#"msgid ""
msgstr ""
"Plural-Forms: nplurals=INTEGER; plural=EXPRESSION;\n"

msgid "hello"
msgstr ""

msgid "one file"
msgid_plural "%d files"
msgstr[0] ""
msgstr[1] ""
"#,
    )?;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/assets.json"))
        .and(query_param("key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/assets.json"))
        .and(body_string_contains("name=hello"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "hello"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/assets.json"))
        .and(body_string_contains("name=one+file"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "one-file"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/assets/one-file/plurals.json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "d-files"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/api/assets/[^/]+/tags\.json$"))
        .and(body_string_contains("name=web-app"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(3)
        .mount(&server)
        .await;

    let mut cmd = test.extract_command();
    cmd.args([
        "--api-key",
        "secret",
        "--api-url",
        &format!("{}/api/", server.uri()),
    ]);
    let output = output_async(cmd).await?;

    let stdout = stdout(&output);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout.contains("✓ Grabbed the list of 0 existing assets\n"));
    assert!(stdout.contains("✓ Uploaded asset \"hello\"\n"));
    assert!(stdout.contains("✓ Uploaded plural \"%d files\" of \"one file\"\n"));
    assert!(stdout.contains("✓ Uploaded tag \"web-app\" for asset \"d-files\"\n"));
    assert!(
        stdout.contains("✓ All done! 2 assets, 1 plural, 3 tags uploaded"),
        "stdout: {}",
        stdout
    );
    // Templates are kept when `delete` is off.
    assert!(test.root().join("locale/app.pot").exists());
    Ok(())
}
