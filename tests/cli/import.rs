use anyhow::Result;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

use crate::{CliTest, UNREACHABLE_API_URL, output_async, stderr, stdout};

#[test]
fn test_import_without_api_key_fails() -> Result<()> {
    let test = CliTest::with_config(
        r#"{ "files": [{ "id": "web", "name": "app", "format": "gettext" }] }"#,
    )?;

    let output = test.import_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "Error: missing i18n API key, aborting\n");
    Ok(())
}

#[test]
fn test_import_unreachable_service_writes_nothing() -> Result<()> {
    let test = CliTest::with_config(&format!(
        r#"{{
  "apiKey": "secret",
  "apiUrl": "{}",
  "languages": ["en", "fr"],
  "files": [{{ "id": "web", "name": "app", "format": "gettext" }}]
}}"#,
        UNREACHABLE_API_URL
    ))?;

    let output = test.import_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr(&output);
    assert!(
        stderr.starts_with("Error: Download of \"en\" web-app assets failed"),
        "stderr: {}",
        stderr
    );
    assert!(!test.root().join("locale").exists());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_import_writes_every_language() -> Result<()> {
    let server = MockServer::start().await;
    for (language, translation) in [("en", "Hello"), ("fr", "Bonjour")] {
        Mock::given(method("GET"))
            .and(path(format!("/api/export/locale/{}.po", language)))
            .and(query_param("key", "secret"))
            .and(query_param("filter", "web-app"))
            .respond_with(ResponseTemplate::new(200).set_body_string(format!(
                "msgid \"hello\"\nmsgstr \"{}\"\n",
                translation
            )))
            .expect(1)
            .mount(&server)
            .await;
    }
    let test = CliTest::with_config(&format!(
        r#"{{
  "apiKey": "secret",
  "apiUrl": "{}/api/",
  "languages": ["en", "fr"],
  "files": [{{ "id": "web", "name": "app", "format": "gettext" }}]
}}"#,
        server.uri()
    ))?;

    let output = output_async(test.import_command()).await?;

    let stdout = stdout(&output);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout.contains("✓ Imported \"en\" web-app assets\n"));
    assert!(stdout.contains("✓ Imported \"fr\" web-app assets\n"));
    assert!(stdout.contains("✓ Created folder "));
    assert!(stdout.ends_with("✓ All done! 2 files written from 2 downloads\n"));
    assert_eq!(
        test.read_file("locale/en/app.po")?,
        "msgid \"hello\"\nmsgstr \"Hello\"\n"
    );
    assert_eq!(
        test.read_file("locale/fr/app.po")?,
        "msgid \"hello\"\nmsgstr \"Bonjour\"\n"
    );
    Ok(())
}
