//! End-to-end CLI tests for the webshare-dl binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn xml(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(format!("<response>{body}</response>"))
}

fn webshare_dl(api_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("webshare-dl").unwrap();
    cmd.env("WEBSHARE_API_URL", api_url).env_remove("RUST_LOG");
    cmd
}

/// Test that --help displays usage information and exits with code 0.
#[test]
fn test_binary_help_displays_usage() {
    let mut cmd = Command::cargo_bin("webshare-dl").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--input-file"))
        .stdout(predicate::str::contains("--search"));
}

/// Test that --version displays version and exits with code 0.
#[test]
fn test_binary_version_displays_version() {
    let mut cmd = Command::cargo_bin("webshare-dl").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("webshare-dl"));
}

/// Missing download arguments is a usage error raised before any network call.
#[test]
fn test_binary_missing_arguments_is_usage_error() {
    let mut cmd = Command::cargo_bin("webshare-dl").unwrap();
    cmd.args(["-u", "franta", "-p", "heslo"])
        .env("WEBSHARE_API_URL", "http://127.0.0.1:9/api/")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--input-file"));
}

#[test]
fn test_binary_search_conflicts_with_credentials() {
    let mut cmd = Command::cargo_bin("webshare-dl").unwrap();
    cmd.args(["-s", "foo", "-u", "franta"]).assert().code(2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_binary_search_prints_share_urls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search/"))
        .and(body_string_contains("what=kun"))
        .respond_with(xml(
            "<status>OK</status><file><ident>abc123</ident><name>Kůň (2020).mkv</name></file>",
        ))
        .mount(&server)
        .await;

    let api_url = format!("{}/api/", server.uri());
    let assert = tokio::task::spawn_blocking(move || {
        webshare_dl(&api_url).args(["-s", "kun"]).assert()
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout("https://webshare.cz/file/abc123/Kun _2020_.mkv\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_binary_download_partial_failure_exits_with_partial_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/salt/"))
        .respond_with(xml("<status>OK</status><salt>UX9gSjVl</salt>"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/login/"))
        .respond_with(xml("<status>OK</status><token>tok1</token>"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/file_link/"))
        .and(body_string_contains("ident=good01"))
        .respond_with(xml(&format!(
            "<status>OK</status><link>{}/dl/good01</link>",
            server.uri()
        )))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/file_link/"))
        .and(body_string_contains("ident=bad002"))
        .respond_with(xml("<status>FATAL</status>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dl/good01"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Disposition", "attachment; filename=good.bin")
                .set_body_bytes(b"good".to_vec()),
        )
        .mount(&server)
        .await;

    let work = TempDir::new().unwrap();
    let list = work.path().join("urls.txt");
    std::fs::write(
        &list,
        "https://webshare.cz/file/good01/good.bin\nhttps://webshare.cz/file/bad002/bad.bin\n",
    )
    .unwrap();
    let out = work.path().join("out");

    let api_url = format!("{}/api/", server.uri());
    let (list_arg, out_arg) = (list.clone(), out.clone());
    let assert = tokio::task::spawn_blocking(move || {
        webshare_dl(&api_url)
            .args(["-q", "-u", "franta", "-p", "heslo", "-f"])
            .arg(&list_arg)
            .arg("-d")
            .arg(&out_arg)
            .assert()
    })
    .await
    .unwrap();

    assert.code(3);
    assert_eq!(std::fs::read(out.join("good.bin")).unwrap(), b"good");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_binary_login_failure_exits_with_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/salt/"))
        .respond_with(xml("<status>FATAL</status><code>SALT_FATAL_1</code>"))
        .mount(&server)
        .await;

    let work = TempDir::new().unwrap();
    let list = work.path().join("urls.txt");
    std::fs::write(&list, "https://webshare.cz/file/abc123/x\n").unwrap();

    let api_url = format!("{}/api/", server.uri());
    let assert = tokio::task::spawn_blocking(move || {
        webshare_dl(&api_url)
            .args(["-u", "franta", "-p", "heslo", "-f"])
            .arg(&list)
            .assert()
    })
    .await
    .unwrap();

    assert
        .code(1)
        .stderr(predicate::str::contains("SALT_FATAL_1"));
}

#[test]
fn test_binary_unreadable_url_file_fails_before_network() {
    let work = TempDir::new().unwrap();
    webshare_dl("http://127.0.0.1:9/api/")
        .args(["-u", "franta", "-p", "heslo", "-f"])
        .arg(work.path().join("missing.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not read file"));
}
