#![deny(clippy::all, clippy::pedantic)]

use assert_cmd::Command;
use httpmock::MockServer;
use predicates::str::contains;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn token_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tmp file");
    file.write_all(contents.as_bytes()).expect("write token");
    file
}

fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("busybee-cli"));
    cmd.env_remove("BUSYBEE_SITE_URL")
        .env_remove("BUSYBEE_TOKEN")
        .env_remove("BUSYBEE_TOKEN_FILE")
        .env_remove("BUSYBEE_CONFIG_FILE")
        .env_remove("BUSYBEE__SITE__BASE_URL");
    cmd
}

#[test]
fn users_update_works_end_to_end() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/panel/user/update")
            .json_body_includes(r#"{"ID":7,"Privileges":3,"CsrfSecret":"cli-token"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success":true}"#);
    });

    let token = token_file("cli-token");
    let assert = cli()
        .env("BUSYBEE_SITE_URL", server.base_url())
        .env("BUSYBEE_TOKEN_FILE", token.path())
        .args(["users", "update", "--id", "7"])
        .args(["--email", "ada@example.com"])
        .args(["--first-name", "Ada", "--last-name", "Lovelace"])
        .args(["--privileges", "admin"])
        .assert()
        .success()
        .stderr(contains("Successfully updated user."));

    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(output.contains("\"id\": 7"));
    mock.assert();
}

#[test]
fn missing_site_fails_fast() {
    cli()
        .env("BUSYBEE_TOKEN", "cli-token")
        .args(["posts", "delete", "--id", "1"])
        .assert()
        .failure()
        .stderr(contains("MissingSite"));
}

#[test]
fn post_without_thumbnail_is_refused() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/panel/post/new");
        then.status(200).body(r#"{"success":true}"#);
    });

    let token = token_file("cli-token");
    cli()
        .env("BUSYBEE_SITE_URL", server.base_url())
        .env("BUSYBEE_TOKEN_FILE", token.path())
        .args(["posts", "new", "--title", "Field day", "--description", "Photos"])
        .assert()
        .failure()
        .stderr(contains("You need to select a thumbnail."));
    mock.assert_calls(0);
}

#[test]
fn navigation_survives_between_runs() {
    let dir = TempDir::new().expect("temp dir");
    let store = dir.path().join("nav.json");
    let store = store.to_str().expect("utf-8 path");

    cli()
        .args(["--navigation-store", store, "nav", "visit", "/panel/posts"])
        .assert()
        .success()
        .stdout(contains("\"back\": \"/\""));

    cli()
        .args(["--navigation-store", store, "nav", "visit", "/panel/post/12"])
        .assert()
        .success()
        .stdout(contains("\"back\": \"/panel/posts\""));

    cli()
        .args(["--navigation-store", store, "nav", "back"])
        .assert()
        .success()
        .stdout(contains("\"redirect\": \"/panel/posts\""));
}

#[test]
fn time_ago_needs_no_site() {
    cli()
        .args(["time-ago", "--then", "1000", "--now", "1090"])
        .assert()
        .success()
        .stdout(contains("1 minute ago"));
}
