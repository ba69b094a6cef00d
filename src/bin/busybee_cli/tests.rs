#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;
use std::sync::Arc;

use busybee::application::context::{DisplayName, PageContext};
use busybee::application::error::PanelError;
use busybee::application::navigation::{MemoryPageStore, NavigationMemory, PageStore};
use busybee::config::{HttpSettings, Settings, SettingsOverrides};
use busybee::infra::http::HttpTransport;
use httpmock::MockServer;
use tempfile::NamedTempFile;
use url::Url;

use crate::args::{
    Cli, Commands, CommentsCmd, NavArgs, NavCmd, PostsCmd, PrivilegesArg, SettingsCmd,
    UserFieldsArgs, UsersCmd,
};
use crate::client::{CliError, Ctx, build_ctx_from_cli};
use crate::handlers::{comments, posts, settings, users};

fn ctx_with_store(server: &MockServer, store: Arc<dyn PageStore>) -> Ctx {
    let site = Url::parse(&server.base_url()).expect("site url");
    let transport = HttpTransport::new(&site, &HttpSettings::default()).expect("transport");
    let page = PageContext::new("csrf-token").with_user(DisplayName::new("Ada", "Lovelace"));
    Ctx::new(page, Arc::new(transport), NavigationMemory::new(store))
}

fn ctx(server: &MockServer) -> Ctx {
    ctx_with_store(server, Arc::new(MemoryPageStore::new()))
}

fn tmp_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("tmp file");
    std::io::Write::write_all(&mut file, contents).expect("write tmp");
    file
}

fn cli(token_file: Option<PathBuf>, token_env: Option<&str>) -> Cli {
    Cli {
        settings: SettingsOverrides::default(),
        token_file,
        token_env: token_env.map(str::to_string),
        author_first_name: "Ada".into(),
        author_last_name: "Lovelace".into(),
        command: Commands::Nav(NavArgs {
            action: NavCmd::Back,
        }),
    }
}

fn settings_with_site(site: Option<&str>) -> Settings {
    let overrides = SettingsOverrides {
        site: site.map(str::to_string),
        ..SettingsOverrides::default()
    };
    busybee::config::load(&overrides).expect("settings")
}

fn user_fields() -> UserFieldsArgs {
    UserFieldsArgs {
        email: "ada@example.com".into(),
        password: String::new(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        privileges: PrivilegesArg::Moderator,
    }
}

#[test]
fn build_ctx_prefers_token_file() -> Result<(), CliError> {
    let file = tmp_file(b"file-token\n");
    let cli = cli(Some(file.path().to_path_buf()), Some("env-token"));
    let ctx = build_ctx_from_cli(&cli, &settings_with_site(Some("https://example.com")))?;
    assert_eq!(ctx.page.security_token, "file-token");
    assert_eq!(ctx.page.user.to_string(), "Ada Lovelace");
    Ok(())
}

#[test]
fn build_ctx_errors_without_token() {
    let cli = cli(None, None);
    let err = build_ctx_from_cli(&cli, &settings_with_site(Some("https://example.com")))
        .err()
        .expect("missing token should fail");
    assert!(matches!(err, CliError::MissingToken));
}

#[test]
fn build_ctx_errors_without_site() {
    let cli = cli(None, Some("env-token"));
    let err = build_ctx_from_cli(&cli, &settings_with_site(None))
        .err()
        .expect("missing site should fail");
    assert!(matches!(err, CliError::MissingSite));
}

#[tokio::test]
async fn users_update_posts_numeric_privileges() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/panel/user/update")
            .json_body_includes(
                r#"{"ID":7,"Email":"ada@example.com","Privileges":2,"CsrfSecret":"csrf-token"}"#,
            );
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success":true}"#);
    });

    users::handle(
        &ctx(&server),
        UsersCmd::Update {
            id: 7,
            fields: user_fields(),
        },
    )
    .await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn users_create_hits_new_endpoint() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/panel/user/new")
            .json_body_includes(r#"{"Fname":"Ada","Lname":"Lovelace"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success":true,"id":42}"#);
    });

    users::handle(
        &ctx(&server),
        UsersCmd::Create {
            fields: user_fields(),
        },
    )
    .await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn users_delete_reports_rejection() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/panel/user/delete");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success":false}"#);
    });

    let err = users::handle(&ctx(&server), UsersCmd::Delete { id: 3 })
        .await
        .expect_err("rejected delete");
    assert!(matches!(err, CliError::Panel(PanelError::Rejected { .. })));
    mock.assert();
}

#[tokio::test]
async fn settings_update_sends_new_email() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/panel/settings/update")
            .json_body_includes(r#"{"Email":"new@example.com","CsrfSecret":"csrf-token"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success":true}"#);
    });

    settings::handle(
        &ctx(&server),
        SettingsCmd::Update {
            email: "new@example.com".into(),
            current_email: Some("old@example.com".into()),
            password: String::new(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        },
    )
    .await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn posts_new_requires_thumbnail() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/panel/post/new");
        then.status(200).body(r#"{"success":true}"#);
    });

    let err = posts::handle(
        &ctx(&server),
        PostsCmd::New {
            title: "Field day".into(),
            description: "Photos".into(),
            thumbnail: None,
            images: Vec::new(),
        },
    )
    .await
    .expect_err("thumbnail is required");
    assert!(matches!(err, CliError::Panel(PanelError::Validation(_))));
    mock.assert_calls(0);
}

#[tokio::test]
async fn posts_new_uploads_files() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/panel/post/new");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success":true}"#);
    });

    let thumb = tmp_file(b"\x89PNG");
    let image = tmp_file(b"\xff\xd8\xff");
    posts::handle(
        &ctx(&server),
        PostsCmd::New {
            title: "Field day".into(),
            description: "Photos".into(),
            thumbnail: Some(thumb.path().to_path_buf()),
            images: vec![image.path().to_path_buf()],
        },
    )
    .await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn posts_new_reports_unreadable_file() {
    let server = MockServer::start();
    let err = posts::handle(
        &ctx(&server),
        PostsCmd::New {
            title: "Field day".into(),
            description: "Photos".into(),
            thumbnail: Some(PathBuf::from("/nonexistent/busybee/thumb.png")),
            images: Vec::new(),
        },
    )
    .await
    .expect_err("missing file");
    assert!(matches!(err, CliError::InputFile { .. }));
}

#[tokio::test]
async fn posts_update_sends_title_and_description() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/panel/post/update")
            .json_body_includes(r#"{"ID":5,"Title":"New title","Description":"Body"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success":true}"#);
    });

    posts::handle(
        &ctx(&server),
        PostsCmd::Update {
            id: 5,
            title: "New title".into(),
            description: "Body".into(),
        },
    )
    .await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn posts_delete_hits_endpoint() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/panel/post/delete")
            .json_body_includes(r#"{"ID":5}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success":true}"#);
    });

    let store: Arc<dyn PageStore> = Arc::new(MemoryPageStore::new());
    store
        .store("lastPage", "/panel/posts")
        .expect("seed last page");
    posts::handle(&ctx_with_store(&server, store), PostsCmd::Delete { id: 5 }).await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn comments_add_posts_text() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/panel/post/comment")
            .json_body_includes(r#"{"ID":5,"Comment":"Lovely!"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success":true,"id":"c-1"}"#);
    });

    comments::handle(
        &ctx(&server),
        CommentsCmd::Add {
            post_id: 5,
            text: "Lovely!".into(),
        },
    )
    .await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn comments_delete_sends_both_ids() -> Result<(), CliError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/panel/post/comment/delete")
            .json_body_includes(r#"{"PostID":5,"CommentID":"c-1"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"success":true}"#);
    });

    comments::handle(
        &ctx(&server),
        CommentsCmd::Delete {
            post_id: 5,
            comment_id: "c-1".into(),
        },
    )
    .await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn server_error_surfaces_as_transport_failure() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/panel/post/delete");
        then.status(500).body("boom");
    });

    let err = posts::handle(&ctx(&server), PostsCmd::Delete { id: 9 })
        .await
        .expect_err("server error");
    assert!(matches!(err, CliError::Panel(PanelError::Transport(_))));
    mock.assert();
}
