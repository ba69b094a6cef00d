#![deny(clippy::all, clippy::pedantic)]

use std::fs;
use std::sync::Arc;

use busybee::application::context::{DisplayName, PageContext};
use busybee::application::error::PanelError;
use busybee::application::navigation::NavigationMemory;
use busybee::application::transport::PanelTransport;
use busybee::config::{LoadError, Settings};
use busybee::infra::error::InfraError;
use busybee::infra::http::HttpTransport;
use busybee::infra::storage::FilePageStore;
use thiserror::Error;

use crate::args::Cli;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("site URL is required (use --site or BUSYBEE_SITE_URL)")]
    MissingSite,
    #[error("security token is required (use --token-file or BUSYBEE_TOKEN)")]
    MissingToken,
    #[error("failed to read token file: {0}")]
    TokenFile(std::io::Error),
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Panel(#[from] PanelError),
    #[error("failed to render output: {0}")]
    Render(String),
}

/// Everything a backend command needs: page context, transport and navigation.
#[derive(Clone)]
pub struct Ctx {
    pub page: PageContext,
    pub transport: Arc<dyn PanelTransport>,
    pub navigation: NavigationMemory,
}

impl Ctx {
    pub fn new(
        page: PageContext,
        transport: Arc<dyn PanelTransport>,
        navigation: NavigationMemory,
    ) -> Self {
        Self {
            page,
            transport,
            navigation,
        }
    }

    /// Page context for a post detail page.
    pub fn post_page(&self, post_id: i64) -> Arc<PageContext> {
        Arc::new(self.page.clone().with_post(post_id))
    }

    pub fn list_page(&self) -> Arc<PageContext> {
        Arc::new(self.page.clone())
    }
}

pub fn navigation_from_settings(settings: &Settings) -> NavigationMemory {
    let store = FilePageStore::new(settings.navigation.store_path.clone());
    NavigationMemory::with_rules(
        Arc::new(store),
        settings.navigation.detail_marker.clone(),
        settings.navigation.fallback.clone(),
    )
}

pub fn read_token(cli: &Cli) -> Result<String, CliError> {
    let token = if let Some(path) = &cli.token_file {
        fs::read_to_string(path)
            .map_err(CliError::TokenFile)?
            .trim()
            .to_string()
    } else {
        cli.token_env.clone().ok_or(CliError::MissingToken)?
    };
    if token.is_empty() {
        return Err(CliError::MissingToken);
    }
    Ok(token)
}

pub fn build_ctx_from_cli(cli: &Cli, settings: &Settings) -> Result<Ctx, CliError> {
    let site = settings.site.base_url.as_ref().ok_or(CliError::MissingSite)?;
    let token = read_token(cli)?;
    let transport = HttpTransport::new(site, &settings.http)?;

    let page = PageContext::new(token)
        .with_user(DisplayName::new(
            cli.author_first_name.clone(),
            cli.author_last_name.clone(),
        ))
        .with_title_prefix(settings.site.title_prefix.clone());

    Ok(Ctx::new(
        page,
        Arc::new(transport),
        navigation_from_settings(settings),
    ))
}
