//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{path::PathBuf, str::FromStr, time::Duration};

use clap::{Args, builder::BoolishValueParser};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

use crate::application::context::DEFAULT_TITLE_PREFIX;
use crate::application::navigation::{DEFAULT_DETAIL_MARKER, DEFAULT_FALLBACK};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "busybee";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_NAVIGATION_STORE: &str = ".busybee/navigation.json";

/// Command-line overrides shared by every `busybee-cli` command.
#[derive(Debug, Args, Default, Clone)]
pub struct SettingsOverrides {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "BUSYBEE_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Panel site URL, e.g. <https://example.com>
    #[arg(long = "site", env = "BUSYBEE_SITE_URL", value_name = "URL")]
    pub site: Option<String>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,

    /// Override where the last visited page is remembered.
    #[arg(long = "navigation-store", value_name = "PATH")]
    pub navigation_store: Option<PathBuf>,

    /// Override the HTTP request timeout.
    #[arg(long = "timeout-seconds", value_name = "SECONDS")]
    pub timeout_seconds: Option<u64>,

    /// Override the prefix of document titles.
    #[arg(long = "title-prefix", value_name = "TEXT")]
    pub title_prefix: Option<String>,
}

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub site: SiteSettings,
    pub http: HttpSettings,
    pub navigation: NavigationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub base_url: Option<Url>,
    pub title_prefix: String,
}

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavigationSettings {
    pub store_path: PathBuf,
    pub detail_marker: String,
    pub fallback: String,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(overrides: &SettingsOverrides) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = overrides.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("BUSYBEE").separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_overrides(overrides);

    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    site: RawSiteSettings,
    page: RawPageSettings,
    http: RawHttpSettings,
    navigation: RawNavigationSettings,
    logging: RawLoggingSettings,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &SettingsOverrides) {
        if let Some(site) = overrides.site.as_ref() {
            self.site.base_url = Some(site.clone());
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
        if let Some(path) = overrides.navigation_store.as_ref() {
            self.navigation.store_path = Some(path.clone());
        }
        if let Some(seconds) = overrides.timeout_seconds {
            self.http.timeout_seconds = Some(seconds);
        }
        if let Some(prefix) = overrides.title_prefix.as_ref() {
            self.page.title_prefix = Some(prefix.clone());
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            site,
            page,
            http,
            navigation,
            logging,
        } = raw;

        Ok(Self {
            site: build_site_settings(site, page)?,
            http: build_http_settings(http)?,
            navigation: build_navigation_settings(navigation)?,
            logging: build_logging_settings(logging)?,
        })
    }
}

fn build_site_settings(
    site: RawSiteSettings,
    page: RawPageSettings,
) -> Result<SiteSettings, LoadError> {
    let base_url = match site.base_url {
        Some(value) if !value.trim().is_empty() => {
            let url = Url::parse(value.trim())
                .map_err(|err| LoadError::invalid("site.base_url", err.to_string()))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(LoadError::invalid(
                    "site.base_url",
                    format!("unsupported scheme `{}`", url.scheme()),
                ));
            }
            Some(url)
        }
        _ => None,
    };

    let title_prefix = page
        .title_prefix
        .unwrap_or_else(|| DEFAULT_TITLE_PREFIX.to_string());

    Ok(SiteSettings {
        base_url,
        title_prefix,
    })
}

fn build_http_settings(http: RawHttpSettings) -> Result<HttpSettings, LoadError> {
    let seconds = http.timeout_seconds.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);
    if seconds == 0 {
        return Err(LoadError::invalid(
            "http.timeout_seconds",
            "must be greater than zero",
        ));
    }
    Ok(HttpSettings {
        timeout: Duration::from_secs(seconds),
    })
}

fn build_navigation_settings(
    navigation: RawNavigationSettings,
) -> Result<NavigationSettings, LoadError> {
    let store_path = navigation
        .store_path
        .unwrap_or_else(|| PathBuf::from(DEFAULT_NAVIGATION_STORE));
    if store_path.as_os_str().is_empty() {
        return Err(LoadError::invalid(
            "navigation.store_path",
            "path must not be empty",
        ));
    }

    let detail_marker = navigation
        .detail_marker
        .unwrap_or_else(|| DEFAULT_DETAIL_MARKER.to_string());
    if detail_marker.is_empty() {
        return Err(LoadError::invalid(
            "navigation.detail_marker",
            "must not be empty",
        ));
    }

    let fallback = navigation
        .fallback
        .unwrap_or_else(|| DEFAULT_FALLBACK.to_string());
    if !fallback.starts_with('/') {
        return Err(LoadError::invalid(
            "navigation.fallback",
            "must be an absolute path",
        ));
    }

    Ok(NavigationSettings {
        store_path,
        detail_marker,
        fallback,
    })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSiteSettings {
    base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawPageSettings {
    title_prefix: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawHttpSettings {
    timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawNavigationSettings {
    store_path: Option<PathBuf>,
    detail_marker: Option<String>,
    fallback: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}
