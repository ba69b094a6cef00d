//! Transport seam between controllers and the panel backend.

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::domain::posts::Attachment;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("network error: {0}")]
    Network(String),
    #[error("status {status} body {body}")]
    Status { status: u16, body: String },
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("failed to parse body: {0}")]
    Decode(String),
}

/// Text fields and files of a `multipart/form-data` submission, in form order.
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub files: Vec<(String, Attachment)>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }

    pub fn file(mut self, name: &str, attachment: Attachment) -> Self {
        self.files.push((name.to_string(), attachment));
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn files_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Attachment> + 'a {
        self.files
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, attachment)| attachment)
    }
}

/// POSTs to the panel backend. Paths are relative to the site root.
#[async_trait]
pub trait PanelTransport: Send + Sync {
    async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, TransportError>;

    async fn post_multipart(
        &self,
        path: &str,
        form: MultipartForm,
    ) -> Result<serde_json::Value, TransportError>;
}

/// Typed wrapper over [`PanelTransport::post_json`].
pub async fn post<Req, Resp>(
    transport: &dyn PanelTransport,
    path: &str,
    request: &Req,
) -> Result<Resp, TransportError>
where
    Req: Serialize + ?Sized,
    Resp: DeserializeOwned,
{
    let body = serde_json::to_value(request).map_err(|e| TransportError::Encode(e.to_string()))?;
    let value = transport.post_json(path, body).await?;
    serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))
}

/// Typed wrapper over [`PanelTransport::post_multipart`].
pub async fn post_form<Resp>(
    transport: &dyn PanelTransport,
    path: &str,
    form: MultipartForm,
) -> Result<Resp, TransportError>
where
    Resp: DeserializeOwned,
{
    let value = transport.post_multipart(path, form).await?;
    serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))
}
