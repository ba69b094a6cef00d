//! `reqwest`-backed transport to the panel backend.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url};
use serde_json::Value;
use tracing::debug;

use crate::application::transport::{MultipartForm, PanelTransport, TransportError};
use crate::config::HttpSettings;

use super::error::InfraError;

#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    pub fn new(site: &Url, settings: &HttpSettings) -> Result<Self, InfraError> {
        let base = site
            .join("/")
            .map_err(|e| InfraError::http_client(format!("invalid site URL: {e}")))?;
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(settings.timeout)
            .build()
            .map_err(|e| InfraError::http_client(e.to_string()))?;
        Ok(Self { client, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("busybee-cli/", env!("CARGO_PKG_VERSION"))
    }

    pub fn url(&self, path: &str) -> Result<Url, TransportError> {
        self.base.join(path).map_err(TransportError::Url)
    }

    async fn handle(resp: Response) -> Result<Value, TransportError> {
        let status = resp.status();
        let bytes = resp.bytes().await.map_err(network)?;
        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

fn network(err: reqwest::Error) -> TransportError {
    TransportError::Network(err.to_string())
}

fn to_reqwest_form(form: MultipartForm) -> Result<Form, TransportError> {
    let MultipartForm { fields, files } = form;
    let mut out = Form::new();
    for (name, value) in fields {
        out = out.text(name, value);
    }
    for (name, attachment) in files {
        let part = Part::bytes(attachment.bytes.to_vec())
            .file_name(attachment.file_name)
            .mime_str(&attachment.content_type)
            .map_err(|e| TransportError::Encode(e.to_string()))?;
        out = out.part(name, part);
    }
    Ok(out)
}

#[async_trait]
impl PanelTransport for HttpTransport {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        let url = self.url(path)?;
        debug!(%url, "POST json");
        let resp = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(network)?;
        Self::handle(resp).await
    }

    async fn post_multipart(
        &self,
        path: &str,
        form: MultipartForm,
    ) -> Result<Value, TransportError> {
        let url = self.url(path)?;
        debug!(%url, files = form.files.len(), "POST multipart");
        let form = to_reqwest_form(form)?;
        let resp = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(network)?;
        Self::handle(resp).await
    }
}
