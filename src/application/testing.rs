//! Recording transport for controller tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use super::transport::{MultipartForm, PanelTransport, TransportError};

#[derive(Debug, Clone)]
pub(crate) enum RecordedCall {
    Json { path: String, body: Value },
    Multipart { path: String, form: MultipartForm },
}

impl RecordedCall {
    pub(crate) fn path(&self) -> &str {
        match self {
            RecordedCall::Json { path, .. } | RecordedCall::Multipart { path, .. } => path,
        }
    }

    pub(crate) fn json_body(&self) -> &Value {
        match self {
            RecordedCall::Json { body, .. } => body,
            RecordedCall::Multipart { .. } => panic!("expected a JSON call"),
        }
    }
}

/// Replies with queued responses in order; an empty queue answers `{"success": true}`.
#[derive(Default)]
pub(crate) struct RecordingTransport {
    replies: Mutex<VecDeque<Result<Value, TransportError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, value: Value) -> Self {
        self.replies.lock().expect("replies").push_back(Ok(value));
        self
    }

    pub(crate) fn fail(self, error: TransportError) -> Self {
        self.replies.lock().expect("replies").push_back(Err(error));
        self
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls").clone()
    }

    pub(crate) fn paths(&self) -> Vec<String> {
        self.calls().iter().map(|c| c.path().to_string()).collect()
    }

    fn next_reply(&self) -> Result<Value, TransportError> {
        self.replies
            .lock()
            .expect("replies")
            .pop_front()
            .unwrap_or_else(|| Ok(json!({"success": true})))
    }
}

#[async_trait]
impl PanelTransport for RecordingTransport {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value, TransportError> {
        self.calls.lock().expect("calls").push(RecordedCall::Json {
            path: path.to_string(),
            body,
        });
        self.next_reply()
    }

    async fn post_multipart(
        &self,
        path: &str,
        form: MultipartForm,
    ) -> Result<Value, TransportError> {
        self.calls.lock().expect("calls").push(RecordedCall::Multipart {
            path: path.to_string(),
            form,
        });
        self.next_reply()
    }
}
