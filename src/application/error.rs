use thiserror::Error;

use super::admin::users::RowKey;
use super::transport::TransportError;

/// Failure of one panel action.
///
/// `Validation` never reached the network, `Transport` never got a usable
/// response and `Rejected` got a response reporting failure.
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("validation failed: {0}")]
    Validation(&'static str),
    #[error("server reported failure for `{endpoint}`")]
    Rejected { endpoint: &'static str },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("no user row with key {0}")]
    UnknownRow(RowKey),
    #[error("no comment with id `{0}`")]
    UnknownComment(String),
    #[error("page context is missing the {0}")]
    MissingContext(&'static str),
}

impl PanelError {
    pub fn rejected(endpoint: &'static str) -> Self {
        Self::Rejected { endpoint }
    }

    /// Whether the server was reached and answered.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
