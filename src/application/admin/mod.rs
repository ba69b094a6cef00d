//! Controllers behind the panel pages.

pub mod composer;
pub mod post_detail;
pub mod settings;
pub mod users;

use busybee_api_types::{CreatedResponse, SuccessResponse};
use tracing::warn;

use super::error::PanelError;
use super::transport::TransportError;

/// Responses that carry the backend's success flag.
pub(crate) trait Acknowledged {
    fn succeeded(&self) -> bool;
}

impl Acknowledged for SuccessResponse {
    fn succeeded(&self) -> bool {
        self.success
    }
}

impl<T> Acknowledged for CreatedResponse<T> {
    fn succeeded(&self) -> bool {
        self.success
    }
}

/// Fold transport failures and `success: false` into one error path.
pub(crate) fn settle<R: Acknowledged>(
    endpoint: &'static str,
    result: Result<R, TransportError>,
) -> Result<R, PanelError> {
    match result {
        Ok(response) if response.succeeded() => Ok(response),
        Ok(_) => {
            warn!(endpoint, "server reported failure");
            Err(PanelError::rejected(endpoint))
        }
        Err(error) => {
            warn!(endpoint, %error, "request failed");
            Err(error.into())
        }
    }
}

/// Pull the identifier out of a successful creation response.
pub(crate) fn created_id<T>(
    endpoint: &'static str,
    response: CreatedResponse<T>,
) -> Result<T, PanelError> {
    response.id.ok_or_else(|| {
        warn!(endpoint, "creation succeeded without an id");
        PanelError::Transport(TransportError::Decode(format!(
            "`{endpoint}` response is missing `id`"
        )))
    })
}
