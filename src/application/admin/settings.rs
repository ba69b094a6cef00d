//! The signed-in account's settings form.

use std::sync::Arc;

use busybee_api_types::{SettingsUpdateRequest, SuccessResponse, paths};
use tracing::info;

use crate::application::context::PageContext;
use crate::application::error::PanelError;
use crate::application::notice::{Notice, NoticeBoard};
use crate::application::transport::{PanelTransport, post};
use crate::domain::users::SettingsFields;

/// Result of a successful settings update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsSaved {
    /// The email differs from the one shown at page load, so the backend
    /// sent a verification message.
    pub verification_pending: bool,
}

pub struct SettingsController {
    ctx: Arc<PageContext>,
    transport: Arc<dyn PanelTransport>,
    notices: NoticeBoard,
    fields: SettingsFields,
    email_at_load: String,
}

impl SettingsController {
    pub fn new(
        ctx: Arc<PageContext>,
        transport: Arc<dyn PanelTransport>,
        fields: SettingsFields,
    ) -> Self {
        Self {
            ctx,
            transport,
            notices: NoticeBoard::new(),
            email_at_load: fields.email.clone(),
            fields,
        }
    }

    pub fn fields(&self) -> &SettingsFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut SettingsFields {
        &mut self.fields
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    pub async fn update_settings(&mut self) -> Result<SettingsSaved, PanelError> {
        self.notices.push(Notice::info("Updating your settings."));

        let request = SettingsUpdateRequest {
            csrf_secret: self.ctx.security_token.clone(),
            email: self.fields.email.clone(),
            password: self.fields.password.clone(),
            fname: self.fields.first_name.clone(),
            lname: self.fields.last_name.clone(),
        };
        let result = post::<_, SuccessResponse>(
            self.transport.as_ref(),
            paths::SETTINGS_UPDATE,
            &request,
        )
        .await;

        if let Err(error) = super::settle(paths::SETTINGS_UPDATE, result) {
            self.notices.replace(Notice::error(
                "Error updating your settings, refresh the page.",
            ));
            return Err(error);
        }

        self.notices
            .replace(Notice::success("Successfully updated your settings."));
        let verification_pending = self.fields.email != self.email_at_load;
        if verification_pending {
            self.notices.push(Notice::info(
                "Please check your email for a verification message.",
            ));
        }
        info!(verification_pending, "updated account settings");
        Ok(SettingsSaved {
            verification_pending,
        })
    }
}
