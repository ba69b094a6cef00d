#![deny(clippy::all, clippy::pedantic)]

use busybee::application::admin::settings::SettingsController;
use busybee::domain::users::SettingsFields;
use serde_json::json;

use crate::args::SettingsCmd;
use crate::client::{CliError, Ctx};
use crate::print::{print_json, print_notices};

pub async fn handle(ctx: &Ctx, cmd: SettingsCmd) -> Result<(), CliError> {
    match cmd {
        SettingsCmd::Update {
            email,
            current_email,
            password,
            first_name,
            last_name,
        } => {
            let loaded = SettingsFields {
                email: current_email.unwrap_or_else(|| email.clone()),
                password: String::new(),
                first_name: first_name.clone(),
                last_name: last_name.clone(),
            };
            let mut controller =
                SettingsController::new(ctx.list_page(), ctx.transport.clone(), loaded);
            *controller.fields_mut() = SettingsFields {
                email,
                password,
                first_name,
                last_name,
            };

            let result = controller.update_settings().await;
            print_notices(controller.notices_mut());
            let saved = result?;
            print_json(&json!({ "verification_pending": saved.verification_pending }))
        }
    }
}
