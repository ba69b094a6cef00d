#![deny(clippy::all, clippy::pedantic)]

use busybee::api::UserId;
use busybee::application::admin::users::UserListController;
use busybee::domain::users::UserFields;
use serde_json::json;

use crate::args::{UserFieldsArgs, UsersCmd};
use crate::client::{CliError, Ctx};
use crate::print::{print_json, print_notices};

pub async fn handle(ctx: &Ctx, cmd: UsersCmd) -> Result<(), CliError> {
    match cmd {
        UsersCmd::Update { id, fields } => update(ctx, id, fields).await,
        UsersCmd::Create { fields } => create(ctx, fields).await,
        UsersCmd::Delete { id } => delete(ctx, id).await,
    }
}

fn to_fields(args: UserFieldsArgs) -> UserFields {
    UserFields {
        email: args.email,
        password: args.password,
        first_name: args.first_name,
        last_name: args.last_name,
        privileges: args.privileges.into(),
    }
}

async fn update(ctx: &Ctx, id: UserId, fields: UserFieldsArgs) -> Result<(), CliError> {
    let mut list = UserListController::new(
        ctx.list_page(),
        ctx.transport.clone(),
        [(id, to_fields(fields))],
    );
    let key = list.rows()[0].key();
    let result = list.update_user(key).await;
    print_notices(list.notices_mut());
    let id = result?;
    print_json(&json!({ "id": id }))
}

async fn create(ctx: &Ctx, fields: UserFieldsArgs) -> Result<(), CliError> {
    let mut list = UserListController::new(
        ctx.list_page(),
        ctx.transport.clone(),
        Vec::<(UserId, UserFields)>::new(),
    );
    let key = list.add_user();
    *list.fields_mut(key)? = to_fields(fields);
    let result = list.update_user(key).await;
    print_notices(list.notices_mut());
    let id = result?;

    let header = list.row(key).map(|row| row.header().to_string());
    print_json(&json!({ "id": id, "name": header }))
}

async fn delete(ctx: &Ctx, id: UserId) -> Result<(), CliError> {
    let mut list = UserListController::new(
        ctx.list_page(),
        ctx.transport.clone(),
        [(id, UserFields::default())],
    );
    let key = list.rows()[0].key();
    let result = list.delete_user(key).await;
    print_notices(list.notices_mut());
    result?;
    print_json(&json!({ "deleted": id }))
}
