#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use busybee::api::PostId;
use busybee::application::admin::composer::PostComposer;
use busybee::application::admin::post_detail::PostDetailController;
use busybee::domain::posts::PostView;
use serde_json::json;

use crate::args::PostsCmd;
use crate::client::{CliError, Ctx};
use crate::io::read_attachment;
use crate::print::{print_json, print_notices};

pub async fn handle(ctx: &Ctx, cmd: PostsCmd) -> Result<(), CliError> {
    match cmd {
        PostsCmd::New {
            title,
            description,
            thumbnail,
            images,
        } => create(ctx, title, description, thumbnail, images).await,
        PostsCmd::Update {
            id,
            title,
            description,
        } => update(ctx, id, title, description).await,
        PostsCmd::Delete { id } => delete(ctx, id).await,
    }
}

async fn create(
    ctx: &Ctx,
    title: String,
    description: String,
    thumbnail: Option<PathBuf>,
    images: Vec<PathBuf>,
) -> Result<(), CliError> {
    let mut composer = PostComposer::new(
        ctx.list_page(),
        ctx.transport.clone(),
        ctx.navigation.clone(),
    );
    {
        let form = composer.form_mut();
        form.title = title;
        form.description = description;
        form.thumbnail = thumbnail.as_deref().map(read_attachment).transpose()?;
        form.images = images
            .iter()
            .map(|path| read_attachment(path))
            .collect::<Result<_, _>>()?;
    }

    let result = composer.submit().await;
    print_notices(composer.notices_mut());
    let redirect = result?;
    print_json(&json!({ "redirect": redirect.path }))
}

async fn update(
    ctx: &Ctx,
    id: PostId,
    title: String,
    description: String,
) -> Result<(), CliError> {
    let view = PostView {
        title,
        description,
        comments: Vec::new(),
    };
    let mut detail = PostDetailController::new(
        ctx.post_page(id),
        ctx.transport.clone(),
        ctx.navigation.clone(),
        view,
    )?;
    let result = detail.save().await;
    print_notices(detail.notices_mut());
    result?;
    print_json(&json!({ "id": id, "document_title": detail.document_title() }))
}

async fn delete(ctx: &Ctx, id: PostId) -> Result<(), CliError> {
    let mut detail = PostDetailController::new(
        ctx.post_page(id),
        ctx.transport.clone(),
        ctx.navigation.clone(),
        PostView::default(),
    )?;
    let result = detail.delete_post().await;
    print_notices(detail.notices_mut());
    let redirect = result?;
    print_json(&json!({ "deleted": id, "redirect": redirect.path }))
}
