#![deny(clippy::all, clippy::pedantic)]

use busybee::api::{CommentId, PostId};
use busybee::application::admin::post_detail::PostDetailController;
use busybee::domain::posts::{CommentBlock, PostView};
use serde_json::json;

use crate::args::CommentsCmd;
use crate::client::{CliError, Ctx};
use crate::print::{print_json, print_notices};

pub async fn handle(ctx: &Ctx, cmd: CommentsCmd) -> Result<(), CliError> {
    match cmd {
        CommentsCmd::Add { post_id, text } => add(ctx, post_id, text).await,
        CommentsCmd::Delete {
            post_id,
            comment_id,
        } => delete(ctx, post_id, comment_id).await,
    }
}

async fn add(ctx: &Ctx, post_id: PostId, text: String) -> Result<(), CliError> {
    let mut detail = PostDetailController::new(
        ctx.post_page(post_id),
        ctx.transport.clone(),
        ctx.navigation.clone(),
        PostView::default(),
    )?;
    detail.set_comment_input(text);
    let result = detail.add_comment().await;
    print_notices(detail.notices_mut());
    let id = result?;

    let author = detail
        .comments()
        .last()
        .map(|block| block.author.clone())
        .unwrap_or_default();
    print_json(&json!({ "id": id, "post_id": post_id, "author": author }))
}

async fn delete(ctx: &Ctx, post_id: PostId, comment_id: CommentId) -> Result<(), CliError> {
    let view = PostView {
        comments: vec![CommentBlock {
            id: comment_id.clone(),
            author: String::new(),
            body: String::new(),
            posted_at: 0,
        }],
        ..PostView::default()
    };
    let mut detail = PostDetailController::new(
        ctx.post_page(post_id),
        ctx.transport.clone(),
        ctx.navigation.clone(),
        view,
    )?;
    let result = detail.delete_comment(&comment_id).await;
    print_notices(detail.notices_mut());
    result?;
    print_json(&json!({ "deleted": comment_id, "post_id": post_id }))
}
