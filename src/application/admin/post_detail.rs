//! Single post page: inline title/description editing, deletion and comments.

use std::sync::Arc;

use busybee_api_types::{
    CommentCreateRequest, CommentDeleteRequest, CommentId, CreatedResponse, PostDeleteRequest,
    PostId, PostUpdateRequest, SuccessResponse, paths,
};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::application::context::PageContext;
use crate::application::error::PanelError;
use crate::application::navigation::{NavigationMemory, Redirect};
use crate::application::notice::{Notice, NoticeBoard};
use crate::application::transport::{PanelTransport, post};
use crate::domain::posts::{
    CommentBlock, EditableText, PostView, is_suppressed_key, strip_line_breaks,
};

pub struct PostDetailController {
    ctx: Arc<PageContext>,
    transport: Arc<dyn PanelTransport>,
    navigation: NavigationMemory,
    notices: NoticeBoard,
    post_id: PostId,
    title: EditableText,
    description: EditableText,
    document_title: String,
    comments: Vec<CommentBlock>,
    comment_input: String,
}

impl PostDetailController {
    pub fn new(
        ctx: Arc<PageContext>,
        transport: Arc<dyn PanelTransport>,
        navigation: NavigationMemory,
        view: PostView,
    ) -> Result<Self, PanelError> {
        let post_id = ctx.require_post_id()?;
        let document_title = ctx.document_title(&view.title);
        Ok(Self {
            ctx,
            transport,
            navigation,
            notices: NoticeBoard::new(),
            post_id,
            title: EditableText::new(view.title),
            description: EditableText::new(view.description),
            document_title,
            comments: view.comments,
            comment_input: String::new(),
        })
    }

    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    pub fn title(&self) -> &EditableText {
        &self.title
    }

    pub fn title_mut(&mut self) -> &mut EditableText {
        &mut self.title
    }

    pub fn description(&self) -> &EditableText {
        &self.description
    }

    pub fn description_mut(&mut self) -> &mut EditableText {
        &mut self.description
    }

    pub fn document_title(&self) -> &str {
        &self.document_title
    }

    pub fn comments(&self) -> &[CommentBlock] {
        &self.comments
    }

    pub fn comment_input(&self) -> &str {
        &self.comment_input
    }

    pub fn set_comment_input(&mut self, text: impl Into<String>) {
        self.comment_input = strip_line_breaks(&text.into());
    }

    /// Key press anywhere on the page. Returns `true` when the host must
    /// swallow the key (Enter and Return).
    pub fn key_pressed(&self, code: u32) -> bool {
        let suppressed = is_suppressed_key(code);
        if suppressed {
            debug!(code, "suppressed line-break key");
        }
        suppressed
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    /// Title lost focus. Sends an update only when it changed since the last commit.
    pub async fn blur_title(&mut self) -> Result<bool, PanelError> {
        if !self.title.commit() {
            return Ok(false);
        }
        self.save().await.map(|()| true)
    }

    /// Description lost focus. Sends an update only when it changed since the last commit.
    pub async fn blur_description(&mut self) -> Result<bool, PanelError> {
        if !self.description.commit() {
            return Ok(false);
        }
        self.save().await.map(|()| true)
    }

    /// Send the committed title and description.
    pub async fn save(&mut self) -> Result<(), PanelError> {
        let request = PostUpdateRequest {
            id: self.post_id,
            title: self.title.committed().to_string(),
            description: self.description.committed().to_string(),
            csrf_secret: self.ctx.security_token.clone(),
        };
        let result = post::<_, SuccessResponse>(
            self.transport.as_ref(),
            paths::POST_UPDATE,
            &request,
        )
        .await;

        match super::settle(paths::POST_UPDATE, result) {
            Ok(_) => {
                self.document_title = self.ctx.document_title(self.title.committed());
                info!(post_id = self.post_id, "updated post");
                Ok(())
            }
            Err(error) => {
                self.notices
                    .replace(Notice::error("Error updating post, refresh the page."));
                Err(error)
            }
        }
    }

    pub async fn delete_post(&mut self) -> Result<Redirect, PanelError> {
        self.notices.push(Notice::info("Deleting post."));

        let request = PostDeleteRequest {
            id: self.post_id,
            csrf_secret: self.ctx.security_token.clone(),
        };
        let result = post::<_, SuccessResponse>(
            self.transport.as_ref(),
            paths::POST_DELETE,
            &request,
        )
        .await;

        match super::settle(paths::POST_DELETE, result) {
            Ok(_) => {
                info!(post_id = self.post_id, "deleted post");
                Ok(self.navigation.last_page())
            }
            Err(error) => {
                self.notices
                    .replace(Notice::error("Error deleting post, refresh the page."));
                Err(error)
            }
        }
    }

    /// Post the comment box. Text survives a failed submission.
    pub async fn add_comment(&mut self) -> Result<CommentId, PanelError> {
        if self.comment_input.is_empty() {
            warn!("comment submission aborted: empty comment");
            self.notices
                .push(Notice::error("You need to enter a comment first."));
            return Err(PanelError::Validation("comment text is required"));
        }

        self.notices.push(Notice::info("Submitting comment."));
        let request = CommentCreateRequest {
            id: self.post_id,
            comment: self.comment_input.clone(),
            csrf_secret: self.ctx.security_token.clone(),
        };
        let result = post::<_, CreatedResponse<CommentId>>(
            self.transport.as_ref(),
            paths::COMMENT_NEW,
            &request,
        )
        .await;

        let created = super::settle(paths::COMMENT_NEW, result)
            .and_then(|response| super::created_id(paths::COMMENT_NEW, response));
        match created {
            Ok(id) => {
                self.comments.push(CommentBlock {
                    id: id.clone(),
                    author: self.ctx.user.to_string(),
                    body: std::mem::take(&mut self.comment_input),
                    posted_at: OffsetDateTime::now_utc().unix_timestamp(),
                });
                self.notices
                    .replace(Notice::success("Successfully added comment!"));
                info!(post_id = self.post_id, comment_id = %id, "added comment");
                Ok(id)
            }
            Err(error) => {
                self.notices.replace(Notice::error(
                    "Error submitting comment, refresh the page.",
                ));
                Err(error)
            }
        }
    }

    /// Delete one comment of this post and drop only its block.
    pub async fn delete_comment(&mut self, comment_id: &str) -> Result<(), PanelError> {
        let index = self
            .comments
            .iter()
            .position(|comment| comment.id == comment_id)
            .ok_or_else(|| PanelError::UnknownComment(comment_id.to_string()))?;

        self.notices.push(Notice::info("Deleting comment."));
        let request = CommentDeleteRequest {
            post_id: self.post_id,
            comment_id: comment_id.to_string(),
            csrf_secret: self.ctx.security_token.clone(),
        };
        let result = post::<_, SuccessResponse>(
            self.transport.as_ref(),
            paths::COMMENT_DELETE,
            &request,
        )
        .await;

        match super::settle(paths::COMMENT_DELETE, result) {
            Ok(_) => {
                self.comments.remove(index);
                self.notices
                    .replace(Notice::success("Successfully deleted comment!"));
                info!(post_id = self.post_id, comment_id, "deleted comment");
                Ok(())
            }
            Err(error) => {
                self.notices.replace(Notice::error(
                    "Error deleting comment, refresh the page.",
                ));
                Err(error)
            }
        }
    }
}
