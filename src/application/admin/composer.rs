//! New-post form with thumbnail and gallery uploads.

use std::sync::Arc;

use busybee_api_types::{SuccessResponse, form_fields, paths};
use tracing::{info, warn};

use crate::application::context::PageContext;
use crate::application::error::PanelError;
use crate::application::navigation::{NavigationMemory, Redirect};
use crate::application::notice::{Notice, NoticeBoard};
use crate::application::transport::{MultipartForm, PanelTransport, post_form};
use crate::domain::posts::PostForm;

pub struct PostComposer {
    ctx: Arc<PageContext>,
    transport: Arc<dyn PanelTransport>,
    navigation: NavigationMemory,
    notices: NoticeBoard,
    form: PostForm,
}

impl PostComposer {
    pub fn new(
        ctx: Arc<PageContext>,
        transport: Arc<dyn PanelTransport>,
        navigation: NavigationMemory,
    ) -> Self {
        Self {
            ctx,
            transport,
            navigation,
            notices: NoticeBoard::new(),
            form: PostForm::default(),
        }
    }

    pub fn form(&self) -> &PostForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PostForm {
        &mut self.form
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    /// Submit the whole form. A thumbnail is required before anything is sent.
    /// On success the page returns to the remembered list page.
    pub async fn submit(&mut self) -> Result<Redirect, PanelError> {
        let Some(thumbnail) = self.form.thumbnail.clone() else {
            warn!("post submission aborted: no thumbnail selected");
            self.notices
                .replace(Notice::error("You need to select a thumbnail."));
            return Err(PanelError::Validation("a thumbnail is required"));
        };

        self.notices.push(Notice::info("Sending new post request!"));

        let form = self
            .form
            .images
            .iter()
            .cloned()
            .fold(
                MultipartForm::new()
                    .text(form_fields::SECURITY_TOKEN, self.ctx.security_token.clone())
                    .text(form_fields::TITLE, self.form.title.clone())
                    .text(form_fields::DESCRIPTION, self.form.description.clone())
                    .file(form_fields::THUMBNAIL, thumbnail),
                |form, image| form.file(form_fields::IMAGES, image),
            );
        let result =
            post_form::<SuccessResponse>(self.transport.as_ref(), paths::POST_NEW, form).await;

        match super::settle(paths::POST_NEW, result) {
            Ok(_) => {
                info!(images = self.form.images.len(), "created post");
                Ok(self.navigation.last_page())
            }
            Err(error) => {
                self.notices.replace(Notice::error(
                    "There was an error, try again. If this persists, refresh the page.",
                ));
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::navigation::MemoryPageStore;
    use crate::application::testing::{RecordedCall, RecordingTransport};
    use crate::domain::posts::Attachment;
    use serde_json::json;

    fn composer(transport: &Arc<RecordingTransport>) -> PostComposer {
        let navigation = NavigationMemory::new(Arc::new(MemoryPageStore::new()));
        navigation.page_loaded("/panel/posts/2");
        navigation.page_loaded("/panel/post/new");
        PostComposer::new(
            Arc::new(PageContext::new("token")),
            transport.clone(),
            navigation,
        )
    }

    #[tokio::test]
    async fn missing_thumbnail_sends_nothing() {
        let transport = Arc::new(RecordingTransport::new());
        let mut composer = composer(&transport);
        composer.form_mut().title = "Spring".into();

        let err = composer.submit().await.expect_err("validation");

        assert!(matches!(err, PanelError::Validation(_)));
        assert!(transport.calls().is_empty());
        assert_eq!(
            composer.notices().visible()[0].text,
            "You need to select a thumbnail."
        );
        assert_eq!(composer.notices().visible().len(), 1);
    }

    #[tokio::test]
    async fn submits_every_field_and_returns_to_last_page() {
        let transport = Arc::new(RecordingTransport::new());
        let mut composer = composer(&transport);
        {
            let form = composer.form_mut();
            form.title = "Spring".into();
            form.description = "Hives are busy".into();
            form.thumbnail = Some(Attachment::new("thumb.jpg", vec![1_u8]));
            form.images = vec![
                Attachment::new("a.png", vec![2_u8]),
                Attachment::new("b.png", vec![3_u8]),
            ];
        }

        let redirect = composer.submit().await.expect("submitted");

        assert_eq!(redirect, Redirect::replace("/panel/posts/2"));
        let calls = transport.calls();
        let RecordedCall::Multipart { path, form } = &calls[0] else {
            panic!("expected multipart submission");
        };
        assert_eq!(path, paths::POST_NEW);
        assert_eq!(form.field(form_fields::SECURITY_TOKEN), Some("token"));
        assert_eq!(form.field(form_fields::TITLE), Some("Spring"));
        assert_eq!(form.field(form_fields::DESCRIPTION), Some("Hives are busy"));
        assert_eq!(form.files_named(form_fields::THUMBNAIL).count(), 1);
        let images: Vec<_> = form
            .files_named(form_fields::IMAGES)
            .map(|a| a.file_name.as_str())
            .collect();
        assert_eq!(images, vec!["a.png", "b.png"]);
    }

    #[tokio::test]
    async fn failure_shows_retry_notice() {
        let transport = Arc::new(RecordingTransport::new().reply(json!({"success": false})));
        let mut composer = composer(&transport);
        composer.form_mut().thumbnail = Some(Attachment::new("thumb.jpg", vec![1_u8]));

        composer.submit().await.expect_err("rejected");

        assert_eq!(
            composer.notices().last().expect("notice").text,
            "There was an error, try again. If this persists, refresh the page."
        );
    }
}
