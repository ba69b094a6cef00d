//! Posts, their attachments, inline-editable text and comment blocks.

use bytes::Bytes;
use busybee_api_types::CommentId;

use super::time_ago::time_ago;

/// A file selected in the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl Attachment {
    /// Build an attachment, guessing its content type from the file name.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            content_type,
            bytes: bytes.into(),
        }
    }
}

/// Fields of the new-post form.
#[derive(Debug, Clone, Default)]
pub struct PostForm {
    pub title: String,
    pub description: String,
    pub thumbnail: Option<Attachment>,
    pub images: Vec<Attachment>,
}

/// Key codes that would insert a line break into an editable region.
pub fn is_suppressed_key(code: u32) -> bool {
    matches!(code, 10 | 13)
}

/// Single-line editable region that remembers the last committed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableText {
    content: String,
    baseline: String,
}

impl EditableText {
    pub fn new(initial: impl Into<String>) -> Self {
        let content = strip_line_breaks(&initial.into());
        Self {
            baseline: content.clone(),
            content,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn committed(&self) -> &str {
        &self.baseline
    }

    /// Replace the content as typed; line breaks never make it in.
    pub fn set_content(&mut self, text: &str) {
        self.content = strip_line_breaks(text);
    }

    pub fn is_dirty(&self) -> bool {
        self.content != self.baseline
    }

    /// Move the baseline to the current content. Returns whether it moved.
    pub fn commit(&mut self) -> bool {
        if !self.is_dirty() {
            return false;
        }
        self.baseline.clone_from(&self.content);
        true
    }
}

/// Drop `\r` and `\n`; typed text never carries line breaks.
pub fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}

/// Snapshot of a post detail page at load time.
#[derive(Debug, Clone, Default)]
pub struct PostView {
    pub title: String,
    pub description: String,
    pub comments: Vec<CommentBlock>,
}

/// One rendered comment in a post's thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    pub id: CommentId,
    pub author: String,
    pub body: String,
    /// Unix seconds.
    pub posted_at: i64,
}

impl CommentBlock {
    pub fn age(&self, now: i64) -> String {
        time_ago(now, self.posted_at)
    }
}
