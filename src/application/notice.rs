//! Transient notices shown to the person using the panel.

use std::time::Duration;

use uuid::Uuid;

const DEFAULT_NOTICE_TTL: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Info => "info",
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub text: String,
    pub ttl: Duration,
}

impl Notice {
    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
            ttl: DEFAULT_NOTICE_TTL,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, text)
    }
}

/// Notices currently on screen, oldest first.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    visible: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) {
        self.visible.push(notice);
    }

    pub fn dismiss_all(&mut self) {
        self.visible.clear();
    }

    /// Clear the board and show a single outcome notice.
    pub fn replace(&mut self, notice: Notice) {
        self.dismiss_all();
        self.push(notice);
    }

    pub fn visible(&self) -> &[Notice] {
        &self.visible
    }

    pub fn last(&self) -> Option<&Notice> {
        self.visible.last()
    }

    /// Hand every notice to the host for rendering.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.visible)
    }
}
