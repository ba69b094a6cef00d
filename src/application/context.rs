use busybee_api_types::PostId;

use super::error::PanelError;

pub const DEFAULT_TITLE_PREFIX: &str = "BBB";

/// Values the hosting page provides to every controller.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub security_token: String,
    pub post_id: Option<PostId>,
    pub user: DisplayName,
    pub title_prefix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayName {
    pub first_name: String,
    pub last_name: String,
}

impl DisplayName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

impl PageContext {
    pub fn new(security_token: impl Into<String>) -> Self {
        Self {
            security_token: security_token.into(),
            post_id: None,
            user: DisplayName::default(),
            title_prefix: DEFAULT_TITLE_PREFIX.to_string(),
        }
    }

    pub fn with_post(mut self, post_id: PostId) -> Self {
        self.post_id = Some(post_id);
        self
    }

    pub fn with_user(mut self, user: DisplayName) -> Self {
        self.user = user;
        self
    }

    pub fn with_title_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.title_prefix = prefix.into();
        self
    }

    pub fn require_post_id(&self) -> Result<PostId, PanelError> {
        self.post_id.ok_or(PanelError::MissingContext("post id"))
    }

    pub fn document_title(&self, title: &str) -> String {
        format!("{} | {}", self.title_prefix, title)
    }
}
