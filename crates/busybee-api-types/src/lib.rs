//! Shared request and response types for the Busy Bees panel backend.
//!
//! Field names mirror the backend's JSON decoding exactly, so renames here are
//! part of the wire contract.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Endpoint paths, relative to the site root.
pub mod paths {
    pub const USER_UPDATE: &str = "panel/user/update";
    pub const USER_NEW: &str = "panel/user/new";
    pub const USER_DELETE: &str = "panel/user/delete";
    pub const SETTINGS_UPDATE: &str = "panel/settings/update";
    pub const POST_NEW: &str = "panel/post/new";
    pub const POST_UPDATE: &str = "panel/post/update";
    pub const POST_DELETE: &str = "panel/post/delete";
    pub const COMMENT_NEW: &str = "panel/post/comment";
    pub const COMMENT_DELETE: &str = "panel/post/comment/delete";
}

/// Multipart field names of the post composer form.
pub mod form_fields {
    pub const SECURITY_TOKEN: &str = "CsrfSecret";
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const THUMBNAIL: &str = "thumbnail";
    pub const IMAGES: &str = "images";
}

pub type UserId = i64;
pub type PostId = i64;
pub type CommentId = String;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown privilege level {0}")]
pub struct InvalidPrivileges(pub u8);

/// Account privilege level as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Privileges {
    #[default]
    Parent,
    Moderator,
    Admin,
}

impl Privileges {
    pub fn as_u8(self) -> u8 {
        match self {
            Privileges::Parent => 1,
            Privileges::Moderator => 2,
            Privileges::Admin => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Privileges::Parent => "Parent",
            Privileges::Moderator => "Moderator",
            Privileges::Admin => "Admin",
        }
    }
}

impl TryFrom<u8> for Privileges {
    type Error = InvalidPrivileges;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Privileges::Parent),
            2 => Ok(Privileges::Moderator),
            3 => Ok(Privileges::Admin),
            other => Err(InvalidPrivileges(other)),
        }
    }
}

impl From<Privileges> for u8 {
    fn from(value: Privileges) -> Self {
        value.as_u8()
    }
}

impl fmt::Display for Privileges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserUpdateRequest {
    pub csrf_secret: String,
    #[serde(rename = "ID")]
    pub id: UserId,
    pub email: String,
    pub password: String,
    pub fname: String,
    pub lname: String,
    pub privileges: Privileges,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserCreateRequest {
    pub csrf_secret: String,
    pub email: String,
    pub password: String,
    pub fname: String,
    pub lname: String,
    pub privileges: Privileges,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserDeleteRequest {
    pub csrf_secret: String,
    #[serde(rename = "ID")]
    pub id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SettingsUpdateRequest {
    pub csrf_secret: String,
    pub email: String,
    pub password: String,
    pub fname: String,
    pub lname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PostUpdateRequest {
    #[serde(rename = "ID")]
    pub id: PostId,
    pub title: String,
    pub description: String,
    pub csrf_secret: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PostDeleteRequest {
    #[serde(rename = "ID")]
    pub id: PostId,
    pub csrf_secret: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommentCreateRequest {
    #[serde(rename = "ID")]
    pub id: PostId,
    pub comment: String,
    pub csrf_secret: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommentDeleteRequest {
    #[serde(rename = "PostID")]
    pub post_id: PostId,
    #[serde(rename = "CommentID")]
    pub comment_id: CommentId,
    pub csrf_secret: String,
}

/// Flat success flag returned by every mutating endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Success flag plus the identifier of the created record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub id: Option<T>,
}
