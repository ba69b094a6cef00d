#![deny(clippy::all, clippy::pedantic)]

pub mod comments;
pub mod navigation;
pub mod posts;
pub mod settings;
pub mod time;
pub mod users;
