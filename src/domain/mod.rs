//! Domain layer types and invariants.

pub mod posts;
pub mod time_ago;
pub mod users;
