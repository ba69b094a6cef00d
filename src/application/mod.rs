//! Controllers and the seams they talk through.

pub mod admin;
pub mod context;
pub mod error;
pub mod navigation;
pub mod notice;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;
