#![deny(clippy::all, clippy::pedantic)]

use busybee::application::notice::NoticeBoard;
use serde::Serialize;

use crate::client::CliError;

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let out = serde_json::to_string_pretty(value).map_err(|e| CliError::Render(e.to_string()))?;
    println!("{out}");
    Ok(())
}

/// Notices go to stderr so stdout stays machine-readable.
pub fn print_notices(board: &mut NoticeBoard) {
    for notice in board.drain() {
        eprintln!("[{}] {}", notice.kind.as_str(), notice.text);
    }
}
