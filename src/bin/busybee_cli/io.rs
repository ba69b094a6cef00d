#![deny(clippy::all, clippy::pedantic)]

use std::fs;
use std::path::Path;

use busybee::domain::posts::Attachment;

use crate::client::CliError;

/// Load a file selected for upload.
pub fn read_attachment(path: &Path) -> Result<Attachment, CliError> {
    let data = fs::read(path).map_err(|source| CliError::InputFile {
        path: path.display().to_string(),
        source,
    })?;
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("upload.bin")
        .to_string();
    Ok(Attachment::new(name, data))
}
