#![deny(clippy::all, clippy::pedantic)]

use busybee::application::navigation::NavigationMemory;
use serde_json::json;

use crate::args::NavCmd;
use crate::client::CliError;
use crate::print::print_json;

pub fn handle(memory: &NavigationMemory, cmd: NavCmd) -> Result<(), CliError> {
    match cmd {
        NavCmd::Visit { path } => {
            let visit = memory.page_loaded(&path);
            print_json(&json!({
                "path": path,
                "detail": memory.is_detail_view(&path),
                "back": visit.back().path,
            }))
        }
        NavCmd::Back => print_json(&json!({ "redirect": memory.last_page().path })),
    }
}
