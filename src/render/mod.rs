//! Non-interactive rendering of terminal containers.
//!
//! - `snapshot`: the visible rows of a container at one instant
//! - `plain`: streaming text output driven by the host timeline

pub mod plain;
mod snapshot;

pub use plain::PlainPrinter;
pub use snapshot::{Row, RowKind, TerminalSnapshot};

use crate::host::Host;

/// Text of every terminal in `host`, separated by blank lines.
///
/// Titled terminals get a `[title]` header row.
pub fn render_text(host: &Host, prompt: &str) -> String {
    let mut blocks = Vec::new();
    for container in host.containers() {
        let snapshot = TerminalSnapshot::capture(host.document(), container);
        let mut block = String::new();
        if let Some(title) = &snapshot.title {
            block.push_str(&format!("[{}]\n", title));
        }
        for line in snapshot.lines(prompt) {
            block.push_str(&line);
            block.push('\n');
        }
        blocks.push(block);
    }
    blocks.join("\n")
}
