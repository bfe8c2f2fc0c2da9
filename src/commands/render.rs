//! `render` and `timeline` subcommand handlers

use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use typecast::cli::TimingArgs;
use typecast::render::render_text;

use super::load_host;

/// Print every terminal as it looks at `at` milliseconds (or when finished).
pub fn handle_render(page: &Path, at: Option<u64>, timing: &TimingArgs) -> Result<()> {
    let (mut host, config) = load_host(page, timing)?;
    host.attach_all();
    match at {
        Some(ms) => host.advance_to(Duration::from_millis(ms)),
        None => host.run_until_idle(),
    }
    print!("{}", render_text(&host, &config.player.prompt));
    Ok(())
}

/// Print the full timeline of a page on the virtual clock.
pub fn handle_timeline(page: &Path, timing: &TimingArgs) -> Result<()> {
    let (mut host, _config) = load_host(page, timing)?;
    host.attach_all();
    host.run_until_idle();
    for entry in host.timeline() {
        println!("{}", entry);
    }
    Ok(())
}
