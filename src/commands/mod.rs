//! Subcommand handlers

pub mod config;
pub mod play;
pub mod render;

use std::path::Path;

use anyhow::Result;

use typecast::cli::TimingArgs;
use typecast::{Config, Host, Page};

/// Load config and page and build a host with the effective timing.
pub fn load_host(page: &Path, timing: &TimingArgs) -> Result<(Host, Config)> {
    let config = Config::load()?;
    let page = Page::load(page)?;
    let options = config.animator.clone().with_overrides(
        timing.start_delay,
        timing.char_delay,
        timing.progress_delay,
    );
    Ok((Host::new(page.to_document(), options), config))
}
