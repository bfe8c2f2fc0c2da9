//! `play` subcommand handler

use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use typecast::cli::TimingArgs;
use typecast::render::plain::{self, PlainPrinter};
use typecast::tui::{self, PlaybackResult, PlayerOptions, Theme};

use super::load_host;

/// Play a page, full-screen on a TTY and as a plain stream otherwise.
#[cfg(not(tarpaulin_include))]
pub fn handle_play(
    page: &Path,
    force_plain: bool,
    exit_on_finish: bool,
    speed: Option<f64>,
    timing: &TimingArgs,
) -> Result<()> {
    let (mut host, config) = load_host(page, timing)?;
    let theme = Theme::from_name(&config.player.theme).unwrap_or_else(|| {
        tracing::warn!("unknown theme '{}', using default", config.player.theme);
        Theme::default()
    });
    let speed = speed.unwrap_or(config.player.speed);
    let tty = atty::is(atty::Stream::Stdout);

    if force_plain || !tty {
        host.attach_all();
        let stop = Arc::new(AtomicBool::new(false));
        let handler_flag = Arc::clone(&stop);
        ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst))
            .context("Failed to install Ctrl-C handler")?;

        let color = tty && std::env::var_os("NO_COLOR").is_none();
        let prefixed = host.containers().len() > 1;
        let mut printer = PlainPrinter::new(color.then_some(theme), &config.player.prompt, prefixed);
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if plain::stream(&mut host, &mut printer, speed, &stop, &mut out)? {
            tracing::debug!("plain playback interrupted");
        }
        return Ok(());
    }

    let options = PlayerOptions {
        theme,
        prompt: config.player.prompt.clone(),
        speed,
        exit_on_finish,
    };
    match tui::play(&mut host, &options)? {
        PlaybackResult::Finished => {}
        PlaybackResult::Interrupted => tracing::debug!("player interrupted"),
    }
    Ok(())
}
