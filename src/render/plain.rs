//! Streaming output for non-interactive terminals.
//!
//! Timeline entries are turned into plain text as they happen: literal lines
//! are written whole, input glyphs one at a time. When several terminals
//! play at once, every row is prefixed with its terminal's title.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::animator::{LineKind, SessionEvent, SessionId};
use crate::host::{Host, TimelineEntry};
use crate::page::TITLE_ATTR;
use crate::tui::theme::Theme;

/// Longest single sleep while waiting for the next timer, so stop requests are seen promptly.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Writes timeline entries as a plain text stream.
#[derive(Debug)]
pub struct PlainPrinter {
    theme: Option<Theme>,
    prompt: String,
    prefixed: bool,
    /// Row currently being written, if it is not terminated yet
    open: Option<(SessionId, usize)>,
}

impl PlainPrinter {
    /// `theme` of `None` disables ANSI colors.
    pub fn new(theme: Option<Theme>, prompt: &str, prefixed: bool) -> Self {
        Self {
            theme,
            prompt: prompt.to_string(),
            prefixed,
            open: None,
        }
    }

    /// Write whatever `entry` adds to the stream.
    pub fn handle<W: Write>(
        &mut self,
        host: &Host,
        entry: &TimelineEntry,
        out: &mut W,
    ) -> io::Result<()> {
        let id = entry.session;
        match &entry.event {
            SessionEvent::LineStarted { index, kind } => {
                self.close(out)?;
                self.prefix(host, id, out)?;
                match kind {
                    LineKind::Literal => {
                        let text = line_text(host, id, *index);
                        writeln!(out, "{}", self.paint(&text, Theme::output_text))?;
                    }
                    LineKind::Input => {
                        let prompt = self.paint(&self.prompt, Theme::prompt_text);
                        write!(out, "{}", prompt)?;
                        self.open = Some((id, *index));
                    }
                    LineKind::Progress => self.open = Some((id, *index)),
                }
            }
            SessionEvent::GlyphRevealed { index, glyph } => {
                if self.open != Some((id, *index)) {
                    self.close(out)?;
                    self.prefix(host, id, out)?;
                    self.open = Some((id, *index));
                }
                write!(out, "{}", self.paint(glyph, Theme::input_text))?;
            }
            SessionEvent::PlaceholderShown { .. } => {
                let placeholder = host
                    .session(id)
                    .map(|s| s.options().progress_placeholder.clone())
                    .unwrap_or_default();
                write!(out, "{}", self.paint(&placeholder, Theme::placeholder_text))?;
            }
            SessionEvent::LineFinished { index } => {
                if self.open == Some((id, *index)) {
                    writeln!(out)?;
                    self.open = None;
                }
            }
            SessionEvent::Cancelled => {
                if self.open.is_some_and(|(open_id, _)| open_id == id) {
                    writeln!(out)?;
                    self.open = None;
                }
            }
            SessionEvent::Scheduled
            | SessionEvent::CursorInserted
            | SessionEvent::Finished => {}
        }
        out.flush()
    }

    /// Terminate a row left open by an interrupted stream.
    pub fn finish<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.close(out)?;
        out.flush()
    }

    fn close<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.open.take().is_some() {
            writeln!(out)?;
        }
        Ok(())
    }

    fn prefix<W: Write>(&self, host: &Host, id: SessionId, out: &mut W) -> io::Result<()> {
        if !self.prefixed {
            return Ok(());
        }
        let title = host
            .session(id)
            .and_then(|s| host.document().attribute(s.container(), TITLE_ATTR))
            .map(str::to_string)
            .unwrap_or_else(|| format!("t{}", id.get()));
        let label = format!("[{}] ", title);
        write!(out, "{}", self.paint(&label, Theme::hint_text))
    }

    fn paint(&self, text: &str, style: fn(&Theme, &str) -> String) -> String {
        match &self.theme {
            Some(theme) => style(theme, text),
            None => text.to_string(),
        }
    }
}

fn line_text(host: &Host, id: SessionId, index: usize) -> String {
    host.session(id)
        .and_then(|s| s.lines().get(index))
        .map(|l| l.text.clone())
        .unwrap_or_default()
}

/// Play `host` in real time, streaming to `out` until every session ends or `stop` is raised.
///
/// Returns true when playback was interrupted.
pub fn stream<W: Write>(
    host: &mut Host,
    printer: &mut PlainPrinter,
    speed: f64,
    stop: &AtomicBool,
    out: &mut W,
) -> io::Result<bool> {
    let speed = speed.max(0.01);
    let started = Instant::now();
    for entry in host.drain_events() {
        printer.handle(host, &entry, out)?;
    }

    while let Some(deadline) = host.next_deadline() {
        let wall_target = deadline.div_f64(speed);
        loop {
            if stop.load(Ordering::SeqCst) {
                host.navigate_away();
                for entry in host.drain_events() {
                    printer.handle(host, &entry, out)?;
                }
                printer.finish(out)?;
                return Ok(true);
            }
            let elapsed = started.elapsed();
            if elapsed >= wall_target {
                break;
            }
            thread::sleep((wall_target - elapsed).min(POLL_INTERVAL));
        }
        host.advance_to(deadline);
        for entry in host.drain_events() {
            printer.handle(host, &entry, out)?;
        }
    }
    printer.finish(out)?;
    Ok(false)
}

/// Run `host` to completion on the virtual clock and write the stream at once.
pub fn dump<W: Write>(host: &mut Host, printer: &mut PlainPrinter, out: &mut W) -> io::Result<()> {
    host.run_until_idle();
    for entry in host.drain_events() {
        printer.handle(host, &entry, out)?;
    }
    printer.finish(out)
}
