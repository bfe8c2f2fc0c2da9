//! Full-screen player.
//!
//! Drives the host from the wall clock, redraws every terminal window and
//! reacts to keys. Quitting navigates the host away, which stops every
//! session before the terminal is restored.

use std::time::Duration;

use anyhow::Result;
use crossterm::event;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use tracing::debug;

use crate::host::Host;
use crate::render::TerminalSnapshot;

use super::input::handle_event;
use super::state::{InputResult, PlayerState};
use super::theme::Theme;
use super::view::TerminalView;

/// Upper bound on how long the loop waits for input between redraws.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// How a play session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// Every terminal finished
    Finished,
    /// The user quit early
    Interrupted,
}

/// Player settings taken from config and command line.
#[derive(Debug, Clone)]
pub struct PlayerOptions {
    pub theme: Theme,
    pub prompt: String,
    pub speed: f64,
    pub exit_on_finish: bool,
}

/// Run the player on the real terminal.
#[cfg(not(tarpaulin_include))]
pub fn play(host: &mut Host, options: &PlayerOptions) -> Result<PlaybackResult> {
    let mut terminal = ratatui::init();
    let result = run(&mut terminal, host, options);
    ratatui::restore();
    result
}

#[cfg(not(tarpaulin_include))]
fn run(
    terminal: &mut DefaultTerminal,
    host: &mut Host,
    options: &PlayerOptions,
) -> Result<PlaybackResult> {
    let mut state = PlayerState::new(options.speed);
    // The player draws from the document, not the timeline
    host.set_recording(false);
    host.attach_all();

    loop {
        host.advance_to(state.virtual_now());
        terminal.draw(|frame| draw(frame, host, &state, options))?;
        state.needs_render = false;

        if host.all_finished() && options.exit_on_finish {
            return Ok(PlaybackResult::Finished);
        }

        let timeout = host
            .next_deadline()
            .and_then(|deadline| state.wall_until(deadline))
            .map_or(FRAME_INTERVAL, |wait| wait.min(FRAME_INTERVAL));

        if event::poll(timeout)? {
            match handle_event(event::read()?, &mut state) {
                InputResult::Continue => {}
                InputResult::Restart => replay(host, &mut state),
                InputResult::Quit => {
                    let finished = host.all_finished();
                    host.navigate_away();
                    return Ok(if finished {
                        PlaybackResult::Finished
                    } else {
                        PlaybackResult::Interrupted
                    });
                }
            }
        }
    }
}

/// Restart every terminal and re-anchor the player clock on the host's.
fn replay(host: &mut Host, state: &mut PlayerState) {
    for container in host.containers() {
        if let Err(e) = host.restart(container) {
            debug!("restart skipped: {}", e);
        }
    }
    state.reset_to(host.now());
    debug!(at = ?host.now(), "replaying from the start");
}

/// Draw every terminal stacked vertically with a status footer.
pub fn draw(frame: &mut Frame, host: &Host, state: &PlayerState, options: &PlayerOptions) {
    let snapshots: Vec<TerminalSnapshot> = host
        .containers()
        .into_iter()
        .map(|c| TerminalSnapshot::capture(host.document(), c))
        .collect();

    let width = frame.area().width;
    let mut constraints: Vec<Constraint> = snapshots
        .iter()
        .map(|s| {
            Constraint::Length(TerminalView::new(s, &options.theme, &options.prompt).height(width))
        })
        .collect();
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));

    let areas = Layout::vertical(constraints).split(frame.area());
    for (snapshot, area) in snapshots.iter().zip(areas.iter()) {
        frame.render_widget(
            TerminalView::new(snapshot, &options.theme, &options.prompt),
            *area,
        );
    }
    if let Some(footer) = areas.last() {
        render_footer(frame, *footer, host, state, &options.theme);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, host: &Host, state: &PlayerState, theme: &Theme) {
    let status = if host.all_finished() {
        "finished"
    } else if state.paused {
        "paused"
    } else {
        "playing"
    };
    let text = format!(
        "{} | {:.1}x | space: pause | +/-: speed | r: replay | q: quit",
        status, state.speed
    );
    let footer = Paragraph::new(Line::from(Span::styled(text, theme.hint_style())));
    frame.render_widget(footer, area);
}
