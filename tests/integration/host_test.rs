//! Integration tests for the host and its sessions

use std::time::Duration;

use typecast::animator::{SessionEvent, CURSOR_CLASS, RENDERED_CLASS};
use typecast::host::INIT_ATTR;
use typecast::render::render_text;
use typecast::{AnimatorError, AnimatorOptions, Host, Page, SessionState};

use crate::helpers::fixtures_dir;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn fast() -> AnimatorOptions {
    AnimatorOptions::default().with_overrides(Some(0), Some(10), Some(50))
}

fn host_from_toml(toml: &str) -> Host {
    let page = Page::from_toml(toml).unwrap();
    Host::new(page.to_document(), fast())
}

fn glyphs(host: &Host) -> Vec<(u64, String)> {
    host.timeline()
        .iter()
        .filter_map(|entry| match &entry.event {
            SessionEvent::GlyphRevealed { glyph, .. } => {
                Some((entry.at.as_millis() as u64, glyph.clone()))
            }
            _ => None,
        })
        .collect()
}

#[test]
fn combining_marks_are_typed_with_their_base() {
    let mut host = host_from_toml(
        "[[terminal]]\n[[terminal.line]]\nty = \"input\"\ntext = \"e\\u0301x\"\n",
    );
    host.attach_all();
    host.run_until_idle();

    assert_eq!(
        glyphs(&host),
        vec![(10, "e\u{301}".to_string()), (20, "x".to_string())]
    );
}

#[test]
fn json_fixture_plays_to_completion() {
    let page = Page::load(fixtures_dir().join("multi.json")).unwrap();
    let mut host = Host::new(page.to_document(), fast());
    let ids = host.attach_all();
    assert_eq!(ids.len(), 2);

    host.run_until_idle();

    assert!(host.all_finished());
    let typed: String = glyphs(&host).into_iter().map(|(_, g)| g).collect();
    assert_eq!(typed, "echo héllo 👋");
    // 12 glyphs, then the advance one char delay later
    assert_eq!(host.now(), ms(130));
}

#[test]
fn terminals_animate_independently() {
    let mut host = host_from_toml(
        r#"
[[terminal]]
[[terminal.line]]
ty = "input"
text = "ab"

[[terminal]]
[[terminal.line]]
ty = "progress"
[[terminal.line]]
text = "ok"
"#,
    );
    let ids = host.attach_all();
    host.run_until_idle();

    let finished_at = |id| {
        host.timeline()
            .iter()
            .find(|e| e.session == id && e.event == SessionEvent::Finished)
            .map(|e| e.at)
    };
    assert_eq!(finished_at(ids[0]), Some(ms(30)));
    assert_eq!(finished_at(ids[1]), Some(ms(50)));
    assert_eq!(render_text(&host, "$ "), "$ ab\n█\n\n[Processing...]\nok\n█\n");
}

#[test]
fn stop_freezes_partial_output() {
    let mut host = host_from_toml(
        "[[terminal]]\n[[terminal.line]]\nty = \"input\"\ntext = \"hello\"\n",
    );
    let id = host.attach_all()[0];
    host.advance_to(ms(25));
    assert_eq!(render_text(&host, "$ "), "$ he\n█\n");

    assert!(host.stop(id).unwrap());
    assert!(host.is_idle());
    host.advance(ms(1_000));

    assert_eq!(render_text(&host, "$ "), "$ he\n█\n");
    assert_eq!(host.session(id).unwrap().state(), SessionState::Cancelled);
    let container = host.containers()[0];
    assert_eq!(host.document().attribute(container, INIT_ATTR), Some("false"));
    // Stopping twice is a no-op
    assert!(!host.stop(id).unwrap());
}

#[test]
fn double_start_is_rejected() {
    let mut host = host_from_toml("[[terminal]]\n[[terminal.line]]\ntext = \"x\"\n");
    let container = host.containers()[0];
    host.start(container).unwrap();

    assert_eq!(
        host.start(container),
        Err(AnimatorError::AlreadyInitialized { container })
    );
    assert!(host.attach_all().is_empty());
    assert_eq!(host.sessions().count(), 1);
}

#[test]
fn restart_replays_from_scratch() {
    let mut host = host_from_toml(
        "[[terminal]]\n[[terminal.line]]\nty = \"input\"\ntext = \"ab\"\n",
    );
    let container = host.containers()[0];
    let first = host.start(container).unwrap();
    host.advance_to(ms(15));

    let second = host.restart(container).unwrap();
    assert_ne!(first, second);
    assert_eq!(render_text(&host, "$ "), "");

    host.run_until_idle();
    assert_eq!(render_text(&host, "$ "), "$ ab\n█\n");
    let cursors = host
        .document()
        .query_class(container, CURSOR_CLASS)
        .len();
    assert_eq!(cursors, 1);
}

#[test]
fn teardown_mid_animation_stops_cleanly() {
    let mut host = host_from_toml(
        "[[terminal]]\n[[terminal.line]]\nty = \"input\"\ntext = \"abc\"\n",
    );
    let container = host.containers()[0];
    let id = host.start(container).unwrap();
    host.advance_to(ms(10));

    assert!(host.teardown(container));
    host.run_until_idle();

    assert!(host.containers().is_empty());
    assert_eq!(host.session(id).unwrap().state(), SessionState::Cancelled);
    assert_eq!(host.start(container), Err(AnimatorError::NotAnElement(container)));
}

#[test]
fn navigate_away_silences_everything() {
    let mut host = host_from_toml(
        r#"
[[terminal]]
[[terminal.line]]
ty = "progress"
[[terminal]]
[[terminal.line]]
ty = "input"
text = "slow"
"#,
    );
    host.attach_all();
    host.advance_to(ms(5));
    host.drain_events();

    host.navigate_away();
    host.advance(ms(10_000));

    let events = host.drain_events();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.event == SessionEvent::Cancelled));
    assert!(host.is_idle());
    assert!(host.all_finished());
}

#[test]
fn finished_lines_carry_rendered_class() {
    let mut host = host_from_toml(
        "[[terminal]]\n[[terminal.line]]\nty = \"input\"\ntext = \"a\"\n[[terminal.line]]\ntext = \"b\"\n",
    );
    let id = host.attach_all()[0];
    host.run_until_idle();

    let session = host.session(id).unwrap();
    assert_eq!(session.state(), SessionState::Terminal);
    for line in session.lines() {
        assert!(host.document().has_class(line.target, RENDERED_CLASS));
    }
}
