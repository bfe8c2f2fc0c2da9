//! Keyboard input handling for the player.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{InputResult, PlayerState};

/// Handle any input event.
pub fn handle_event(event: Event, state: &mut PlayerState) -> InputResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(key, state),
        Event::Resize(_, _) => {
            state.needs_render = true;
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, etc.
    }
}

/// Handle a keyboard event.
pub fn handle_key_event(key: KeyEvent, state: &mut PlayerState) -> InputResult {
    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Playback controls ===
        KeyCode::Char(' ') => {
            state.toggle_pause();
            InputResult::Continue
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            state.speed_up();
            InputResult::Continue
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            state.speed_down();
            InputResult::Continue
        }
        KeyCode::Char('r') => InputResult::Restart,

        _ => InputResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        let mut state = PlayerState::new(1.0);
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &mut state), InputResult::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Esc), &mut state), InputResult::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, &mut state), InputResult::Quit);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('c')), &mut state),
            InputResult::Continue
        );
    }

    #[test]
    fn space_toggles_pause() {
        let mut state = PlayerState::new(1.0);
        handle_key_event(key(KeyCode::Char(' ')), &mut state);
        assert!(state.paused);
        handle_key_event(key(KeyCode::Char(' ')), &mut state);
        assert!(!state.paused);
    }

    #[test]
    fn plus_and_minus_change_speed() {
        let mut state = PlayerState::new(1.0);
        handle_key_event(key(KeyCode::Char('+')), &mut state);
        assert_eq!(state.speed, 1.5);
        handle_key_event(key(KeyCode::Char('-')), &mut state);
        assert!((state.speed - 1.0).abs() < 1e-9);
    }

    #[test]
    fn r_requests_restart() {
        let mut state = PlayerState::new(1.0);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('r')), &mut state),
            InputResult::Restart
        );
    }

    #[test]
    fn resize_requests_render() {
        let mut state = PlayerState::new(1.0);
        state.needs_render = false;
        assert_eq!(handle_event(Event::Resize(80, 24), &mut state), InputResult::Continue);
        assert!(state.needs_render);
    }
}
