//! Key dispatch for the login and game screens.

use crate::accounts::CredentialStore;
use crate::high_score::HighScoreStore;
use crate::session::GameSession;
use crate::ui::auth_screen::AuthScreen;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of handling an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the loop normally.
    Continue,
    /// Leave the program.
    Quit,
    /// Credentials accepted; start the game as this user.
    LoggedIn(String),
}

/// Releases and repeats are ignored (Windows reports both).
fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

/// Handle a key on the login / registration screen.
pub fn handle_auth_input(
    key: KeyEvent,
    screen: &mut AuthScreen,
    store: &mut CredentialStore,
) -> InputResult {
    if !is_press(&key) {
        return InputResult::Continue;
    }
    if is_ctrl(&key, 'c') {
        return InputResult::Quit;
    }

    // Modal blocks everything else; any key dismisses it
    if screen.modal.is_some() {
        screen.dismiss_modal();
        return InputResult::Continue;
    }

    if is_ctrl(&key, 'r') {
        screen.toggle_mode();
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Esc => return InputResult::Quit,
        KeyCode::F(2) => screen.toggle_mode(),
        KeyCode::Tab | KeyCode::Down => screen.focus_next(),
        KeyCode::BackTab | KeyCode::Up => screen.focus_prev(),
        KeyCode::Enter => {
            if let Some(username) = screen.submit(store) {
                return InputResult::LoggedIn(username);
            }
        }
        KeyCode::Backspace => screen.handle_backspace(),
        KeyCode::Char(c) => screen.handle_char_input(c),
        _ => {}
    }
    InputResult::Continue
}

/// Handle a key on the game screen. Space is the only game input.
pub fn handle_game_input<S: HighScoreStore>(
    key: KeyEvent,
    session: &mut GameSession<S>,
) -> InputResult {
    if !is_press(&key) {
        return InputResult::Continue;
    }
    if is_ctrl(&key, 'c') {
        return InputResult::Quit;
    }

    match key.code {
        KeyCode::Char(' ') => {
            session.primary_action();
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return InputResult::Quit,
        _ => {}
    }
    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::Phase;
    use crate::high_score::MemoryHighScore;
    use crate::ui::auth_screen::{AuthMode, Field};
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    fn type_text(text: &str, screen: &mut AuthScreen, store: &mut CredentialStore) {
        for c in text.chars() {
            handle_auth_input(press(KeyCode::Char(c)), screen, store);
        }
    }

    fn session() -> GameSession<MemoryHighScore> {
        GameSession::new(GameConfig::default(), MemoryHighScore::default(), Some(1), None)
    }

    #[test]
    fn test_auth_register_and_login_by_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CredentialStore::load(dir.path().join("users.txt"));
        let mut screen = AuthScreen::new();

        handle_auth_input(press(KeyCode::F(2)), &mut screen, &mut store);
        assert_eq!(screen.mode, AuthMode::Register);
        type_text("alice", &mut screen, &mut store);
        handle_auth_input(press(KeyCode::Tab), &mut screen, &mut store);
        type_text("pw", &mut screen, &mut store);
        handle_auth_input(press(KeyCode::Down), &mut screen, &mut store);
        type_text("pw", &mut screen, &mut store);
        assert_eq!(
            handle_auth_input(press(KeyCode::Enter), &mut screen, &mut store),
            InputResult::Continue
        );
        assert!(store.contains("alice"));

        // Any key closes the confirmation without typing into the form
        handle_auth_input(press(KeyCode::Char('x')), &mut screen, &mut store);
        assert!(screen.modal.is_none());
        assert!(screen.username.is_empty());

        handle_auth_input(ctrl('r'), &mut screen, &mut store);
        assert_eq!(screen.mode, AuthMode::Login);
        type_text("alice", &mut screen, &mut store);
        handle_auth_input(press(KeyCode::Tab), &mut screen, &mut store);
        type_text("pw", &mut screen, &mut store);
        assert_eq!(
            handle_auth_input(press(KeyCode::Enter), &mut screen, &mut store),
            InputResult::LoggedIn("alice".to_string())
        );
    }

    #[test]
    fn test_auth_navigation_and_editing() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CredentialStore::load(dir.path().join("users.txt"));
        let mut screen = AuthScreen::new();

        type_text("bobx", &mut screen, &mut store);
        handle_auth_input(press(KeyCode::Backspace), &mut screen, &mut store);
        assert_eq!(screen.username, "bob");

        handle_auth_input(press(KeyCode::Up), &mut screen, &mut store);
        assert_eq!(screen.focus, Field::Password);
        handle_auth_input(press(KeyCode::BackTab), &mut screen, &mut store);
        assert_eq!(screen.focus, Field::Username);
    }

    #[test]
    fn test_auth_quit_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CredentialStore::load(dir.path().join("users.txt"));
        let mut screen = AuthScreen::new();
        assert_eq!(
            handle_auth_input(press(KeyCode::Esc), &mut screen, &mut store),
            InputResult::Quit
        );
        assert_eq!(
            handle_auth_input(ctrl('c'), &mut screen, &mut store),
            InputResult::Quit
        );
    }

    #[test]
    fn test_auth_ignores_key_release() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CredentialStore::load(dir.path().join("users.txt"));
        let mut screen = AuthScreen::new();
        handle_auth_input(release(KeyCode::Char('a')), &mut screen, &mut store);
        assert!(screen.username.is_empty());
    }

    #[test]
    fn test_space_drives_phases() {
        let mut session = session();
        let space = press(KeyCode::Char(' '));

        assert_eq!(handle_game_input(space, &mut session), InputResult::Continue);
        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(session.game().bird.velocity, 0.0);

        handle_game_input(space, &mut session);
        assert!(session.game().bird.velocity < 0.0);
    }

    #[test]
    fn test_other_keys_do_not_start_game() {
        let mut session = session();
        for code in [KeyCode::Enter, KeyCode::Up, KeyCode::Char('w')] {
            handle_game_input(press(code), &mut session);
        }
        handle_game_input(release(KeyCode::Char(' ')), &mut session);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_game_quit_keys() {
        let mut session = session();
        for key in [press(KeyCode::Esc), press(KeyCode::Char('q')), ctrl('c')] {
            assert_eq!(handle_game_input(key, &mut session), InputResult::Quit);
        }
    }
}
