use crate::action::Intent;
use crate::ui::app::App;
use crate::ui::signup::{Focus, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Apply `key` to the app. Returns the intent to dispatch, if any.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return None;
    }

    if app.screen() == Screen::SignedIn {
        return is_ctrl_char(key, 'o').then_some(Intent::SignOut);
    }

    if is_ctrl_char(key, 's') {
        return Some(app.submit());
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Enter if app.focus() == Focus::Submit => return Some(app.submit()),
        KeyCode::Enter | KeyCode::Char(' ') if app.focus() == Focus::Terms => app.toggle_terms(),
        KeyCode::Enter => app.focus_next(),
        KeyCode::Backspace => app.edit_focused(|value| {
            value.pop();
        }),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_focused(|value| value.push(ch));
        }
        _ => {}
    }
    None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, Outcome};
    use serde_json::json;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn typed_characters_land_in_focused_field() {
        let mut app = App::new();
        for ch in "Jane".chars() {
            assert!(handle_key(&mut app, press(KeyCode::Char(ch))).is_none());
        }
        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.store().form.first_name, "Jan");
    }

    #[test]
    fn ctrl_s_submits_from_any_field() {
        let mut app = App::new();
        let intent = handle_key(&mut app, ctrl('s'));
        assert!(matches!(intent, Some(Intent::CreateAccount(_))));
    }

    #[test]
    fn enter_on_submit_row_submits() {
        let mut app = App::new();
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.focus(), Focus::Submit);

        let intent = handle_key(&mut app, press(KeyCode::Enter));
        assert!(matches!(intent, Some(Intent::CreateAccount(_))));
    }

    #[test]
    fn space_toggles_terms() {
        let mut app = App::new();
        while app.focus() != Focus::Terms {
            handle_key(&mut app, press(KeyCode::Tab));
        }
        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert!(app.store().form.terms);
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = App::new();
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn signed_in_screen_only_signs_out() {
        let mut app = App::new();
        app.on_action(
            Action::Outcome(Outcome::CurrentUserSet {
                data: json!({"userUid": "u1"}),
            }),
            true,
        );

        assert!(handle_key(&mut app, press(KeyCode::Char('x'))).is_none());
        assert_eq!(handle_key(&mut app, ctrl('o')), Some(Intent::SignOut));
    }
}
