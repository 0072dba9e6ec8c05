use crate::ui::mvi::Reducer;

use super::intent::SignUpIntent;
use super::state::{Screen, SignUpState};

pub struct SignUpReducer;

impl Reducer for SignUpReducer {
    type State = SignUpState;
    type Intent = SignUpIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SignUpIntent::FocusNext => SignUpState {
                focus: state.focus.next(),
                ..state
            },
            SignUpIntent::FocusPrev => SignUpState {
                focus: state.focus.prev(),
                ..state
            },
            SignUpIntent::SessionChanged { signed_in: true } => SignUpState {
                screen: Screen::SignedIn,
                ..state
            },
            // Back to a fresh form.
            SignUpIntent::SessionChanged { signed_in: false } => match state.screen {
                Screen::SignedIn => SignUpState::default(),
                Screen::SignUp => state,
            },
        }
    }
}
