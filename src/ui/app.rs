use crate::action::{Action, Intent};
use crate::ui::mvi::Reducer;
use crate::ui::signup::{Focus, Screen, SignUpIntent, SignUpReducer, SignUpState};
use crate::ui::store::{FormField, StoreIntent, StoreReducer, UserStore};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Global store (MVI pattern).
    store: UserStore,
    /// Sign-up screen state (MVI pattern).
    signup: SignUpState,
    /// Coordinator intents not yet settled, shown as a busy marker.
    pending: usize,
    /// Whether the identity backend reported a session at the last update.
    session_active: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            store: UserStore::default(),
            signup: SignUpState::default(),
            pending: 0,
            session_active: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn focus(&self) -> Focus {
        self.signup.focus
    }

    pub fn screen(&self) -> Screen {
        self.signup.screen
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn set_pending(&mut self, pending: usize) {
        self.pending = pending;
    }

    pub fn focus_next(&mut self) {
        dispatch_mvi!(self, signup, SignUpReducer, SignUpIntent::FocusNext);
    }

    pub fn focus_prev(&mut self) {
        dispatch_mvi!(self, signup, SignUpReducer, SignUpIntent::FocusPrev);
    }

    /// Emit `UserUpdate` for `field`.
    pub fn update_field(&mut self, field: FormField, value: String) {
        dispatch_mvi!(
            self,
            store,
            StoreReducer,
            StoreIntent::UserUpdate { field, value }
        );
    }

    /// Apply `edit` to the text of the focused field.
    pub fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.signup.focus.field() else {
            return;
        };
        if field == FormField::Terms {
            return;
        }
        let mut value = self.store.form.value(field);
        edit(&mut value);
        self.update_field(field, value);
    }

    pub fn toggle_terms(&mut self) {
        let value = (!self.store.form.terms).to_string();
        self.update_field(FormField::Terms, value);
    }

    /// Build the `CreateAccount` intent from the form and record it locally.
    pub fn submit(&mut self) -> Intent {
        let intent = Intent::CreateAccount(self.store.form.to_new_account());
        self.apply(Action::Intent(intent.clone()));
        intent
    }

    /// Reduce an action published by the coordinator.
    pub fn on_action(&mut self, action: Action, session_active: bool) {
        self.session_active = session_active;
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        dispatch_mvi!(self, store, StoreReducer, StoreIntent::Apply(action));
        let signed_in = self.session_active && self.store.user_uid().is_some();
        dispatch_mvi!(
            self,
            signup,
            SignUpReducer,
            SignUpIntent::SessionChanged { signed_in }
        );
    }
}
