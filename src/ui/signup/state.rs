use crate::ui::mvi::UiState;
use crate::ui::store::FormField;

/// Focusable rows of the sign-up form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    FirstName,
    LastName,
    Email,
    Username,
    Password,
    Image,
    Terms,
    Submit,
}

impl Focus {
    pub const ORDER: [Focus; 8] = [
        Focus::FirstName,
        Focus::LastName,
        Focus::Email,
        Focus::Username,
        Focus::Password,
        Focus::Image,
        Focus::Terms,
        Focus::Submit,
    ];

    /// Form field behind this row; `None` for the submit button.
    pub fn field(self) -> Option<FormField> {
        match self {
            Focus::FirstName => Some(FormField::FirstName),
            Focus::LastName => Some(FormField::LastName),
            Focus::Email => Some(FormField::Email),
            Focus::Username => Some(FormField::Username),
            Focus::Password => Some(FormField::Password),
            Focus::Image => Some(FormField::Image),
            Focus::Terms => Some(FormField::Terms),
            Focus::Submit => None,
        }
    }

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    SignUp,
    /// A user record is loaded and the identity backend holds a session.
    SignedIn,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignUpState {
    pub focus: Focus,
    pub screen: Screen,
}

impl UiState for SignUpState {}
