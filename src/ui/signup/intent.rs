use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpIntent {
    FocusNext,
    FocusPrev,
    /// Recomputed after every store update.
    SessionChanged { signed_in: bool },
}

impl Intent for SignUpIntent {}
