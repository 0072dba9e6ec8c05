use crate::action::Action;
use crate::ui::mvi::Intent;

use super::state::FormField;

#[derive(Debug, Clone)]
pub enum StoreIntent {
    /// A form field changed (emitted on every keystroke).
    UserUpdate { field: FormField, value: String },
    /// An action published by the coordinator, or dispatched by the view.
    Apply(Action),
}

impl Intent for StoreIntent {}
