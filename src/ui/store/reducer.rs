use serde_json::Value;

use crate::action::{Action, Intent, Outcome};
use crate::ui::mvi::Reducer;

use super::intent::StoreIntent;
use super::state::{AuthStatus, UserStore};

pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = UserStore;
    type Intent = StoreIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoreIntent::UserUpdate { field, value } => {
                state.form.set(field, value);
                state
            }
            StoreIntent::Apply(Action::Intent(intent)) => apply_intent(state, intent),
            StoreIntent::Apply(Action::Outcome(outcome)) => apply_outcome(state, outcome),
        }
    }
}

fn apply_intent(mut state: UserStore, intent: Intent) -> UserStore {
    match intent {
        Intent::CreateAccount(_) | Intent::SignIn(_) | Intent::SignInSocial(_) => {
            state.last_error = None;
        }
        // Only emitted once the identity backend holds a session for this uid.
        Intent::CreateUserRecord(profile) => {
            state.status = AuthStatus::SignedIn {
                uid: profile.user_uid,
            };
        }
        _ => {}
    }
    state
}

fn apply_outcome(mut state: UserStore, outcome: Outcome) -> UserStore {
    if let Some(message) = outcome.failure_message() {
        state.last_error = Some(message.to_string());
    }

    match outcome {
        Outcome::CreateAccountFailed { .. } | Outcome::SignInFailed { .. } => {
            state.status = AuthStatus::SignedOut;
        }
        Outcome::SignInSucceeded { response } => {
            state.last_error = None;
            state.status = AuthStatus::SignedIn {
                uid: response.uid().to_string(),
            };
        }
        Outcome::CreateUserRecordSucceeded { response } => {
            state.last_error = None;
            if response.get("userUid").is_some() {
                state.user = Some(response);
            }
        }
        Outcome::CurrentUserSet { data } => {
            if let Some(uid) = data.get("userUid").and_then(Value::as_str) {
                state.status = AuthStatus::SignedIn {
                    uid: uid.to_string(),
                };
            }
            state.user = Some(data);
        }
        Outcome::UserFetchSucceeded { .. } => {
            state.last_error = None;
        }
        Outcome::SignOutSucceeded => {
            return UserStore::default();
        }
        Outcome::PostMessageSucceeded { result } => {
            state.last_posted = Some(result);
        }
        Outcome::UpdateChatSucceeded {
            message_id,
            snapshot,
            ..
        } => {
            state.chat.insert(message_id.unwrap_or_default(), snapshot);
        }
        Outcome::CreateUserRecordFailed { .. }
        | Outcome::SignOutFailed { .. }
        | Outcome::UserFetchFailed { .. }
        | Outcome::PostMessageFailed { .. } => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::store::FormField;
    use serde_json::json;

    #[test]
    fn user_update_sets_field() {
        let state = StoreReducer::reduce(
            UserStore::default(),
            StoreIntent::UserUpdate {
                field: FormField::Email,
                value: "jane@x.com".into(),
            },
        );
        assert_eq!(state.form.email, "jane@x.com");
    }

    #[test]
    fn current_user_marks_signed_in() {
        let state = StoreReducer::reduce(
            UserStore::default(),
            StoreIntent::Apply(
                Outcome::CurrentUserSet {
                    data: json!({"userUid": "u1", "username": "jane"}),
                }
                .into(),
            ),
        );
        assert_eq!(state.user_uid(), Some("u1"));
        assert_eq!(state.status, AuthStatus::SignedIn { uid: "u1".into() });
    }

    #[test]
    fn sign_out_resets_everything() {
        let mut state = UserStore::default();
        state.form.email = "jane@x.com".into();
        state.user = Some(json!({"userUid": "u1"}));

        let state = StoreReducer::reduce(state, StoreIntent::Apply(Outcome::SignOutSucceeded.into()));
        assert_eq!(state, UserStore::default());
    }
}
