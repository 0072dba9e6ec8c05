use crate::action::UserProfile;
use crate::identity::Session;

/// Build a profile record from an identity session.
///
/// The display name is split on `' '`: the first token is the first name and
/// the second token (if any) the last name. The username is the local part of
/// the email address.
pub fn derive_profile(session: &Session) -> UserProfile {
    let mut names = session.display_name.as_deref().map(|name| name.split(' '));
    let first_name = names.as_mut().and_then(|parts| parts.next()).map(str::to_string);
    let last_name = names.as_mut().and_then(|parts| parts.next()).map(str::to_string);

    let username = session
        .email
        .as_deref()
        .and_then(|email| email.split('@').next())
        .map(str::to_string);

    UserProfile {
        user_uid: session.uid.clone(),
        email: session.email.clone(),
        first_name,
        last_name,
        image: session.photo_url.clone(),
        username,
    }
}
