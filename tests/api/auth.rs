use moviedb::{
    auth::{LoginRequest, SignupRequest, error::AuthError},
    error::Error,
    session::USER_STORAGE_KEY,
    storage::Storage,
};

use crate::{DEMO_EMAIL, TestState, fake};

#[test]
fn should_be_anonymous_when_storage_is_empty() {
    let state = TestState::new();

    assert!(!state.session.is_authenticated());
    assert!(state.session.current_user().is_none());

    // the demo account is seeded on first run
    assert_eq!(state.session.users().len(), 1);
    assert_eq!(state.session.users()[0].email, DEMO_EMAIL);
}

#[test]
fn should_be_ok_when_login_email_exists() {
    let mut state = TestState::new();

    state.session.login(fake::login_request(DEMO_EMAIL)).unwrap();

    assert!(state.session.is_authenticated());
    let user = state.session.current_user().unwrap();
    assert_eq!(user.username, "moviefan");
    assert_eq!(user.watchlist, vec![1, 7, 11]);

    // the session record is written through immediately
    assert!(state.storage.load(USER_STORAGE_KEY).unwrap().is_some());
}

#[test]
fn should_accept_any_password_when_login() {
    let mut state = TestState::new();

    // stored accounts keep no credential; only the email is matched
    let result = state.session.login(LoginRequest {
        email: DEMO_EMAIL.to_string(),
        password: "definitely-not-the-password".into(),
    });

    assert!(result.is_ok());
    assert!(state.session.is_authenticated());
}

#[test]
fn should_be_error_when_login_email_is_unknown() {
    let mut state = TestState::new();

    let result = state.session.login(fake::login_request("nobody@example.com"));

    assert!(matches!(result, Err(Error::Auth(AuthError::UserNotFound))));
    assert!(!state.session.is_authenticated());
}

#[test]
fn should_be_error_when_login_fields_are_empty() {
    let mut state = TestState::new();

    let result = state.session.login(LoginRequest {
        email: String::new(),
        password: "".into(),
    });

    assert!(matches!(result, Err(Error::Validation(_))));
    assert!(!state.session.is_authenticated());
}

#[test]
fn should_create_user_when_signup_email_is_new() {
    let mut state = TestState::new();

    let request = fake::signup_request();
    let email = request.email.clone();

    state.session.signup(request).unwrap();

    assert!(state.session.is_authenticated());
    assert_eq!(state.session.users().len(), 2);

    let user = state.session.current_user().unwrap();
    assert_eq!(user.email, email);
    assert!(user.watchlist.is_empty());
    assert!(user.favorites.is_empty());
    assert!(user.favorite_actors.is_empty());
    assert!(user.ratings.is_empty());
    assert!(user.reviews.is_empty());
    assert!(user.preferences.genres.is_empty());
    assert!(user.preferences.dark_mode);
    assert!(
        user.profile_picture
            .as_deref()
            .unwrap()
            .starts_with("https://ui-avatars.com/api/")
    );
}

#[test]
fn should_be_error_when_signup_email_is_taken() {
    let mut state = TestState::new();

    let mut request = fake::signup_request();
    request.email = DEMO_EMAIL.to_string();

    let result = state.session.signup(request);

    assert!(matches!(result, Err(Error::Auth(AuthError::EmailTaken))));
    assert!(!state.session.is_authenticated());

    // a failed signup leaves the user table untouched
    assert_eq!(state.session.users().len(), 1);
}

#[test]
fn should_be_error_when_signup_passwords_mismatch() {
    let mut state = TestState::new();

    let mut request = fake::signup_request();
    request.confirm_password = "something-else".into();

    let result = state.session.signup(request);

    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(state.session.users().len(), 1);
}

#[test]
fn should_be_error_when_signup_fields_are_empty() {
    let mut state = TestState::new();

    let result = state.session.signup(SignupRequest {
        username: String::new(),
        email: String::new(),
        password: "".into(),
        confirm_password: "".into(),
    });

    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(state.session.users().len(), 1);
}

#[test]
fn should_clear_session_record_when_logout() {
    let mut state = TestState::logged_in();

    state.session.logout().unwrap();

    assert!(!state.session.is_authenticated());
    assert!(state.storage.load(USER_STORAGE_KEY).unwrap().is_none());

    // the account itself survives in the user table
    assert_eq!(state.session.users().len(), 1);
}

#[test]
fn should_restore_authenticated_session_when_record_exists() {
    let state = TestState::logged_in();

    let reopened = state.reopen_session();

    assert!(reopened.is_authenticated());
    assert_eq!(reopened.current_user().unwrap().email, DEMO_EMAIL);
}

#[test]
fn should_restore_anonymous_session_when_logged_out() {
    let mut state = TestState::logged_in();
    state.session.logout().unwrap();

    let reopened = state.reopen_session();

    assert!(!reopened.is_authenticated());
}
