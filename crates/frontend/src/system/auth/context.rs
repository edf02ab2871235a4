use contracts::shared::api_error::ApiError;
use contracts::system::auth::Session;
use leptos::prelude::*;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Auth context provider component
///
/// Restores the session persisted by an earlier login.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let restored = storage::get_token().and_then(Session::new);
    if restored.is_some() {
        log::debug!("restored session from localStorage");
    }
    let (auth_state, set_auth_state) = signal(AuthState { session: restored });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Log in and persist the token.
pub async fn do_login(
    username: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let response = api::login(username, password).await?;
    let session = Session::new(response.token).ok_or(ApiError::Unauthorized)?;

    storage::save_token(session.token());
    set_auth_state.set(AuthState {
        session: Some(session),
    });

    Ok(())
}

/// Drop the session; the app falls back to the login page.
pub fn end_session(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}
