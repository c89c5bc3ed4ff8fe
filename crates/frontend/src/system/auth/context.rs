use chrono::Utc;
use contracts::system::auth::AdminSession;
use leptos::prelude::*;

use super::{storage, ADMIN_EMAIL};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    /// Signed-in admin email; `None` while logged out.
    pub email: Option<String>,
}

/// Auth context provider component.
///
/// Restores a still-valid session from localStorage on mount; expired or
/// malformed sessions are cleared instead.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    Effect::new(move |_| {
        if let Some(session) = storage::load_session() {
            if session.is_valid(ADMIN_EMAIL, Utc::now().timestamp_millis()) {
                set_auth_state.set(AuthState { email: Some(session.email) });
            } else {
                storage::clear_session();
            }
        }
    });

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

/// Create and persist a fresh 24-hour session for the admin account.
pub fn establish_session(set_auth_state: WriteSignal<AuthState>) {
    let session = AdminSession::new(ADMIN_EMAIL, Utc::now().timestamp_millis());
    storage::save_session(&session);
    set_auth_state.set(AuthState { email: Some(session.email) });
}
