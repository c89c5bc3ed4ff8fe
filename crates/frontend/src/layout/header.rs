use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use crate::system::auth::storage;

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let admin_email = move || auth_state.get().email.unwrap_or_default();

    let sign_out = move |_| {
        storage::clear_session();
        set_auth_state.set(Default::default());
    };

    view! {
        <header class="header">
            <h2 class="header__title">"Admin Dashboard"</h2>
            <div class="header__actions">
                <span class="header__email">{admin_email}</span>
                <button class="header__signout" on:click=sign_out title="Sign out">
                    {icon("log-out")}
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
