use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::{api, storage};

/// Каркас приложения: шапка с текущим пользователем и рабочая область
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let user_label = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.full_name.unwrap_or(u.username))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        let refresh_token = storage::get_refresh_token();
        storage::clear_tokens();
        set_auth_state.set(AuthState::default());
        spawn_local(async move {
            if let Some(token) = refresh_token {
                let _ = api::logout(token).await;
            }
        });
    };

    view! {
        <div class="shell">
            <header class="shell__header">
                <h1 class="shell__title">{"Учет платежей"}</h1>
                <div class="shell__user">
                    <span class="shell__user-name">{user_label}</span>
                    <button class="button button--secondary" on:click=on_logout>
                        {icon("logout")}
                        {"Выйти"}
                    </button>
                </div>
            </header>
            <main class="shell__content">{children()}</main>
        </div>
    }
}
