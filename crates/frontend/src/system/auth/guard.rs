use contracts::system::access::AccessService;
use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires authentication
/// Shows fallback if not authenticated
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <div>"Not authenticated. Please login."</div> }
        >
            {children()}
        </Show>
    }
}

/// Component that requires access to an entity
///
/// Зеркалит серверное правило: администратору доступно всё, остальным
/// только бизнес-сущности проекта.
#[component]
pub fn RequireAccess(entity: &'static str, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || {
                let state = auth_state.get();
                let is_admin = state
                    .user_info
                    .as_ref()
                    .map(|u| u.is_admin)
                    .unwrap_or(false);
                state.access_token.is_some()
                    && (is_admin || AccessService::of_entity(entity) == AccessService::Project)
            }
            fallback=|| view! { <div>"Access denied."</div> }
        >
            {children()}
        </Show>
    }
}
