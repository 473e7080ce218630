use crate::domain::a002_billing::ui::list::BillingList;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::{RequireAccess, RequireAuth};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell>
                <RequireAccess entity="billing">
                    <BillingList />
                </RequireAccess>
            </Shell>
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
