use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::{api, storage};

/// Страница входа
///
/// Пока запрос в полете, поля и кнопка недоступны; ошибка показывается
/// над формой и сбрасывается при следующей попытке.
#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginRequest {
        username: String::new(),
        password: String::new(),
    });
    let (error, set_error) = signal(Option::<String>::None);
    let (submitting, set_submitting) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let credentials = form.get();
        set_submitting.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::login(credentials.username, credentials.password).await {
                Ok(response) => {
                    storage::save_access_token(&response.access_token);
                    storage::save_refresh_token(&response.refresh_token);

                    // Смена состояния переключает приложение на рабочую область
                    set_auth_state.set(AuthState {
                        access_token: Some(response.access_token),
                        user_info: Some(response.user),
                    });
                    set_submitting.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Не удалось войти: {}", e)));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="page page--login">
            <div class="login-card">
                <h1 class="login-card__title">{"Учет платежей"}</h1>

                {move || error.get().map(|e| view! {
                    <div class="error-message">{e}</div>
                })}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">{"Логин"}</label>
                        <input
                            type="text"
                            id="username"
                            required
                            prop:value=move || form.get().username
                            on:input=move |ev| {
                                form.update(|f| f.username = event_target_value(&ev));
                            }
                            disabled=move || submitting.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Пароль"}</label>
                        <input
                            type="password"
                            id="password"
                            required
                            prop:value=move || form.get().password
                            on:input=move |ev| {
                                form.update(|f| f.password = event_target_value(&ev));
                            }
                            disabled=move || submitting.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Вход..." } else { "Войти" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
