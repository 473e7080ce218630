//! Клиент системных auth-эндпоинтов бэкенда
//!
//! Все ошибки сводятся к строке: выше по стеку они показываются
//! пользователю как есть.

use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_base;

async fn post_json<B, T>(path: &str, body: &B) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(&format!("{}{}", api_base(), path))
        .json(body)
        .map_err(|e| format!("Не удалось сформировать запрос: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Сервер недоступен: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Некорректный ответ сервера: {}", e))
}

/// Вход по логину и паролю
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    post_json(
        "/api/system/auth/login",
        &LoginRequest { username, password },
    )
    .await
}

/// Обновление access-токена по refresh-токену
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    post_json("/api/system/auth/refresh", &RefreshRequest { refresh_token }).await
}

/// Выход: отзыв refresh-токена на сервере
pub async fn logout(refresh_token: String) -> Result<(), String> {
    let response = Request::post(&format!("{}/api/system/auth/logout", api_base()))
        .json(&RefreshRequest { refresh_token })
        .map_err(|e| format!("Не удалось сформировать запрос: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Сервер недоступен: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    Ok(())
}

/// Текущий пользователь по access-токену
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&format!("{}/api/system/auth/me", api_base()))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Сервер недоступен: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Некорректный ответ сервера: {}", e))
}
