//! Billing Details - Model Layer
//!
//! API functions for the billing form

use contracts::domain::a002_billing::aggregate::{Billing, BillingDto};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::shared::api_utils::{api_base, bearer_header};

#[derive(Deserialize)]
struct CreatePageQuery {
    organization_id: Option<String>,
}

/// Прочитать organization_id из query-строки текущего адреса
///
/// Используется при создании платежа со страницы организации.
pub fn organization_id_from_query() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(&search);
    let parsed: CreatePageQuery = serde_qs::from_str(query).ok()?;
    parsed.organization_id.filter(|s| !s.is_empty())
}

fn apply_common_headers(request: &Request) -> Result<(), String> {
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    if let Some(auth) = bearer_header() {
        request
            .headers()
            .set("Authorization", &auth)
            .map_err(|e| format!("{e:?}"))?;
    }
    Ok(())
}

async fn response_text(resp: &Response) -> Result<String, String> {
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "bad text".to_string())
}

/// Fetch billing by ID from API
pub async fn fetch_by_id(id: String) -> Result<Billing, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/api/billings/{}", api_base(), id);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    apply_common_headers(&request)?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = response_text(&resp).await?;
    let billing: Billing = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(billing)
}

/// Save (create or update) billing via API
///
/// Создание идет через POST, редактирование через PUT по id. В обоих
/// случаях сервер возвращает полную сохраненную запись. Тело ошибочного
/// ответа передается без изменений как сообщение об ошибке.
pub async fn save_form(dto: &BillingDto) -> Result<Billing, String> {
    let opts = RequestInit::new();
    opts.set_mode(RequestMode::Cors);

    let url = match &dto.id {
        Some(id) => {
            opts.set_method("PUT");
            format!("{}/api/billings/{}", api_base(), id)
        }
        None => {
            opts.set_method("POST");
            format!("{}/api/billings", api_base())
        }
    };

    let body = serde_json::to_string(dto).map_err(|e| format!("{e}"))?;
    opts.set_body(&wasm_bindgen::JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    apply_common_headers(&request)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        let body = response_text(&resp).await.unwrap_or_default();
        if body.is_empty() {
            return Err(format!("HTTP {}", resp.status()));
        }
        return Err(body);
    }

    let text = response_text(&resp).await?;
    let billing: Billing = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(billing)
}
