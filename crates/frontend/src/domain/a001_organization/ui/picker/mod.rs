use contracts::domain::a001_organization::aggregate::Organization;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

use crate::shared::api_utils::{api_base, bearer_header};

/// Элемент выпадающего списка организаций
#[derive(Clone, Debug)]
pub struct OrganizationOption {
    pub id: String,
    pub name: String,
}

impl From<Organization> for OrganizationOption {
    fn from(org: Organization) -> Self {
        Self {
            id: org.base.id.as_string(),
            name: org.name,
        }
    }
}

/// Выпадающий список организаций для формы платежа
///
/// Пустой вариант валиден: платеж может не ссылаться на организацию.
#[component]
pub fn OrganizationSelect<F>(
    /// Текущее значение (id организации)
    value: Signal<Option<String>>,
    /// Callback при смене выбора
    on_change: F,
) -> impl IntoView
where
    F: Fn(Option<String>) + 'static + Clone + Send,
{
    let (options, set_options) = signal::<Vec<OrganizationOption>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_organizations(None).await {
            Ok(orgs) => {
                set_options.set(orgs.into_iter().map(Into::into).collect());
                set_error.set(None);
            }
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <select
            class="form-select"
            id="organization_id"
            on:change=move |ev| {
                let selected = event_target_value(&ev);
                on_change(if selected.is_empty() { None } else { Some(selected) });
            }
        >
            <option value="" selected=move || value.get().is_none()>
                {"— не выбрана —"}
            </option>
            {move || {
                let current = value.get();
                options
                    .get()
                    .into_iter()
                    .map(|opt| {
                        let is_selected = current.as_deref() == Some(opt.id.as_str());
                        view! {
                            <option value=opt.id selected=is_selected>{opt.name}</option>
                        }
                    })
                    .collect_view()
            }}
        </select>
        {move || error.get().map(|e| view! { <div class="field-error">{e}</div> })}
    }
}

/// Загрузить организации, опционально отфильтровав по имени
pub async fn fetch_organizations(name_filter: Option<&str>) -> Result<Vec<Organization>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let mut url = format!("{}/api/organizations", api_base());
    if let Some(name) = name_filter {
        url = format!("{}?name={}", url, urlencoding::encode(name));
    }
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
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

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: Vec<Organization> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}
