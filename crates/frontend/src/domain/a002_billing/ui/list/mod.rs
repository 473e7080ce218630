use crate::domain::a001_organization::ui::picker::fetch_organizations;
use crate::domain::a002_billing::ui::details::{organization_id_from_query, BillingDetails};
use crate::shared::api_utils::{api_base, bearer_header};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::domain::a002_billing::aggregate::Billing;
use leptos::prelude::*;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub struct BillingRow {
    pub id: String,
    pub cost: String,
    pub due_date: String,
    pub category: String,
    pub paid_status: &'static str,
    pub organization: String,
    pub created_at: String,
}

impl BillingRow {
    fn from_billing(b: Billing, org_names: &HashMap<String, String>) -> Self {
        use contracts::domain::common::AggregateId;

        let organization = b
            .organization_id
            .map(|id| {
                let key = id.as_string();
                org_names.get(&key).cloned().unwrap_or(key)
            })
            .unwrap_or_else(|| "-".to_string());

        Self {
            id: b.base.id.as_string(),
            cost: b.cost.to_string(),
            due_date: format_date(&b.due_date.format("%Y-%m-%d").to_string()),
            category: b.category,
            paid_status: if b.paid_status { "Да" } else { "Нет" },
            organization,
            created_at: b
                .base
                .metadata
                .created_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        }
    }
}

/// Режим панели деталей: создание или редактирование по id
type DetailsMode = Option<Option<String>>;

#[component]
#[allow(non_snake_case)]
pub fn BillingList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<BillingRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (details, set_details) = signal::<DetailsMode>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            let org_names: HashMap<String, String> = match fetch_organizations(None).await {
                Ok(orgs) => orgs
                    .into_iter()
                    .map(|o| {
                        use contracts::domain::common::AggregateId;
                        (o.base.id.as_string(), o.name)
                    })
                    .collect(),
                Err(_) => HashMap::new(),
            };
            match fetch_billings().await {
                Ok(v) => {
                    let rows: Vec<BillingRow> = v
                        .into_iter()
                        .map(|b| BillingRow::from_billing(b, &org_names))
                        .collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_create_new = move || set_details.set(Some(None));

    let handle_edit = move |id: String| set_details.set(Some(Some(id)));

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Платежи"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| handle_create_new()>
                        {icon("plus")}
                        {"Новый платеж"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            {move || details.get().map(|editing_id| {
                let on_saved = Rc::new(move |_| {
                    set_details.set(None);
                    fetch();
                });
                let on_cancel = Rc::new(move |_| set_details.set(None));
                let initial_org = if editing_id.is_none() {
                    organization_id_from_query()
                } else {
                    None
                };
                view! {
                    <BillingDetails
                        id=editing_id
                        initial_organization_id=initial_org
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
                }
                .into_any()
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"Сумма"}</th>
                            <th class="table__header-cell">{"Срок оплаты"}</th>
                            <th class="table__header-cell">{"Категория"}</th>
                            <th class="table__header-cell">{"Оплачен"}</th>
                            <th class="table__header-cell">{"Организация"}</th>
                            <th class="table__header-cell">{"Создано"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id_for_click = row.id.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| handle_edit(id_for_click.clone())
                                >
                                    <td class="table__cell table__cell--number">{row.cost}</td>
                                    <td class="table__cell">{row.due_date}</td>
                                    <td class="table__cell">{row.category}</td>
                                    <td class="table__cell">{row.paid_status}</td>
                                    <td class="table__cell">{row.organization}</td>
                                    <td class="table__cell">{row.created_at}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

async fn fetch_billings() -> Result<Vec<Billing>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/api/billings", api_base());
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
    let data: Vec<Billing> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}

