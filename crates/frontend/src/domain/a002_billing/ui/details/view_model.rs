use super::model;
use contracts::domain::a002_billing::aggregate::BillingDto;
use contracts::domain::a002_billing::validation::validate_billing_form;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use std::rc::Rc;

use crate::shared::date_utils::today_iso_date;

/// ViewModel for Billing details form
///
/// Валидация запускается только при отправке: во время набора ошибки
/// полей не пересчитываются. Повторная отправка блокируется, пока
/// запрос в полете.
#[derive(Clone)]
pub struct BillingDetailsViewModel {
    pub form: RwSignal<BillingDto>,
    pub error: RwSignal<Option<String>>,
    pub field_errors: RwSignal<ValidationErrors>,
    pub loading: RwSignal<bool>,
    pub submitting: RwSignal<bool>,
    initial_organization_id: Option<String>,
}

impl BillingDetailsViewModel {
    pub fn new(initial_organization_id: Option<String>) -> Self {
        Self {
            form: RwSignal::new(BillingDto::with_defaults(
                today_iso_date(),
                initial_organization_id.clone(),
            )),
            error: RwSignal::new(None),
            field_errors: RwSignal::new(ValidationErrors::new()),
            loading: RwSignal::new(false),
            submitting: RwSignal::new(false),
            initial_organization_id,
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().is_edit_mode()
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<String>) {
        if let Some(existing_id) = id {
            let form = self.form;
            let error = self.error;
            let loading = self.loading;
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match model::fetch_by_id(existing_id).await {
                    Ok(aggregate) => {
                        form.set(aggregate.to_dto());
                        loading.set(false);
                    }
                    // Форма остается недоступной: показываем только ошибку
                    Err(e) => error.set(Some(format!("Ошибка загрузки: {}", e))),
                }
            });
        }
    }

    /// Save form data to server
    ///
    /// Ошибки валидации блокируют запрос целиком. При ошибке сервера
    /// значения формы остаются как есть, сообщение показывается без
    /// изменений. При успехе форма сбрасывается к начальному состоянию
    /// и вызывается on_saved.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        if self.submitting.get_untracked() {
            return;
        }

        self.error.set(None);

        let current = self.form.get();
        let errors = validate_billing_form(&current);
        if !errors.is_empty() {
            self.field_errors.set(errors);
            return;
        }
        self.field_errors.set(ValidationErrors::new());

        let form = self.form;
        let error = self.error;
        let submitting = self.submitting;
        let initial_org = self.initial_organization_id.clone();
        submitting.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            match model::save_form(&current).await {
                Ok(_) => {
                    form.set(BillingDto::with_defaults(today_iso_date(), initial_org));
                    submitting.set(false);
                    (on_saved)(());
                }
                Err(e) => {
                    error.set(Some(e));
                    submitting.set(false);
                }
            }
        });
    }
}
