use super::view_model::BillingDetailsViewModel;
use crate::domain::a001_organization::ui::picker::OrganizationSelect;
use crate::shared::form_utils::parse_cost_input;
use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn BillingDetails(
    id: Option<String>,
    initial_organization_id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = BillingDetailsViewModel::new(initial_organization_id);
    vm.load_if_needed(id);

    // Clone vm for multiple closures
    let vm_clone = vm.clone();

    let field_error = {
        let vm = vm_clone.clone();
        move |field: &'static str| {
            let vm = vm.clone();
            move || {
                vm.field_errors
                    .get()
                    .get(field)
                    .map(|m| view! { <div class="field-error">{m.to_string()}</div> })
            }
        }
    };

    view! {
        <div class="details-container billing-details">
            <div class="details-header">
                <h3>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Редактирование платежа" } else { "Новый платеж" }
                    }
                </h3>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <Show
                when={
                    let vm = vm_clone.clone();
                    move || !vm.loading.get()
                }
                fallback=|| view! { <div class="loading">{"Загрузка..."}</div> }
            >
            <div class="details-form">
                <div class="form-group">
                    <label for="cost">{"Сумма"}</label>
                    <input
                        type="number"
                        id="cost"
                        step="1"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().cost.map(|c| c.to_string()).unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let parsed = parse_cost_input(&event_target_value(&ev));
                                vm.form.update(|f| f.cost = Some(parsed));
                            }
                        }
                    />
                    {field_error("cost")}
                </div>

                <div class="form-group">
                    <label for="due_date">{"Срок оплаты"}</label>
                    <input
                        type="date"
                        id="due_date"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().due_date
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.due_date = event_target_value(&ev));
                            }
                        }
                    />
                    {field_error("due_date")}
                </div>

                <div class="form-group">
                    <label for="category">{"Категория"}</label>
                    <input
                        type="text"
                        id="category"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().category
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.category = event_target_value(&ev));
                            }
                        }
                        placeholder="Например: аренда"
                    />
                    {field_error("category")}
                </div>

                <div class="form-group form-group--checkbox">
                    <label for="paid_status">
                        <input
                            type="checkbox"
                            id="paid_status"
                            prop:checked={
                                let vm = vm_clone.clone();
                                move || vm.form.get().paid_status.unwrap_or(false)
                            }
                            on:change={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.paid_status = Some(event_target_checked(&ev)));
                                }
                            }
                        />
                        {"Оплачен"}
                    </label>
                    {field_error("paid_status")}
                </div>

                <div class="form-group">
                    <label for="organization_id">{"Организация"}</label>
                    <OrganizationSelect
                        value={
                            let vm = vm_clone.clone();
                            Signal::derive(move || vm.form.get().organization_id)
                        }
                        on_change={
                            let vm = vm_clone.clone();
                            move |selected: Option<String>| {
                                vm.form.update(|f| f.organization_id = selected);
                            }
                        }
                    />
                    {field_error("organization_id")}
                </div>
            </div>
            </Show>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled={
                        let vm = vm.clone();
                        move || vm.submitting.get() || vm.loading.get()
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm.clone();
                        move || {
                            if vm.submitting.get() {
                                "Сохранение..."
                            } else if vm.is_edit_mode()() {
                                "Сохранить"
                            } else {
                                "Создать"
                            }
                        }
                    }
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    {icon("cancel")}
                    {"Отмена"}
                </button>
            </div>
        </div>
    }
}
