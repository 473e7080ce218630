//! Правила валидации формы платежа
//!
//! Декларативный набор правил, применяемый целиком к состоянию формы на
//! момент отправки. Используется и клиентом (перед вызовом API), и
//! сервером (перед записью).

use crate::shared::validation::ValidationErrors;
use chrono::NaiveDate;

use super::aggregate::BillingDto;

/// Разобрать дату формы (ISO, "YYYY-MM-DD")
pub fn parse_due_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Проверить состояние формы платежа
///
/// Правила:
/// - cost: обязательное, целое число
/// - due_date: обязательное, корректная дата
/// - category: обязательное, непустая строка
/// - paid_status: обязательное (false — валидное значение)
/// - organization_id: необязательное, допускается null
pub fn validate_billing_form(dto: &BillingDto) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match dto.cost {
        None => errors.add("cost", "Сумма обязательна"),
        Some(c) if !c.is_finite() || c.fract() != 0.0 => {
            errors.add("cost", "Сумма должна быть целым числом")
        }
        Some(_) => {}
    }

    if dto.due_date.trim().is_empty() {
        errors.add("due_date", "Срок оплаты обязателен");
    } else if parse_due_date(&dto.due_date).is_none() {
        errors.add("due_date", "Некорректная дата");
    }

    if dto.category.trim().is_empty() {
        errors.add("category", "Категория обязательна");
    }

    if dto.paid_status.is_none() {
        errors.add("paid_status", "Статус оплаты обязателен");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> BillingDto {
        BillingDto {
            id: None,
            cost: Some(100.0),
            due_date: "2026-09-01".to_string(),
            category: "rent".to_string(),
            paid_status: Some(false),
            organization_id: None,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_billing_form(&valid_dto()).is_empty());
    }

    #[test]
    fn test_empty_category_fails() {
        let mut dto = valid_dto();
        dto.category = String::new();
        let errors = validate_billing_form(&dto);
        assert_eq!(errors.len(), 1);
        assert!(errors.get("category").is_some());
    }

    #[test]
    fn test_non_integer_cost_fails() {
        let mut dto = valid_dto();
        dto.cost = Some(3.5);
        let errors = validate_billing_form(&dto);
        assert!(errors.get("cost").is_some());
    }

    #[test]
    fn test_missing_cost_fails() {
        let mut dto = valid_dto();
        dto.cost = None;
        assert!(validate_billing_form(&dto).get("cost").is_some());
    }

    #[test]
    fn test_missing_due_date_fails() {
        let mut dto = valid_dto();
        dto.due_date = String::new();
        assert!(validate_billing_form(&dto).get("due_date").is_some());
    }

    #[test]
    fn test_garbage_due_date_fails() {
        let mut dto = valid_dto();
        dto.due_date = "31/12/2026".to_string();
        assert!(validate_billing_form(&dto).get("due_date").is_some());
    }

    #[test]
    fn test_false_paid_status_is_valid() {
        let mut dto = valid_dto();
        dto.paid_status = Some(false);
        assert!(validate_billing_form(&dto).is_empty());
    }

    #[test]
    fn test_missing_paid_status_fails() {
        let mut dto = valid_dto();
        dto.paid_status = None;
        assert!(validate_billing_form(&dto).get("paid_status").is_some());
    }

    #[test]
    fn test_null_organization_is_valid() {
        let mut dto = valid_dto();
        dto.organization_id = None;
        assert!(validate_billing_form(&dto).is_empty());
    }

    #[test]
    fn test_all_failing_rules_reported_together() {
        let dto = BillingDto {
            id: None,
            cost: None,
            due_date: String::new(),
            category: String::new(),
            paid_status: None,
            organization_id: None,
        };
        let errors = validate_billing_form(&dto);
        assert_eq!(errors.len(), 4);
    }
}
