use crate::domain::a001_organization::aggregate::OrganizationId;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::validation::ValidationErrors;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{parse_due_date, validate_billing_form};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор платежа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BillingId(pub Uuid);

impl BillingId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for BillingId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(BillingId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Платеж организации
///
/// Ссылается максимум на одну организацию (nullable foreign key):
/// платеж можно завести и без выбранной организации.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Billing {
    #[serde(flatten)]
    pub base: BaseAggregate<BillingId>,

    // Специфичные поля агрегата
    pub cost: i64,
    pub due_date: NaiveDate,
    pub category: String,
    pub paid_status: bool,
    pub organization_id: Option<OrganizationId>,
}

impl Billing {
    /// Создать новый платеж из DTO для вставки в БД
    ///
    /// Все правила валидации формы проверяются целиком; любая ошибка
    /// возвращается с привязкой к полю, агрегат не создается.
    pub fn new_from_dto(dto: &BillingDto) -> Result<Self, ValidationErrors> {
        let (cost, due_date, organization_id) = Self::parse_dto(dto)?;

        Ok(Self {
            base: BaseAggregate::new(BillingId::new_v4()),
            cost,
            due_date,
            category: dto.category.trim().to_string(),
            paid_status: dto.paid_status.unwrap_or(false),
            organization_id,
        })
    }

    /// Обновить данные из DTO (режим редактирования)
    ///
    /// id и серверные метаданные не трогаем, меняются только поля формы.
    pub fn apply_dto(&mut self, dto: &BillingDto) -> Result<(), ValidationErrors> {
        let (cost, due_date, organization_id) = Self::parse_dto(dto)?;

        self.cost = cost;
        self.due_date = due_date;
        self.category = dto.category.trim().to_string();
        self.paid_status = dto.paid_status.unwrap_or(false);
        self.organization_id = organization_id;
        Ok(())
    }

    fn parse_dto(
        dto: &BillingDto,
    ) -> Result<(i64, NaiveDate, Option<OrganizationId>), ValidationErrors> {
        let mut errors = validate_billing_form(dto);

        let organization_id = match dto.organization_id.as_deref() {
            None => None,
            Some("") => None,
            Some(s) => match OrganizationId::from_string(s) {
                Ok(id) => Some(id),
                Err(e) => {
                    errors.add("organization_id", e);
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        // После validate_billing_form оба значения гарантированно корректны
        let cost = dto.cost.unwrap_or(0.0) as i64;
        let due_date = parse_due_date(&dto.due_date).unwrap_or_default();

        Ok((cost, due_date, organization_id))
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.base.touch();
    }

    /// Перевести агрегат обратно в форму (режим редактирования)
    pub fn to_dto(&self) -> BillingDto {
        BillingDto {
            id: Some(self.base.id.as_string()),
            cost: Some(self.cost as f64),
            due_date: self.due_date.format("%Y-%m-%d").to_string(),
            category: self.category.clone(),
            paid_status: Some(self.paid_status),
            organization_id: self.organization_id.map(|id| id.as_string()),
        }
    }
}

impl AggregateRoot for Billing {
    type Id = BillingId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "billing"
    }

    fn element_name() -> &'static str {
        "Платеж"
    }

    fn list_name() -> &'static str {
        "Платежи"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO формы создания/редактирования платежа
///
/// `cost` хранится как JSON-число (f64): целочисленность проверяет
/// валидация, как и формат `due_date`. `paid_status` обязателен, при этом
/// `false` — валидное значение.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BillingDto {
    pub id: Option<String>,
    pub cost: Option<f64>,
    pub due_date: String,
    pub category: String,
    pub paid_status: Option<bool>,
    pub organization_id: Option<String>,
}

impl BillingDto {
    /// Начальное состояние формы в режиме создания
    ///
    /// `organization_id` берется из query-параметра маршрута, если он есть.
    pub fn with_defaults(today: String, organization_id: Option<String>) -> Self {
        Self {
            id: None,
            cost: Some(0.0),
            due_date: today,
            category: String::new(),
            paid_status: Some(false),
            organization_id,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }
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
    fn test_defaults_without_organization() {
        let dto = BillingDto::with_defaults("2026-08-23".to_string(), None);
        assert_eq!(dto.cost, Some(0.0));
        assert_eq!(dto.due_date, "2026-08-23");
        assert_eq!(dto.category, "");
        assert_eq!(dto.paid_status, Some(false));
        assert_eq!(dto.organization_id, None);
        assert!(!dto.is_edit_mode());
    }

    #[test]
    fn test_defaults_with_preset_organization() {
        let org = uuid::Uuid::new_v4().to_string();
        let dto = BillingDto::with_defaults("2026-08-23".to_string(), Some(org.clone()));
        assert_eq!(dto.organization_id, Some(org));
    }

    #[test]
    fn test_new_from_valid_dto() {
        let billing = Billing::new_from_dto(&valid_dto()).expect("dto is valid");
        assert_eq!(billing.cost, 100);
        assert_eq!(
            billing.due_date,
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
        );
        assert_eq!(billing.category, "rent");
        assert!(!billing.paid_status);
        assert!(billing.organization_id.is_none());
    }

    #[test]
    fn test_new_from_dto_rejects_invalid() {
        let mut dto = valid_dto();
        dto.category = String::new();
        let err = Billing::new_from_dto(&dto).unwrap_err();
        assert!(err.get("category").is_some());
    }

    #[test]
    fn test_empty_organization_id_normalized_to_none() {
        let mut dto = valid_dto();
        dto.organization_id = Some(String::new());
        let billing = Billing::new_from_dto(&dto).expect("empty org id is valid");
        assert!(billing.organization_id.is_none());
    }

    #[test]
    fn test_apply_dto_merges_changed_field() {
        let mut billing = Billing::new_from_dto(&valid_dto()).unwrap();
        let id_before = billing.base.id;

        let mut dto = billing.to_dto();
        dto.paid_status = Some(true);
        billing.apply_dto(&dto).expect("dto is valid");

        assert_eq!(billing.base.id, id_before);
        assert!(billing.paid_status);
        assert_eq!(billing.cost, 100);
        assert_eq!(billing.category, "rent");
    }

    #[test]
    fn test_before_write_increments_version() {
        let mut billing = Billing::new_from_dto(&valid_dto()).unwrap();
        assert_eq!(billing.base.metadata.version, 0);

        billing.before_write();
        assert_eq!(billing.base.metadata.version, 1);

        billing.before_write();
        assert_eq!(billing.base.metadata.version, 2);
    }

    #[test]
    fn test_roundtrip_to_dto() {
        let billing = Billing::new_from_dto(&valid_dto()).unwrap();
        let dto = billing.to_dto();
        assert_eq!(dto.id, Some(billing.to_string_id()));
        assert_eq!(dto.cost, Some(100.0));
        assert_eq!(dto.due_date, "2026-09-01");
        assert!(dto.is_edit_mode());
    }
}
