use super::repository;
use contracts::domain::a002_billing::aggregate::{Billing, BillingDto};
use uuid::Uuid;

/// Создание нового платежа
///
/// Правила валидации формы проверяются целиком до записи; любая ошибка
/// блокирует создание.
pub async fn create(dto: BillingDto) -> anyhow::Result<Billing> {
    let mut aggregate = Billing::new_from_dto(&dto)
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e.to_message()))?;

    aggregate.before_write();
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

/// Обновление существующего платежа
///
/// Сервер возвращает полную обновленную запись: клиент использует её для
/// обновления локального кеша.
pub async fn update(id: Uuid, dto: BillingDto) -> anyhow::Result<Billing> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate
        .apply_dto(&dto)
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e.to_message()))?;

    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Мягкое удаление платежа
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

/// Получение платежа по ID
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Billing>> {
    repository::get_by_id(id).await
}

/// Получение списка всех платежей
pub async fn list_all() -> anyhow::Result<Vec<Billing>> {
    repository::list_all().await
}
