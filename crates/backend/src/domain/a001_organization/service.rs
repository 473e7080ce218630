use super::repository;
use contracts::domain::a001_organization::aggregate::Organization;
use uuid::Uuid;

/// Получение списка организаций (с необязательным фильтром по имени)
///
/// Фильтр обслуживает виджет выбора организации на форме платежа.
pub async fn list_all(name_filter: Option<&str>) -> anyhow::Result<Vec<Organization>> {
    repository::list_all(name_filter).await
}

/// Получение организации по ID
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Organization>> {
    repository::get_by_id(id).await
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> anyhow::Result<()> {
    let names = [
        "ООО \"Рога и Копыта\"",
        "ИП Иванов И.И.",
        "АО \"Ромашка\"",
    ];

    for name in names {
        let mut aggregate = Organization::new_for_insert(name.to_string());
        aggregate
            .validate()
            .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
        aggregate.before_write();
        repository::insert(&aggregate).await?;
    }

    Ok(())
}
