use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Базовый агрегат с обязательными полями для всех агрегатов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Уникальный идентификатор записи
    pub id: Id,
    /// Метаданные жизненного цикла
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    /// Создать новый агрегат
    pub fn new(id: Id) -> Self {
        Self {
            id,
            metadata: EntityMetadata::new(),
        }
    }

    /// Создать агрегат с существующими метаданными (для загрузки из БД)
    pub fn with_metadata(id: Id, metadata: EntityMetadata) -> Self {
        Self { id, metadata }
    }

    /// Зафиксировать запись: обновить timestamp и поднять версию
    pub fn touch(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_bumps_version_and_updated_at() {
        let mut base = BaseAggregate::new(1u8);
        let before = base.metadata.updated_at;
        assert_eq!(base.metadata.version, 0);

        base.touch();
        base.touch();

        assert_eq!(base.metadata.version, 2);
        assert!(base.metadata.updated_at >= before);
    }
}
