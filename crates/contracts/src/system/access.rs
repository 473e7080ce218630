use serde::{Deserialize, Serialize};

/// Сервис, к которому относится проверяемая сущность
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessService {
    /// Бизнес-сущности проекта (организации, платежи)
    Project,
    /// Системные сущности (пользователи)
    System,
}

/// Операция, на которую запрашивается доступ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessOperation {
    Create,
    Read,
    Update,
    Delete,
}

impl AccessOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessOperation::Create => "CREATE",
            AccessOperation::Read => "READ",
            AccessOperation::Update => "UPDATE",
            AccessOperation::Delete => "DELETE",
        }
    }
}

impl AccessService {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessService::Project => "PROJECT",
            AccessService::System => "SYSTEM",
        }
    }

    /// К какому сервису относится логическое имя сущности
    pub fn of_entity(entity: &str) -> AccessService {
        match entity {
            "user" => AccessService::System,
            _ => AccessService::Project,
        }
    }
}
