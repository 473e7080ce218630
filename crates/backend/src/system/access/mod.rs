//! Entity-level access control
//!
//! - route_entity: нормализация сегмента маршрута в логическое имя сущности
//! - policy: решение о доступе по (service, entity, operation)
//! - middleware: axum-слой, который разбирает путь, проверяет JWT и политику
//!   и пишет строку аудита

pub mod middleware;
pub mod policy;
pub mod route_entity;
