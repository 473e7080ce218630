use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ошибки валидации формы с привязкой к полям
///
/// Правила проверяются все сразу на момент отправки формы: результат
/// содержит сообщение для каждого непрошедшего поля. Любая ошибка
/// блокирует отправку целиком.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить сообщение для поля
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }

    /// Сообщение для конкретного поля
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.errors.iter()
    }

    /// Склеить в одно сообщение (для серверных логов и ответов)
    pub fn to_message(&self) -> String {
        self.errors
            .iter()
            .map(|(field, msg)| format!("{}: {}", field, msg))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_by_default() {
        let errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.to_message(), "");
    }

    #[test]
    fn test_add_and_get() {
        let mut errors = ValidationErrors::new();
        errors.add("category", "обязательное поле");
        assert_eq!(errors.get("category"), Some("обязательное поле"));
        assert_eq!(errors.get("cost"), None);
        assert_eq!(errors.len(), 1);
    }
}
