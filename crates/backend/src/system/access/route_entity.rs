use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Таблица "сегмент маршрута → логическое имя сущности"
///
/// Множественное число английских существительных не выводится
/// алгоритмически, поэтому соответствие задано явной таблицей, а не
/// эвристикой отрезания суффиксов.
static ROUTE_ENTITY_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("billings", "billing"),
        ("organizations", "organization"),
        ("users", "user"),
    ])
});

/// Нормализовать сегмент маршрута в имя сущности
///
/// Для известных сегментов возвращает значение из таблицы, для любых
/// остальных (включая пустую строку) — вход без изменений. Никогда не
/// завершается ошибкой.
pub fn route_to_entity(route: &str) -> &str {
    ROUTE_ENTITY_MAP.get(route).copied().unwrap_or(route)
}

/// Первый сегмент пути после "/api/"
pub fn api_route_segment(path: &str) -> &str {
    path.strip_prefix("/api/")
        .and_then(|rest| rest.split('/').next())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_segments_resolve_via_table() {
        assert_eq!(route_to_entity("billings"), "billing");
        assert_eq!(route_to_entity("organizations"), "organization");
        assert_eq!(route_to_entity("users"), "user");
    }

    #[test]
    fn test_unknown_segment_falls_through_unchanged() {
        assert_eq!(route_to_entity("invoices"), "invoices");
        assert_eq!(route_to_entity("billing"), "billing");
    }

    #[test]
    fn test_empty_string_is_identity() {
        assert_eq!(route_to_entity(""), "");
    }

    #[test]
    fn test_api_route_segment() {
        assert_eq!(api_route_segment("/api/billings"), "billings");
        assert_eq!(api_route_segment("/api/billings/abc-123"), "billings");
        assert_eq!(api_route_segment("/health"), "");
        assert_eq!(api_route_segment("/api/"), "");
    }
}
