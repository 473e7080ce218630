use contracts::system::access::{AccessOperation, AccessService};
use contracts::system::auth::TokenClaims;

/// Решение о доступе по (service, entity, operation)
///
/// Администратор имеет доступ везде. Обычный пользователь работает только
/// с бизнес-сущностями проекта; системные сущности (user) требуют прав
/// администратора. Имя сущности входит в сигнатуру ради строки аудита и
/// будущей детализации политики.
pub fn check_access(
    claims: &TokenClaims,
    service: AccessService,
    _entity: &str,
    _operation: AccessOperation,
) -> bool {
    if claims.is_admin {
        return true;
    }
    matches!(service, AccessService::Project)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(is_admin: bool) -> TokenClaims {
        TokenClaims {
            sub: "user-1".to_string(),
            username: "user".to_string(),
            is_admin,
            exp: 0,
            iat: 0,
        }
    }

    #[test]
    fn test_admin_allowed_everywhere() {
        let c = claims(true);
        assert!(check_access(&c, AccessService::Project, "billing", AccessOperation::Create));
        assert!(check_access(&c, AccessService::System, "user", AccessOperation::Delete));
    }

    #[test]
    fn test_regular_user_allowed_on_project_entities() {
        let c = claims(false);
        assert!(check_access(&c, AccessService::Project, "billing", AccessOperation::Create));
        assert!(check_access(&c, AccessService::Project, "organization", AccessOperation::Read));
    }

    #[test]
    fn test_regular_user_denied_on_system_entities() {
        let c = claims(false);
        assert!(!check_access(&c, AccessService::System, "user", AccessOperation::Update));
    }

    #[test]
    fn test_service_of_entity() {
        assert_eq!(AccessService::of_entity("user"), AccessService::System);
        assert_eq!(AccessService::of_entity("billing"), AccessService::Project);
    }
}
