use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use contracts::system::auth::TokenClaims;

/// Claims аутентифицированного пользователя в хендлере
///
/// Claims кладет в extensions auth- или access-middleware; хендлер на
/// роуте без такого слоя получит UNAUTHORIZED.
pub struct AuthenticatedUser(pub TokenClaims);

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<TokenClaims>() {
            Some(claims) => Ok(AuthenticatedUser(claims.clone())),
            None => Err(StatusCode::UNAUTHORIZED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn claims() -> TokenClaims {
        TokenClaims {
            sub: "user-1".to_string(),
            username: "admin".to_string(),
            is_admin: true,
            exp: 0,
            iat: 0,
        }
    }

    #[tokio::test]
    async fn test_extracts_claims_placed_by_middleware() {
        let request = Request::builder()
            .uri("/api/billings")
            .extension(claims())
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let extracted = AuthenticatedUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(extracted.0.username, "admin");
    }

    #[tokio::test]
    async fn test_rejects_request_without_claims() {
        let request = Request::builder().uri("/api/billings").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let result = AuthenticatedUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(StatusCode::UNAUTHORIZED)));
    }
}
