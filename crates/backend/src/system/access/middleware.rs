use axum::{
    body::Body,
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use contracts::system::access::{AccessOperation, AccessService};

use super::policy::check_access;
use super::route_entity::{api_route_segment, route_to_entity};

fn operation_for_method(method: &Method) -> AccessOperation {
    match *method {
        Method::POST => AccessOperation::Create,
        Method::PUT => AccessOperation::Update,
        Method::DELETE => AccessOperation::Delete,
        _ => AccessOperation::Read,
    }
}

/// Middleware that authorizes business routes per entity
///
/// Имя сущности берется из сегмента пути через route_to_entity, операция —
/// из HTTP-метода. Каждый пропущенный запрос получает строку аудита.
pub async fn authorize_entity(mut req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let claims = crate::system::auth::jwt::validate_token(token)
        .await
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let path = req.uri().path().to_string();
    let entity = route_to_entity(api_route_segment(&path)).to_string();
    let service = AccessService::of_entity(&entity);
    let operation = operation_for_method(req.method());

    if !check_access(&claims, service, &entity, operation) {
        tracing::warn!(
            user = %claims.username,
            service = %service.as_str(),
            entity = %entity,
            operation = %operation.as_str(),
            path = %path,
            "access denied"
        );
        return Err(StatusCode::FORBIDDEN);
    }

    tracing::info!(
        user = %claims.username,
        service = %service.as_str(),
        entity = %entity,
        operation = %operation.as_str(),
        path = %path,
        "access granted"
    );

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
