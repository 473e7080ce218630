use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{api::handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/refresh",
            post(system::handlers::auth::refresh),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        // System auth routes (protected)
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // ========================================
        // BUSINESS ROUTES
        // ========================================
        // Каждый бизнес-роут проходит через проверку доступа: сегмент пути
        // во множественном числе сводится к имени сущности, по которому
        // определяется сервис и операция.
        // A002 Billing handlers
        .route(
            "/api/billings",
            get(handlers::a002_billing::list_all)
                .post(handlers::a002_billing::create)
                .layer(middleware::from_fn(
                    system::access::middleware::authorize_entity,
                )),
        )
        .route(
            "/api/billings/:id",
            get(handlers::a002_billing::get_by_id)
                .put(handlers::a002_billing::update_by_id)
                .delete(handlers::a002_billing::delete_by_id)
                .layer(middleware::from_fn(
                    system::access::middleware::authorize_entity,
                )),
        )
        // A001 Organization handlers
        .route(
            "/api/organizations",
            get(handlers::a001_organization::list_all).layer(middleware::from_fn(
                system::access::middleware::authorize_entity,
            )),
        )
        .route(
            "/api/organizations/testdata",
            post(handlers::a001_organization::insert_test_data).layer(middleware::from_fn(
                system::access::middleware::authorize_entity,
            )),
        )
        .route(
            "/api/organizations/:id",
            get(handlers::a001_organization::get_by_id).layer(middleware::from_fn(
                system::access::middleware::authorize_entity,
            )),
        )
}
