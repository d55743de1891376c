use super::{
    handlers::{cpf, docs, health},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{Router, middleware, routing::get};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // CPF validation
        .route(
            "/api/v1/cpf/validate",
            get(cpf::validate_cpf_query).post(cpf::validate_cpf_body),
        )
        // Docs
        .route("/api/v1/docs", get(docs::api_docs))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
