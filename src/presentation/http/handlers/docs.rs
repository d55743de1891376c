use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "CPF Validator API",
            "version": "1.0.0"
        },
        "paths": {
            "/health": { "get": { "summary": "Health check" } },
            "/api/v1/cpf/validate": {
                "get": { "summary": "Validate a CPF passed as the `cpf` query parameter" },
                "post": { "summary": "Validate a CPF from the `cpf` query parameter or, failing that, the raw request body" }
            },
            "/api/v1/docs": { "get": { "summary": "OpenAPI spec" } }
        }
    }))
}
