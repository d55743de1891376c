use crate::{
    domain::cpf,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Default)]
pub struct ValidateQuery {
    pub cpf: Option<String>,
}

#[derive(Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub message: &'static str,
}

/// Map the validator's verdict to the wire representation: 200 for a valid
/// CPF, 400 for an invalid one, both with the same response shape.
fn verdict_response(candidate: &str) -> (StatusCode, Json<ValidationResponse>) {
    if cpf::is_valid(candidate) {
        tracing::debug!("CPF accepted");
        (
            StatusCode::OK,
            Json(ValidationResponse {
                valid: true,
                message: "CPF válido!",
            }),
        )
    } else {
        tracing::debug!("CPF rejected");
        (
            StatusCode::BAD_REQUEST,
            Json(ValidationResponse {
                valid: false,
                message: "CPF inválido!",
            }),
        )
    }
}

pub async fn validate_cpf_query(
    State(_state): State<AppState>,
    Query(params): Query<ValidateQuery>,
) -> Result<(StatusCode, Json<ValidationResponse>), AppError> {
    let candidate = params
        .cpf
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest("Por favor, informe o CPF.".into()))?;

    Ok(verdict_response(&candidate))
}

/// POST variant: the `cpf` query parameter wins if present and non-empty,
/// otherwise the raw request body is taken as the candidate, unmodified.
pub async fn validate_cpf_body(
    State(_state): State<AppState>,
    Query(params): Query<ValidateQuery>,
    body: String,
) -> Result<(StatusCode, Json<ValidationResponse>), AppError> {
    let candidate = params
        .cpf
        .filter(|c| !c.is_empty())
        .unwrap_or(body);

    if candidate.is_empty() {
        return Err(AppError::BadRequest("Por favor, informe o CPF.".into()));
    }

    Ok(verdict_response(&candidate))
}
