use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode, header},
};
use cpf_api::{
    config::Config,
    presentation::http::{routes::create_router, state::AppState},
};
use serde_json::Value;
use tower::ServiceExt;

fn test_app() -> Router {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    create_router(AppState { config })
}

async fn send(app: &Router, req: Request<Body>) -> Response<axum::body::Body> {
    app.clone().oneshot(req).await.expect("request failed")
}

async fn read_json(res: Response<axum::body::Body>) -> Value {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not valid JSON")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request")
}

#[tokio::test]
async fn valid_cpf_via_query_returns_ok_verdict() {
    let app = test_app();

    let res = send(&app, get("/api/v1/cpf/validate?cpf=11144477735")).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert_eq!(body["valid"], Value::Bool(true));
    assert_eq!(body["message"], "CPF válido!");
}

#[tokio::test]
async fn invalid_cpf_via_query_returns_bad_request_verdict() {
    let app = test_app();

    let res = send(&app, get("/api/v1/cpf/validate?cpf=11144477736")).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = read_json(res).await;
    assert_eq!(body["valid"], Value::Bool(false));
    assert_eq!(body["message"], "CPF inválido!");
}

#[tokio::test]
async fn formatted_cpf_is_rejected_not_normalized() {
    let app = test_app();

    let res = send(&app, get("/api/v1/cpf/validate?cpf=111.444.777-35")).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = read_json(res).await;
    assert_eq!(body["valid"], Value::Bool(false));
}

#[tokio::test]
async fn missing_candidate_is_reported_distinctly_from_invalid_cpf() {
    let app = test_app();

    for uri in ["/api/v1/cpf/validate", "/api/v1/cpf/validate?cpf="] {
        let res = send(&app, get(uri)).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body = read_json(res).await;
        assert_eq!(body["error"], "Por favor, informe o CPF.");
        assert!(
            body.get("valid").is_none(),
            "missing parameter must not produce a verdict body"
        );
    }
}

#[tokio::test]
async fn post_falls_back_to_raw_body_candidate() {
    let app = test_app();

    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/cpf/validate")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("11144477735"))
        .expect("failed to build request");
    let res = send(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert_eq!(body["valid"], Value::Bool(true));
}

#[tokio::test]
async fn post_query_parameter_wins_over_body() {
    let app = test_app();

    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/cpf/validate?cpf=11144477736")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("11144477735"))
        .expect("failed to build request");
    let res = send(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = read_json(res).await;
    assert_eq!(body["valid"], Value::Bool(false));
}

#[tokio::test]
async fn post_with_no_candidate_anywhere_is_a_caller_error() {
    let app = test_app();

    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/cpf/validate")
        .body(Body::empty())
        .expect("failed to build request");
    let res = send(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = read_json(res).await;
    assert_eq!(body["error"], "Por favor, informe o CPF.");
}

#[tokio::test]
async fn health_reports_status_and_version() {
    let app = test_app();

    let res = send(&app, get("/health")).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn docs_expose_validation_path() {
    let app = test_app();

    let res = send(&app, get("/api/v1/docs")).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = read_json(res).await;
    assert!(body["paths"]["/api/v1/cpf/validate"].is_object());
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = test_app();

    let res = send(&app, get("/health")).await;
    let request_id = res
        .headers()
        .get("x-request-id")
        .expect("missing x-request-id header");
    assert!(!request_id.is_empty());
}
