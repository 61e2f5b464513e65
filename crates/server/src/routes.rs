use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::metrics;
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod todos;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn metrics_text() -> (axum::http::StatusCode, String) {
    metrics::encode_metrics()
}

/// Build the full application router: todo API, health, metrics and docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    // Public routes (health + metrics + docs)
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_text))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // `/api/todos/:id` 按 id 查询单条 todo
    let api = Router::new()
        .route("/api/todos", get(todos::list).post(todos::create))
        .route("/api/todos/:id", get(todos::get));

    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
