use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use tracing::error;

use crate::metrics;

/// JSON error body: `{"error": title, "message": detail, "fields": [...]}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub message: Option<String>,
    pub fields: Option<Vec<&'static str>>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'a [&'static str]>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, message: Option<String>) -> Self {
        Self { status, title, message, fields: None }
    }

    pub fn with_fields(mut self, fields: Vec<&'static str>) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn internal(message: String) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(message))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.title,
            message: self.message.as_deref(),
            fields: self.fields.as_deref(),
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(failure) => {
                metrics::VALIDATION_FAILURES_TOTAL.inc();
                let fields = failure.fields();
                JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(failure.to_string()))
                    .with_fields(fields)
            }
            ServiceError::Model(models::errors::ModelError::Validation(msg)) => {
                metrics::VALIDATION_FAILURES_TOTAL.inc();
                JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg))
            }
            ServiceError::NotFound(msg) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            other => {
                metrics::STORAGE_ERRORS_TOTAL.inc();
                error!(err = %other, "storage operation failed");
                JsonApiError::internal(other.to_string())
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        metrics::VALIDATION_FAILURES_TOTAL.inc();
        JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid Payload", Some(rejection.body_text()))
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid Id", Some(rejection.body_text()))
    }
}

impl From<QueryRejection> for JsonApiError {
    fn from(rejection: QueryRejection) -> Self {
        JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid Query", Some(rejection.body_text()))
    }
}
