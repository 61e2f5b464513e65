use axum::{
    extract::{rejection::{JsonRejection, PathRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use service::todo::{
    domain::{CreatedTodo, NewTodoPayload, Todo},
    query::ListTodosParams,
};
use tracing::info;
use uuid::Uuid;

use crate::{errors::JsonApiError, metrics, state::ServerState};

#[utoipa::path(
    get, path = "/api/todos", tag = "todos",
    params(crate::openapi::ListTodosQueryDoc),
    responses(
        (status = 200, description = "Matching todos", body = [crate::openapi::TodoDoc]),
        (status = 400, description = "Invalid Query", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Todo>>, JsonApiError> {
    // 重复的参数只取第一个值
    let Query(pairs) = query?;
    let params = ListTodosParams::from_pairs(pairs);
    metrics::LIST_REQUESTS_TOTAL.inc();
    let todos = state.todo_svc.list(&params).await?;
    info!(count = todos.len(), owner = ?params.owner, "list todos");
    Ok(Json(todos))
}

#[utoipa::path(
    get, path = "/api/todos/{id}", tag = "todos",
    params(("id" = Uuid, Path, description = "Todo id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::TodoDoc),
        (status = 400, description = "Invalid Id", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Todo>, JsonApiError> {
    let Path(id) = id?;
    let todo = state.todo_svc.get(id).await?;
    Ok(Json(todo))
}

#[utoipa::path(
    post, path = "/api/todos", tag = "todos",
    request_body = crate::openapi::NewTodoDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CreatedTodoDoc),
        (status = 400, description = "Invalid Payload or Validation Error", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Internal Server Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<NewTodoPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedTodo>), JsonApiError> {
    let Json(payload) = payload?;
    let created = state.todo_svc.create(payload).await?;
    metrics::CREATED_TOTAL.inc();
    info!(id = %created.id, "created todo");
    Ok((StatusCode::CREATED, Json(created)))
}
