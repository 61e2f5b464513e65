use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct TodoDoc {
    pub id: Uuid,
    pub owner: String,
    pub status: bool,
    pub category: String,
    pub body: String,
}

/// Create payload; `id` is assigned by the server and ignored if sent.
#[derive(ToSchema)]
pub struct NewTodoDoc {
    pub owner: String,
    pub status: bool,
    pub category: String,
    pub body: String,
}

#[derive(ToSchema)]
pub struct CreatedTodoDoc { pub id: Uuid }

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub message: Option<String>,
    pub fields: Option<Vec<String>>,
}

#[allow(dead_code)]
#[derive(utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTodosQueryDoc {
    /// Case-insensitive substring of the owner
    pub owner: Option<String>,
    /// Field to sort by: id, owner, status, category or body (default owner)
    pub sortby: Option<String>,
    /// `asc` (default) or `desc`
    pub sortorder: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::todos::list,
        crate::routes::todos::get,
        crate::routes::todos::create,
    ),
    components(
        schemas(
            HealthResponse,
            TodoDoc,
            NewTodoDoc,
            CreatedTodoDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "todos")
    )
)]
pub struct ApiDoc;
