use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::domain::{CreatedTodo, NewTodoPayload, Todo};
use super::query::{ListTodosParams, TodoQuery};
use super::repository::TodoRepository;
use super::validation;
use crate::errors::ServiceError;

/// Todo business service independent of web framework.
///
/// Holds no state besides the injected repository, so one instance is
/// shared by every request.
pub struct TodoService<R: TodoRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: TodoRepository + ?Sized> TodoService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// List todos matching the owner filter, sorted as requested.
    #[instrument(skip(self, params), fields(owner = ?params.owner, sortby = ?params.sortby, sortorder = ?params.sortorder))]
    pub async fn list(&self, params: &ListTodosParams) -> Result<Vec<Todo>, ServiceError> {
        let query = TodoQuery::from_params(params);
        let todos = self.repo.list(&query).await?;
        debug!(count = todos.len(), "todos_listed");
        Ok(todos)
    }

    /// Validate and persist a new todo, returning the storage-assigned id.
    ///
    /// # Examples
    /// ```
    /// use service::todo::{TodoService, domain::NewTodoPayload, repository::mock::InMemoryTodoRepository};
    /// use std::sync::Arc;
    /// let svc = TodoService::new(Arc::new(InMemoryTodoRepository::default()));
    /// let payload = NewTodoPayload {
    ///     owner: Some("Test Todo".into()),
    ///     status: Some(serde_json::Value::Bool(true)),
    ///     category: Some("testers".into()),
    ///     body: Some("x".into()),
    /// };
    /// let created = tokio_test::block_on(svc.create(payload)).unwrap();
    /// let stored = tokio_test::block_on(svc.get(created.id)).unwrap();
    /// assert_eq!(stored.owner, "Test Todo");
    /// ```
    #[instrument(skip(self, payload))]
    pub async fn create(&self, payload: NewTodoPayload) -> Result<CreatedTodo, ServiceError> {
        let new = validation::validate(payload).map_err(|failure| {
            warn!(fields = ?failure.fields(), "todo_validation_failed");
            failure
        })?;
        let created = self.repo.insert(new).await?;
        info!(id = %created.id, owner = %created.owner, "todo_created");
        Ok(CreatedTodo { id: created.id })
    }

    /// Fetch one todo by id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> Result<Todo, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("todo"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::repository::mock::{sample_todos, InMemoryTodoRepository};
    use serde_json::json;

    fn service() -> (Arc<InMemoryTodoRepository>, TodoService<InMemoryTodoRepository>) {
        let repo = Arc::new(InMemoryTodoRepository::with_todos(sample_todos()));
        (repo.clone(), TodoService::new(repo))
    }

    fn params(owner: Option<&str>, sortby: Option<&str>, sortorder: Option<&str>) -> ListTodosParams {
        ListTodosParams {
            owner: owner.map(Into::into),
            sortby: sortby.map(Into::into),
            sortorder: sortorder.map(Into::into),
        }
    }

    #[tokio::test]
    async fn list_without_filter_returns_whole_collection() {
        let (repo, svc) = service();
        let all = svc.list(&ListTodosParams::default()).await.unwrap();
        assert_eq!(all.len(), repo.len());
    }

    #[tokio::test]
    async fn list_with_owner_filter_returns_exact_subset() {
        let (repo, svc) = service();
        svc.create(serde_json::from_value(json!({"owner": "OHMNET", "category": "c", "body": "b", "status": true})).unwrap())
            .await
            .unwrap();
        assert_eq!(repo.len(), 5);

        let found = svc.list(&params(Some("ohm"), None, None)).await.unwrap();
        assert_eq!(found.len(), 1);
        assert!(found.iter().all(|t| t.owner.to_lowercase().contains("ohm")));
    }

    #[tokio::test]
    async fn list_desc_by_category() {
        let (_, svc) = service();
        let found = svc.list(&params(None, Some("category"), Some("desc"))).await.unwrap();
        let cats: Vec<&str> = found.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(cats, ["UMM", "OHMNET", "OHMNET", "IBM"]);
    }

    #[tokio::test]
    async fn list_is_idempotent() {
        let (_, svc) = service();
        let p = params(None, Some("name"), None);
        let first = svc.list(&p).await.unwrap();
        let second = svc.list(&p).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn list_with_no_match_is_empty_not_error() {
        let (_, svc) = service();
        let found = svc.list(&params(Some("nobody-has-this"), None, None)).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn create_then_get_round_trips_fields() {
        let (_, svc) = service();
        let payload = serde_json::from_value(json!({"owner": "Test Todo", "category": "testers", "body": "x", "status": true})).unwrap();
        let created = svc.create(payload).await.unwrap();
        let stored = svc.get(created.id).await.unwrap();
        assert_eq!(
            stored,
            Todo { id: created.id, owner: "Test Todo".into(), status: true, category: "testers".into(), body: "x".into() }
        );
    }

    #[tokio::test]
    async fn invalid_create_does_not_insert() {
        let (repo, svc) = service();
        let before = repo.len();
        let payload = serde_json::from_value(json!({"owner": "o", "category": "c", "body": "b"})).unwrap();
        let err = svc.create(payload).await.unwrap_err();
        match err {
            ServiceError::Validation(f) => assert_eq!(f.fields(), vec!["status"]),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(repo.len(), before);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let (_, svc) = service();
        assert!(matches!(svc.get(Uuid::new_v4()).await, Err(ServiceError::NotFound(_))));
    }
}
