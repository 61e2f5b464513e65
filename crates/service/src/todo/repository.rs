use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{NewTodo, Todo};
use super::query::TodoQuery;
use crate::errors::ServiceError;

/// Storage abstraction for todos. Implementations assign ids on insert.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Every todo matching the filter, in the query's sort order.
    async fn list(&self, query: &TodoQuery) -> Result<Vec<Todo>, ServiceError>;
    async fn insert(&self, todo: NewTodo) -> Result<Todo, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<Todo>, ServiceError>;
}

/// In-memory repository for tests, benches and doc examples.
pub mod mock {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct InMemoryTodoRepository {
        todos: Mutex<Vec<Todo>>,
    }

    impl InMemoryTodoRepository {
        pub fn with_todos(todos: Vec<Todo>) -> Self {
            Self { todos: Mutex::new(todos) }
        }

        /// Number of stored todos.
        pub fn len(&self) -> usize {
            self.todos.lock().map(|t| t.len()).unwrap_or_default()
        }

        pub fn is_empty(&self) -> bool { self.len() == 0 }

        fn lock(&self) -> Result<MutexGuard<'_, Vec<Todo>>, ServiceError> {
            self.todos.lock().map_err(|_| ServiceError::Db("in-memory store poisoned".into()))
        }
    }

    #[async_trait]
    impl TodoRepository for InMemoryTodoRepository {
        async fn list(&self, query: &TodoQuery) -> Result<Vec<Todo>, ServiceError> {
            let todos = self.lock()?;
            let mut found: Vec<Todo> = todos.iter().filter(|t| query.matches(t)).cloned().collect();
            found.sort_by(|a, b| query.sort.compare(a, b));
            Ok(found)
        }

        async fn insert(&self, todo: NewTodo) -> Result<Todo, ServiceError> {
            let created = todo.into_todo(Uuid::new_v4());
            self.lock()?.push(created.clone());
            Ok(created)
        }

        async fn get(&self, id: Uuid) -> Result<Option<Todo>, ServiceError> {
            Ok(self.lock()?.iter().find(|t| t.id == id).cloned())
        }
    }

    /// Four todos: Chris, Pat, Jamie and Sam; the last two are in `OHMNET`.
    pub fn sample_todos() -> Vec<Todo> {
        let t = |owner: &str, category: &str, body: &str, status: bool| Todo {
            id: Uuid::new_v4(),
            owner: owner.into(),
            status,
            category: category.into(),
            body: body.into(),
        };
        vec![
            t("Chris", "UMM", "chris@this.that", false),
            t("Pat", "IBM", "pat@something.com", false),
            t("Jamie", "OHMNET", "jamie@frogs.com", true),
            t("Sam", "OHMNET", "sam@frogs.com", true),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{sample_todos, InMemoryTodoRepository};
    use super::*;
    use crate::todo::query::{ListTodosParams, SortField, SortOrder, SortSpec};

    fn new_todo(owner: &str) -> NewTodo {
        NewTodo { owner: owner.into(), status: false, category: "c".into(), body: "b".into() }
    }

    #[tokio::test]
    async fn insert_assigns_unique_ids() {
        let repo = InMemoryTodoRepository::default();
        let a = repo.insert(new_todo("a")).await.unwrap();
        let b = repo.insert(new_todo("a")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.get(a.id).await.unwrap(), Some(a));
        assert_eq!(repo.get(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_filters_and_sorts() {
        let repo = InMemoryTodoRepository::with_todos(sample_todos());
        let mut query = TodoQuery::from_params(&ListTodosParams::default());
        let all = repo.list(&query).await.unwrap();
        let owners: Vec<&str> = all.iter().map(|t| t.owner.as_str()).collect();
        assert_eq!(owners, ["Chris", "Jamie", "Pat", "Sam"]);

        query.sort = SortSpec { field: Some(SortField::Owner), order: SortOrder::Desc };
        let owners: Vec<String> = repo.list(&query).await.unwrap().into_iter().map(|t| t.owner).collect();
        assert_eq!(owners, ["Sam", "Pat", "Jamie", "Chris"]);

        query.owner_contains = Some("A".into());
        let owners: Vec<String> = repo.list(&query).await.unwrap().into_iter().map(|t| t.owner).collect();
        assert_eq!(owners, ["Sam", "Pat", "Jamie"]);
    }
}
