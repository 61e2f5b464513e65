use std::sync::Arc;

use service::todo::{repository::TodoRepository, TodoService};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub todo_svc: Arc<TodoService<dyn TodoRepository>>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { todo_svc: Arc::new(TodoService::new(repo)) }
    }
}
