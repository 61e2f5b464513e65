use async_trait::async_trait;
use sea_orm::{
    sea_query::{extension::postgres::PgExpr, Expr, LikeExpr},
    DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder, Select,
};
use uuid::Uuid;

use models::todo::{self, Entity as TodoEntity};
use crate::errors::ServiceError;
use crate::todo::{
    domain::{NewTodo, Todo},
    query::{escape_like, SortField, SortOrder, TodoQuery},
    repository::TodoRepository,
};

/// SeaORM-backed repository implementation.
pub struct SeaOrmTodoRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn column_for(field: SortField) -> todo::Column {
    match field {
        SortField::Id => todo::Column::Id,
        SortField::Owner => todo::Column::Owner,
        SortField::Status => todo::Column::Status,
        SortField::Category => todo::Column::Category,
        SortField::Body => todo::Column::Body,
    }
}

/// Build the SELECT for a list query: `owner ILIKE '%needle%'` plus ORDER BY.
///
/// Case folding happens on the database side for both operands.
pub fn select_for(query: &TodoQuery) -> Select<TodoEntity> {
    let mut finder = TodoEntity::find();

    if let Some(needle) = query.owner_contains.as_deref() {
        let pattern = format!("%{}%", escape_like(needle));
        finder = finder.filter(
            Expr::col((TodoEntity, todo::Column::Owner)).ilike(LikeExpr::new(pattern).escape('\\')),
        );
    }

    if let Some(field) = query.sort.field {
        let order = match query.sort.order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };
        finder = finder.order_by(column_for(field), order);
    }
    finder.order_by(todo::Column::Id, Order::Asc)
}

#[async_trait]
impl TodoRepository for SeaOrmTodoRepository {
    async fn list(&self, query: &TodoQuery) -> Result<Vec<Todo>, ServiceError> {
        let rows = select_for(query).all(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn insert(&self, new: NewTodo) -> Result<Todo, ServiceError> {
        let created = todo::create(&self.db, &new.owner, new.status, &new.category, &new.body).await?;
        Ok(created.into())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Todo>, ServiceError> {
        let found = todo::find(&self.db, id).await?;
        Ok(found.map(Todo::from))
    }
}
