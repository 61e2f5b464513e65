use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "todo")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner: String,
    pub status: bool,
    pub category: String,
    pub body: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

fn require_text(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.is_empty() {
        return Err(errors::ModelError::Validation(format!("{field} required")));
    }
    Ok(())
}

/// Insert a todo; the id is generated here and never taken from the caller.
pub async fn create(
    db: &DatabaseConnection,
    owner: &str,
    status: bool,
    category: &str,
    body: &str,
) -> Result<Model, errors::ModelError> {
    require_text("owner", owner)?;
    require_text("category", category)?;
    require_text("body", body)?;

    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        owner: Set(owner.to_string()),
        status: Set(status),
        category: Set(category.to_string()),
        body: Set(body.to_string()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
