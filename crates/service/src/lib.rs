//! Service layer for the todo resource.
//! - `todo::query` turns raw list parameters into a filter + sort description.
//! - `todo::validation` holds the ordered rules a new todo must pass.
//! - `todo::repository` abstracts storage; SeaORM and in-memory backends live beside it.
//! - `todo::service` composes the above and is what HTTP handlers call.

pub mod errors;
pub mod todo;
#[cfg(test)]
pub mod test_support;
