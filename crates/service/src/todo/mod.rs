//! Todo module: domain types, query construction, validation, storage and service.

pub mod domain;
pub mod query;
pub mod validation;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::TodoService;
