//! Rules a create payload must satisfy before it is persisted.
//!
//! Rules run in declaration order and all of them are evaluated, so a
//! failure lists every offending field, first rule first.

use std::fmt;

use super::domain::{NewTodo, NewTodoPayload};

/// Field and message reported when a check fails.
pub struct ValidationRule {
    pub field: &'static str,
    pub message: &'static str,
}

/// Rule order is the reporting order; [`validate`] checks fields in the same order.
pub const RULES: [ValidationRule; 4] = [
    ValidationRule { field: "owner", message: "todo must have a non-empty owner" },
    ValidationRule { field: "status", message: "todo status must be a boolean value" },
    ValidationRule { field: "category", message: "todo must have a non-empty category" },
    ValidationRule { field: "body", message: "todo must have a non-empty body" },
];

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

impl From<&ValidationRule> for Violation {
    fn from(r: &ValidationRule) -> Self { Self { field: r.field, message: r.message } }
}

/// Every rule that failed, in rule order. Never empty when returned as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub violations: Vec<Violation>,
}

impl ValidationFailure {
    pub fn fields(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.field).collect()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.violations.iter().map(|v| v.message).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationFailure {}

/// Run every check and produce a typed todo ready for insertion.
pub fn validate(payload: NewTodoPayload) -> Result<NewTodo, ValidationFailure> {
    let NewTodoPayload { owner, status, category, body } = payload;
    let checked = (
        non_empty(owner),
        status.and_then(|v| v.as_bool()),
        non_empty(category),
        non_empty(body),
    );

    match checked {
        (Some(owner), Some(status), Some(category), Some(body)) => Ok(NewTodo { owner, status, category, body }),
        (owner, status, category, body) => {
            let passed = [owner.is_some(), status.is_some(), category.is_some(), body.is_some()];
            let violations = RULES
                .iter()
                .zip(passed)
                .filter(|(_, ok)| !ok)
                .map(|(rule, _)| Violation::from(rule))
                .collect();
            Err(ValidationFailure { violations })
        }
    }
}
