//! Translation of list query parameters into a filter + sort description.
//!
//! The result is storage agnostic: the SeaORM repository renders it as SQL,
//! the in-memory repository evaluates it directly with [`TodoQuery::matches`]
//! and [`SortSpec::compare`]. Both must agree on ordering, including the
//! final `id` tie-break.

use std::cmp::Ordering;

use tracing::debug;

use super::domain::Todo;

/// Field used when the request does not name one.
pub const DEFAULT_SORT_FIELD: &str = "owner";

/// Raw query string of `GET /api/todos`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTodosParams {
    /// Case-insensitive substring of the owner.
    pub owner: Option<String>,
    /// Field to sort by.
    pub sortby: Option<String>,
    /// `asc` or `desc`.
    pub sortorder: Option<String>,
}

impl ListTodosParams {
    /// Build from decoded query pairs. A repeated key keeps its first value;
    /// unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "owner" => &mut params.owner,
                "sortby" => &mut params.sortby,
                "sortorder" => &mut params.sortorder,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Owner,
    Status,
    Category,
    Body,
}

impl SortField {
    /// Map a wire field name; `None` for names the entity does not have.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" | "_id" => Some(SortField::Id),
            "owner" => Some(SortField::Owner),
            "status" => Some(SortField::Status),
            "category" => Some(SortField::Category),
            "body" => Some(SortField::Body),
            _ => None,
        }
    }

    fn compare(&self, a: &Todo, b: &Todo) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Owner => a.owner.cmp(&b.owner),
            SortField::Status => a.status.cmp(&b.status),
            SortField::Category => a.category.cmp(&b.category),
            SortField::Body => a.body.cmp(&b.body),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Only the exact value `desc` is descending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// `None` when the requested field does not exist; only the tie-break applies then.
    pub field: Option<SortField>,
    pub order: SortOrder,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self { field: SortField::parse(DEFAULT_SORT_FIELD), order: SortOrder::Asc }
    }
}

impl SortSpec {
    /// Requested field in the requested direction, then `id` ascending.
    pub fn compare(&self, a: &Todo, b: &Todo) -> Ordering {
        let primary = match self.field {
            Some(field) => {
                let ord = field.compare(a, b);
                match self.order {
                    SortOrder::Asc => ord,
                    SortOrder::Desc => ord.reverse(),
                }
            }
            None => Ordering::Equal,
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoQuery {
    /// Needle for the owner containment match, as supplied (not lowercased).
    pub owner_contains: Option<String>,
    pub sort: SortSpec,
}

impl TodoQuery {
    pub fn from_params(params: &ListTodosParams) -> Self {
        let owner_contains = params.owner.as_ref().filter(|o| !o.is_empty()).cloned();

        let field_name = params.sortby.as_deref().unwrap_or(DEFAULT_SORT_FIELD);
        let field = SortField::parse(field_name);
        if field.is_none() {
            debug!(sortby = %field_name, "unknown sort field; only the id tie-break applies");
        }
        let order = SortOrder::parse(params.sortorder.as_deref());

        Self { owner_contains, sort: SortSpec { field, order } }
    }

    /// Lowercased needle, as compared against a lowercased owner.
    pub fn owner_needle(&self) -> Option<String> {
        self.owner_contains.as_ref().map(|o| o.to_lowercase())
    }

    /// Unanchored, case-insensitive, literal containment on `owner`.
    pub fn matches(&self, todo: &Todo) -> bool {
        match self.owner_needle() {
            Some(needle) => todo.owner.to_lowercase().contains(&needle),
            None => true,
        }
    }
}

/// Escape LIKE metacharacters so the needle is matched literally (escape char `\`).
pub fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
