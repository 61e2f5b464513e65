//! Pieces shared by every crate in the workspace: logging bootstrap and
//! small wire types that are not owned by a single layer.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn health_serializes_as_status_object() {
        let v = serde_json::to_value(types::Health::ok()).unwrap();
        assert_eq!(v, serde_json::json!({"status": "ok"}));
    }
}
