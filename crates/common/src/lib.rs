pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn error_body_serializes_both_fields() {
        let body = types::ErrorBody::new("Not Found", Some("product 7 not found".into()));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "Not Found");
        assert_eq!(json["message"], "product 7 not found");
    }

    #[test]
    fn error_body_omits_missing_message() {
        let body = types::ErrorBody::new("invalid credentials", None);
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("message").is_none());
    }
}
