//! Request schemas
//!
//! All request schemas implement `Deserialize` and `Validate` for input
//! validation.

use serde::Deserialize;
use validator::Validate;

/// Signup/signin request
///
/// `password` is accepted as any string here; strength rules belong to the
/// service that hashes it.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserAuth {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> UserAuth {
        serde_json::from_str(json).expect("valid JSON shape")
    }

    #[test]
    fn test_accepts_well_formed_email() {
        let request = parse(r#"{"email": "a@b.com", "password": "x"}"#);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_email_naming_the_field() {
        let request = parse(r#"{"email": "not-an-email", "password": "x"}"#);

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(!fields.contains_key("password"));
    }

    #[test]
    fn test_password_has_no_constraints() {
        let request = parse(r#"{"email": "a@b.com", "password": ""}"#);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validation_error_flows_into_app_error() {
        use auth_common::AppError;

        let request = parse(r#"{"email": "not-an-email", "password": "x"}"#);
        let err = AppError::from(request.validate().unwrap_err());

        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(
            err.to_string(),
            "Validation error: email: Invalid email format"
        );
    }

    #[test]
    fn test_missing_field_fails_deserialization() {
        let result: Result<UserAuth, _> = serde_json::from_str(r#"{"email": "a@b.com"}"#);
        assert!(result.is_err());
    }
}
