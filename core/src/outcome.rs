//! Classification of a completed response into a user-facing outcome.
//!
//! # Design
//! Every completed write request ends in exactly one `Outcome`. The only
//! piece of the body that matters is `errorCode`: `"23505"` is the
//! unique-constraint violation the server reports for a duplicate name.

use serde_json::Value;

/// Error code the server reports when a movie name already exists.
pub const UNIQUE_VIOLATION: &str = "23505";

pub const MSG_CREATED: &str = "Se ha creado con exito la pelicula";
pub const MSG_UPDATED: &str = "Se ha actualizado la pelicula con exito";
pub const MSG_GENERIC_ERROR: &str = "Error - Algo ha ocurrido mal";
pub const MSG_DUPLICATE_NAME: &str = "Error - Ya existe una pelicula con ese nombre";
pub const MSG_LIST_FAILED: &str = "Algo ha ocurrido mal";
pub const MSG_DELETE_FAILED: &str = "Ha ocurrido un error";

/// Result of one completed request as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 2xx. Carries the caller-supplied message.
    Success(String),
    /// Non-2xx with `errorCode == "23505"`.
    DuplicateName,
    /// Anything else, including unreadable bodies and transport failures.
    GenericError,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Success(msg) => msg,
            Outcome::DuplicateName => MSG_DUPLICATE_NAME,
            Outcome::GenericError => MSG_GENERIC_ERROR,
        }
    }
}

/// How the success range is tested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusCheck {
    /// `200 <= status < 300`.
    #[default]
    Strict,
    /// `status >= 200 || status < 300`, true for every status. Kept only to
    /// reproduce the old client exactly.
    Legacy,
}

impl StatusCheck {
    pub fn is_success(self, status: u16) -> bool {
        match self {
            StatusCheck::Strict => (200..300).contains(&status),
            StatusCheck::Legacy => status >= 200 || status < 300,
        }
    }
}

/// Map a status and (already parsed) body to an outcome.
///
/// `body` is `None` when there was no body or it could not be parsed; in
/// that case a failure can only be generic.
pub fn classify_response(
    status: u16,
    body: Option<&Value>,
    success_message: &str,
    check: StatusCheck,
) -> Outcome {
    if check.is_success(status) {
        return Outcome::Success(success_message.to_string());
    }
    let error_code = body
        .and_then(|b| b.get("errorCode"))
        .and_then(Value::as_str);
    if error_code == Some(UNIQUE_VIOLATION) {
        Outcome::DuplicateName
    } else {
        Outcome::GenericError
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn created_is_success_with_caller_message() {
        let outcome = classify_response(201, Some(&json!({})), "created", StatusCheck::Strict);
        assert_eq!(outcome, Outcome::Success("created".to_string()));
        assert_eq!(outcome.message(), "created");
    }

    #[test]
    fn conflict_with_unique_violation_is_duplicate() {
        let body = json!({"errorCode": "23505"});
        let outcome = classify_response(409, Some(&body), "created", StatusCheck::Strict);
        assert_eq!(outcome, Outcome::DuplicateName);
        assert_eq!(outcome.message(), MSG_DUPLICATE_NAME);
    }

    #[test]
    fn server_error_is_generic() {
        let outcome = classify_response(500, Some(&json!({})), "created", StatusCheck::Strict);
        assert_eq!(outcome, Outcome::GenericError);
        assert_eq!(outcome.message(), MSG_GENERIC_ERROR);
    }

    #[test]
    fn other_error_code_is_generic() {
        let body = json!({"errorCode": "22P02"});
        let outcome = classify_response(400, Some(&body), "created", StatusCheck::Strict);
        assert_eq!(outcome, Outcome::GenericError);
    }

    #[test]
    fn numeric_error_code_is_not_duplicate() {
        let body = json!({"errorCode": 23505});
        let outcome = classify_response(409, Some(&body), "created", StatusCheck::Strict);
        assert_eq!(outcome, Outcome::GenericError);
    }

    #[test]
    fn missing_body_is_generic() {
        assert_eq!(
            classify_response(502, None, "created", StatusCheck::Strict),
            Outcome::GenericError
        );
    }

    #[test]
    fn ok_is_success_under_both_checks() {
        for check in [StatusCheck::Strict, StatusCheck::Legacy] {
            let outcome = classify_response(200, Some(&json!({})), "updated", check);
            assert_eq!(outcome, Outcome::Success("updated".to_string()));
        }
    }

    #[test]
    fn legacy_check_accepts_every_status() {
        for status in [0, 100, 199, 200, 299, 300, 404, 409, 500, 599, u16::MAX] {
            assert!(StatusCheck::Legacy.is_success(status), "status {status}");
        }
        let body = json!({"errorCode": "23505"});
        assert!(classify_response(409, Some(&body), "created", StatusCheck::Legacy).is_success());
    }

    #[test]
    fn strict_check_bounds() {
        assert!(!StatusCheck::Strict.is_success(199));
        assert!(StatusCheck::Strict.is_success(200));
        assert!(StatusCheck::Strict.is_success(204));
        assert!(StatusCheck::Strict.is_success(299));
        assert!(!StatusCheck::Strict.is_success(300));
    }

    #[test]
    fn strict_is_default() {
        assert_eq!(StatusCheck::default(), StatusCheck::Strict);
    }
}
