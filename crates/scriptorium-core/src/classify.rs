use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter};

use crate::{ApiError, ErrorCode};

const GENERIC_START: i64 = 1000;
const AUTH_START: i64 = 2000;
const AUTH_END: i64 = 3000;
const SYSTEM_START: i64 = 5000;

/// Category used to route an error in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Expected domain rule violation, shown with a retry affordance
    Business,
    /// Session is no longer valid, forces re-authentication
    Auth,
    /// Infrastructure failure, including network and timeout
    System,
    /// Success sentinel and anything outside the known ranges
    Other,
}

impl ErrorKind {
    /// Whether the UI may offer a retry for this kind of error
    pub const fn allows_retry(self) -> bool {
        !matches!(self, Self::Auth)
    }
}

/// Literal HTTP status values live below the generic range
const fn is_http_literal(raw: i64) -> bool {
    raw >= 400 && raw < 600
}

/// Whether the code falls in the business range
///
/// Uses the inherited `[1000, 5000)` test, which also covers the auth range:
/// `is_business_error` and `is_auth_error` are not mutually exclusive. Use
/// [`classify`] when a single answer is needed.
pub const fn is_business_error(code: ErrorCode) -> bool {
    let raw = code.get();
    (raw >= GENERIC_START && raw < SYSTEM_START) || (is_http_literal(raw) && raw < 500)
}

/// Whether the code signals an invalid session
pub const fn is_auth_error(code: ErrorCode) -> bool {
    let raw = code.get();
    (raw >= AUTH_START && raw < AUTH_END) || raw == ErrorCode::HTTP_UNAUTHORIZED.get()
}

/// Whether the code is an infrastructure failure
pub const fn is_system_error(code: ErrorCode) -> bool {
    let raw = code.get();
    raw >= SYSTEM_START || (is_http_literal(raw) && raw >= 500)
}

/// Single category for a code; auth is checked first
pub const fn classify(code: ErrorCode) -> ErrorKind {
    if is_auth_error(code) {
        ErrorKind::Auth
    } else if is_system_error(code) {
        ErrorKind::System
    } else if is_business_error(code) {
        ErrorKind::Business
    } else {
        ErrorKind::Other
    }
}

/// Translate an HTTP status into its taxonomy code
///
/// Unmapped statuses, including unknown 4xx and 5xx, become `UNKNOWN_ERROR`.
pub const fn code_from_http_status(status: u16) -> ErrorCode {
    match status {
        400 => ErrorCode::HTTP_BAD_REQUEST,
        401 => ErrorCode::HTTP_UNAUTHORIZED,
        403 => ErrorCode::HTTP_FORBIDDEN,
        404 => ErrorCode::HTTP_NOT_FOUND,
        405 => ErrorCode::HTTP_METHOD_NOT_ALLOWED,
        409 => ErrorCode::HTTP_CONFLICT,
        422 => ErrorCode::HTTP_UNPROCESSABLE_ENTITY,
        429 => ErrorCode::HTTP_TOO_MANY_REQUESTS,
        500 => ErrorCode::HTTP_INTERNAL_SERVER_ERROR,
        502 => ErrorCode::HTTP_BAD_GATEWAY,
        503 => ErrorCode::HTTP_SERVICE_UNAVAILABLE,
        504 => ErrorCode::HTTP_GATEWAY_TIMEOUT,
        _ => ErrorCode::UNKNOWN_ERROR,
    }
}

/// `"{message}: {details}"` when details are present, else the message
pub fn format_for_display(error: &ApiError) -> String {
    match error.details() {
        Some(details) => format!("{}: {details}", error.message()),
        None => error.message().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::CATALOG;

    #[test]
    fn auth_codes_are_also_business_codes() {
        assert!(is_auth_error(ErrorCode::TOKEN_EXPIRED));
        assert!(is_business_error(ErrorCode::TOKEN_EXPIRED));
        assert_eq!(classify(ErrorCode::TOKEN_EXPIRED), ErrorKind::Auth);
    }

    #[test]
    fn ranges_cover_everything_from_generic_start() {
        for raw in [1000, 1999, 2000, 2999, 3000, 4999, 5000, 5999, 6000, 100_000] {
            let code = ErrorCode::new(raw);
            assert!(
                is_business_error(code) || is_system_error(code),
                "{raw} is not covered by any range"
            );
            assert_ne!(classify(code), ErrorKind::Other);
        }
    }

    #[test]
    fn business_and_system_ranges_are_disjoint() {
        for entry in CATALOG {
            assert!(
                !(is_business_error(entry.code) && is_system_error(entry.code)),
                "{} is both business and system",
                entry.name
            );
        }
    }

    #[test]
    fn classifies_representative_codes() {
        assert_eq!(classify(ErrorCode::VALIDATION_FAILED), ErrorKind::Business);
        assert_eq!(classify(ErrorCode::PROJECT_NOT_FOUND), ErrorKind::Business);
        assert_eq!(classify(ErrorCode::DATABASE_ERROR), ErrorKind::System);
        assert_eq!(classify(ErrorCode::NETWORK_ERROR), ErrorKind::System);
        assert_eq!(classify(ErrorCode::SUCCESS), ErrorKind::Other);
        assert_eq!(classify(ErrorCode::new(0)), ErrorKind::Other);
    }

    #[test]
    fn http_literals_classify_by_status_class() {
        assert_eq!(classify(ErrorCode::HTTP_UNAUTHORIZED), ErrorKind::Auth);
        assert_eq!(classify(ErrorCode::HTTP_FORBIDDEN), ErrorKind::Business);
        assert_eq!(classify(ErrorCode::HTTP_NOT_FOUND), ErrorKind::Business);
        assert_eq!(classify(ErrorCode::HTTP_BAD_GATEWAY), ErrorKind::System);
        assert!(is_business_error(ErrorCode::HTTP_UNAUTHORIZED));
    }

    #[test]
    fn maps_every_documented_status() {
        let table = [
            (400, ErrorCode::HTTP_BAD_REQUEST),
            (401, ErrorCode::HTTP_UNAUTHORIZED),
            (403, ErrorCode::HTTP_FORBIDDEN),
            (404, ErrorCode::HTTP_NOT_FOUND),
            (405, ErrorCode::HTTP_METHOD_NOT_ALLOWED),
            (409, ErrorCode::HTTP_CONFLICT),
            (422, ErrorCode::HTTP_UNPROCESSABLE_ENTITY),
            (429, ErrorCode::HTTP_TOO_MANY_REQUESTS),
            (500, ErrorCode::HTTP_INTERNAL_SERVER_ERROR),
            (502, ErrorCode::HTTP_BAD_GATEWAY),
            (503, ErrorCode::HTTP_SERVICE_UNAVAILABLE),
            (504, ErrorCode::HTTP_GATEWAY_TIMEOUT),
        ];

        for (status, expected) in table {
            assert_eq!(code_from_http_status(status), expected, "status {status}");
            assert_eq!(code_from_http_status(status).get(), i64::from(status));
        }
    }

    #[test]
    fn unmapped_status_is_unknown() {
        for status in [0, 100, 200, 302, 402, 418, 451, 501, 599, u16::MAX] {
            assert_eq!(code_from_http_status(status), ErrorCode::UNKNOWN_ERROR);
        }
    }

    #[test]
    fn only_auth_refuses_retry() {
        for kind in ErrorKind::iter() {
            assert_eq!(kind.allows_retry(), kind != ErrorKind::Auth);
        }
    }

    #[test]
    fn formats_with_and_without_details() {
        let with = ApiError::new(ErrorCode::OPERATION_FAILED, "M").with_details("D");
        assert_eq!(format_for_display(&with), "M: D");

        let without = ApiError::new(ErrorCode::OPERATION_FAILED, "M");
        assert_eq!(format_for_display(&without), "M");
    }

    #[test]
    fn kind_displays_snake_case() {
        assert_eq!(ErrorKind::Business.to_string(), "business");
        assert_eq!(ErrorKind::Auth.as_ref(), "auth");
    }
}
