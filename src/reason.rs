use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Symbolic reason attached to every outcome.
///
/// Values are chosen to coincide with HTTP status codes where such a code
/// exists. Values above 599 are internal (database-specific or credential
/// failures) and have no status of their own, see [`crate::status::project_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReasonCode {
    /// Failure with no better classification.
    UnknownError,

    /// 200 OK
    /// [[RFC7231, Section 6.3.1](https://tools.ietf.org/html/rfc7231#section-6.3.1)]
    Success,

    /// 201 Created
    /// [[RFC7231, Section 6.3.2](https://tools.ietf.org/html/rfc7231#section-6.3.2)]
    Created,

    /// 202 Accepted
    /// [[RFC7231, Section 6.3.3](https://tools.ietf.org/html/rfc7231#section-6.3.3)]
    Accepted,

    /// 204 No Content
    /// [[RFC7231, Section 6.3.5](https://tools.ietf.org/html/rfc7231#section-6.3.5)]
    NoContent,

    /// 400 Bad Request
    /// [[RFC7231, Section 6.5.1](https://tools.ietf.org/html/rfc7231#section-6.5.1)]
    BadRequest,

    /// 401 Unauthorized
    /// [[RFC7235, Section 3.1](https://tools.ietf.org/html/rfc7235#section-3.1)]
    Unauthorized,

    /// 403 Forbidden
    /// [[RFC7231, Section 6.5.3](https://tools.ietf.org/html/rfc7231#section-6.5.3)]
    Forbidden,

    /// 404 Not Found
    /// [[RFC7231, Section 6.5.4](https://tools.ietf.org/html/rfc7231#section-6.5.4)]
    NotFound,

    /// 406 Not Acceptable
    NotAcceptable,

    /// 408 Request Timeout
    RequestTimeout,

    /// 409 Conflict
    /// [[RFC7231, Section 6.5.8](https://tools.ietf.org/html/rfc7231#section-6.5.8)]
    Conflict,

    /// 500 Internal Server Error
    /// https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/500
    InternalServerError,

    /// 502 Bad Gateway
    BadGateway,

    /// 503 Service Unavailable
    ServiceUnavailable,

    /// 504 Gateway Timeout
    GatewayTimeout,

    /// 511 Network Authentication Required, used for network timeouts.
    NetworkTimeout,

    /// 600, the referenced row does not exist.
    NotExist,

    /// 601, a unique constraint rejected the write.
    UniqueConstraintViolation,

    /// 602, a foreign key constraint rejected the write.
    ForeignKeyViolation,

    /// 801, credentials were supplied but did not match.
    WrongCredential,
}

impl ReasonCode {
    /// Every known reason code, in ascending numeric order.
    pub const ALL: [ReasonCode; 21] = [
        ReasonCode::UnknownError,
        ReasonCode::Success,
        ReasonCode::Created,
        ReasonCode::Accepted,
        ReasonCode::NoContent,
        ReasonCode::BadRequest,
        ReasonCode::Unauthorized,
        ReasonCode::Forbidden,
        ReasonCode::NotFound,
        ReasonCode::NotAcceptable,
        ReasonCode::RequestTimeout,
        ReasonCode::Conflict,
        ReasonCode::InternalServerError,
        ReasonCode::BadGateway,
        ReasonCode::ServiceUnavailable,
        ReasonCode::GatewayTimeout,
        ReasonCode::NetworkTimeout,
        ReasonCode::NotExist,
        ReasonCode::UniqueConstraintViolation,
        ReasonCode::ForeignKeyViolation,
        ReasonCode::WrongCredential,
    ];

    /// Returns numeric value and short name of the reason.
    pub fn get_code_message(&self) -> (i32, &'static str) {
        match *self {
            ReasonCode::UnknownError => (0, "Unknown Error"),
            ReasonCode::Success => (200, "OK"),
            ReasonCode::Created => (201, "Created"),
            ReasonCode::Accepted => (202, "Accepted"),
            ReasonCode::NoContent => (204, "No Content"),
            ReasonCode::BadRequest => (400, "Bad Request"),
            ReasonCode::Unauthorized => (401, "Unauthorized"),
            ReasonCode::Forbidden => (403, "Forbidden"),
            ReasonCode::NotFound => (404, "Not Found"),
            ReasonCode::NotAcceptable => (406, "Not Acceptable"),
            ReasonCode::RequestTimeout => (408, "Request Timeout"),
            ReasonCode::Conflict => (409, "Conflict"),
            ReasonCode::InternalServerError => (500, "Internal Server Error"),
            ReasonCode::BadGateway => (502, "Bad Gateway"),
            ReasonCode::ServiceUnavailable => (503, "Service Unavailable"),
            ReasonCode::GatewayTimeout => (504, "Gateway Timeout"),
            ReasonCode::NetworkTimeout => (511, "Network Timeout"),
            ReasonCode::NotExist => (600, "Not Exist"),
            ReasonCode::UniqueConstraintViolation => (601, "Unique Constraint Violation"),
            ReasonCode::ForeignKeyViolation => (602, "Foreign Key Violation"),
            ReasonCode::WrongCredential => (801, "Wrong Credential"),
        }
    }

    /// Numeric value of the reason.
    pub fn value(&self) -> i32 {
        self.get_code_message().0
    }

    /// Reasons a successful outcome may carry.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            ReasonCode::Success | ReasonCode::Created | ReasonCode::Accepted | ReasonCode::NoContent
        )
    }

    /// Success reasons that promise a payload.
    pub fn carries_content(&self) -> bool {
        matches!(self, ReasonCode::Success | ReasonCode::Created)
    }
}

impl Default for ReasonCode {
    fn default() -> Self {
        Self::UnknownError
    }
}

impl Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::ReasonCode;

    #[test]
    fn test_values_match_http_statuses() {
        assert_eq!(ReasonCode::Success.value(), 200);
        assert_eq!(ReasonCode::Created.value(), 201);
        assert_eq!(ReasonCode::NoContent.value(), 204);
        assert_eq!(ReasonCode::NotFound.value(), 404);
        assert_eq!(ReasonCode::ServiceUnavailable.value(), 503);
        assert_eq!(ReasonCode::UniqueConstraintViolation.value(), 601);
        assert_eq!(ReasonCode::ForeignKeyViolation.value(), 602);
        assert_eq!(ReasonCode::UnknownError.value(), 0);
    }

    #[test]
    fn test_all_is_sorted_and_unique() {
        let values: Vec<i32> = ReasonCode::ALL.iter().map(ReasonCode::value).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_success_classes() {
        let success: Vec<ReasonCode> = ReasonCode::ALL
            .into_iter()
            .filter(ReasonCode::is_success)
            .collect();
        assert_eq!(
            success,
            vec![
                ReasonCode::Success,
                ReasonCode::Created,
                ReasonCode::Accepted,
                ReasonCode::NoContent
            ]
        );

        assert!(ReasonCode::Created.carries_content());
        assert!(!ReasonCode::Accepted.carries_content());
        assert!(!ReasonCode::NoContent.carries_content());
        assert!(!ReasonCode::BadRequest.carries_content());
    }

    #[test]
    fn test_serializes_by_name() {
        let json = serde_json::to_string(&ReasonCode::UniqueConstraintViolation).unwrap();
        assert_eq!(json, "\"UniqueConstraintViolation\"");
        assert_eq!(ReasonCode::BadRequest.to_string(), "BadRequest");
    }
}
