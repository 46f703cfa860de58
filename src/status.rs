use crate::{outcome::Outcome, reason::ReasonCode};
use hyper::StatusCode;

/// Largest value that is still a valid HTTP status.
const MAX_HTTP_STATUS: i32 = 599;

const INTERNAL_SERVER_ERROR: i32 = 500;

/// Maps an outcome to the numeric status reported at the boundary.
///
/// `UnknownError` and internal reasons above 599 (database and credential
/// failures) collapse into 500, every other reason keeps its own value.
pub fn project_status(outcome: &Outcome) -> i32 {
    project_reason(outcome.reason_code())
}

pub fn project_reason(reason: ReasonCode) -> i32 {
    match reason {
        ReasonCode::UnknownError => INTERNAL_SERVER_ERROR,
        reason if reason.value() > MAX_HTTP_STATUS => INTERNAL_SERVER_ERROR,
        reason => reason.value(),
    }
}

/// Typed form of [`project_status`] for the hyper boundary.
pub fn status_code(outcome: &Outcome) -> StatusCode {
    u16::try_from(project_status(outcome))
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
