//! Canonical user-facing messages shared by services producing outcomes.

pub const AN_ERROR_OCCURRED: &str = "An error occurred.";

pub const OTHER_RESULT_MISSING: &str = "Other result was null.";

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

pub const ALREADY_EXISTS: &str = "Already Exist";

pub const UNKNOWN_ERROR: &str = "Unknown Error occured, please check logs for more details";

pub const SERVER_TIMEOUT: &str = "Timeout expired before response received";

pub const LOGIN_EXPIRED: &str = "Login expired, please login again";

pub const INVALID_CREDENTIALS: &str = "Invalid User Id or Password, Please try again";

pub const LOGIN_RETRIES_EXCEEDED: &str = "Login retries exceeded, please try later";

pub const USER_LOCKED: &str =
    "This user has been locked, please wait or contact to administrator to reset it.";

pub const UNAUTHORIZED_OPERATION: &str = "You are not authorized to perform this operation";

/// Message for a missing entity, e.g. `does_not_exist("Person 7")`.
pub fn does_not_exist(what: impl std::fmt::Display) -> String {
    format!("{} does not exist", what)
}
