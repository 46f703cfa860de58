use crate::{error::OutcomeError, fault::CapturedError, reason::ReasonCode};
use log::warn;
use serde::Serialize;
use std::future::Future;

/// Result of an operation, reduced to data.
///
/// An outcome either succeeded with a success reason (`Success`, `Created`,
/// `Accepted`, `NoContent`) or failed with any other reason. Failures carry a
/// message meant for end users, a detail message meant for developers and
/// optionally the fault that caused them.
///
/// ```rust
/// use verdict::{Outcome, ReasonCode};
///
/// let outcome = Outcome::failure_with("Bad input", ReasonCode::BadRequest);
/// assert!(outcome.is_failed());
/// assert_eq!(outcome.detail_message(), Some("Bad input"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    succeeded: bool,
    reason_code: ReasonCode,
    user_message: Option<String>,
    detail_message: Option<String>,
    #[serde(skip)]
    fault: Option<CapturedError>,
}

impl Outcome {
    /// Successful outcome with `ReasonCode::Success` and no messages.
    pub fn success() -> Self {
        Self {
            succeeded: true,
            reason_code: ReasonCode::Success,
            user_message: None,
            detail_message: None,
            fault: None,
        }
    }

    /// Successful outcome with the given success reason.
    pub fn try_success_with(reason: ReasonCode) -> Result<Self, OutcomeError> {
        if !reason.is_success() {
            return Err(OutcomeError::NotASuccessReason { reason });
        }
        Ok(Self {
            reason_code: reason,
            ..Self::success()
        })
    }

    /// Failure classified as `ReasonCode::UnknownError`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::failure_with(message, ReasonCode::UnknownError)
    }

    pub fn failure_with(message: impl Into<String>, reason: ReasonCode) -> Self {
        let message = message.into();
        Self::failure_detailed(message.clone(), message, reason, None)
    }

    pub fn failure_with_fault(
        message: impl Into<String>,
        reason: ReasonCode,
        fault: CapturedError,
    ) -> Self {
        let message = message.into();
        Self::failure_detailed(message.clone(), message, reason, Some(fault))
    }

    /// Create a failure, panicking if `reason` is a success reason.
    pub fn failure_detailed(
        message: impl Into<String>,
        detail: impl Into<String>,
        reason: ReasonCode,
        fault: Option<CapturedError>,
    ) -> Self {
        match Self::try_failure_detailed(message, detail, reason, fault) {
            Ok(value) => value,
            Err(err) => panic!("failure outcomes must satisfy validation: {err}"),
        }
    }

    /// Full failure constructor every other failure constructor funnels into.
    pub fn try_failure_detailed(
        message: impl Into<String>,
        detail: impl Into<String>,
        reason: ReasonCode,
        fault: Option<CapturedError>,
    ) -> Result<Self, OutcomeError> {
        if reason.is_success() {
            warn!("rejected failure outcome with success reason {}", reason);
            return Err(OutcomeError::NotAFailureReason { reason });
        }
        Ok(Self {
            succeeded: false,
            reason_code: reason,
            user_message: Some(message.into()),
            detail_message: Some(detail.into()),
            fault,
        })
    }

    /// Internal server error describing `err`, with the whole chain captured.
    pub fn from_error(err: &anyhow::Error) -> Self {
        let fault = CapturedError::from(err);
        let detail = fault.trace().unwrap_or(fault.message()).to_string();
        Self::failure_detailed(
            err.to_string(),
            detail,
            ReasonCode::InternalServerError,
            Some(fault),
        )
    }

    /// Rebuilds an outcome from already validated parts.
    pub(crate) fn from_parts(
        succeeded: bool,
        reason_code: ReasonCode,
        user_message: Option<String>,
        detail_message: Option<String>,
        fault: Option<CapturedError>,
    ) -> Self {
        debug_assert_eq!(succeeded, reason_code.is_success());
        Self {
            succeeded,
            reason_code,
            user_message,
            detail_message,
            fault,
        }
    }

    pub fn is_succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn is_failed(&self) -> bool {
        !self.succeeded
    }

    pub fn reason_code(&self) -> ReasonCode {
        self.reason_code
    }

    pub fn user_message(&self) -> Option<&str> {
        self.user_message.as_deref()
    }

    pub fn detail_message(&self) -> Option<&str> {
        self.detail_message.as_deref()
    }

    pub fn fault(&self) -> Option<&CapturedError> {
        self.fault.as_ref()
    }

    /// Runs `next` only when `self` succeeded.
    ///
    /// A failed outcome is returned as is and `next` is never called, so
    /// dependent steps can be sequenced without checking every result:
    ///
    /// ```rust
    /// # futures_executor::block_on(async {
    /// use verdict::{Outcome, ReasonCode};
    ///
    /// let outcome = Outcome::failure_with("no such user", ReasonCode::NotFound)
    ///     .chain_if_succeeded(|| async { Outcome::success() })
    ///     .await;
    /// assert_eq!(outcome.reason_code(), ReasonCode::NotFound);
    /// # });
    /// ```
    pub async fn chain_if_succeeded<F, Fut>(self, next: F) -> Outcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome>,
    {
        if self.is_failed() {
            return self;
        }
        next().await
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::success()
    }
}

impl AsRef<Outcome> for Outcome {
    fn as_ref(&self) -> &Outcome {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_success() {
        let outcome = Outcome::success();
        assert!(outcome.is_succeeded());
        assert!(!outcome.is_failed());
        assert_eq!(outcome.reason_code(), ReasonCode::Success);
        assert!(outcome.user_message().is_none());
        assert!(outcome.detail_message().is_none());
        assert!(outcome.fault().is_none());
    }

    #[test]
    fn test_try_success_with() {
        let outcome = Outcome::try_success_with(ReasonCode::Accepted).unwrap();
        assert_eq!(outcome.reason_code(), ReasonCode::Accepted);

        assert_eq!(
            Outcome::try_success_with(ReasonCode::NotFound),
            Err(OutcomeError::NotASuccessReason {
                reason: ReasonCode::NotFound
            })
        );
    }

    #[test]
    fn test_failure_defaults() {
        let outcome = Outcome::failure("boom");
        assert!(outcome.is_failed());
        assert_eq!(outcome.reason_code(), ReasonCode::UnknownError);
        assert_eq!(outcome.user_message(), Some("boom"));
        assert_eq!(outcome.detail_message(), Some("boom"));
        assert!(outcome.fault().is_none());
    }

    #[test]
    fn test_failure_with_fault() {
        let outcome = Outcome::failure_with_fault(
            "db broke",
            ReasonCode::ForeignKeyViolation,
            CapturedError::new("fk_person_team"),
        );
        assert_eq!(outcome.reason_code(), ReasonCode::ForeignKeyViolation);
        assert_eq!(outcome.fault().map(CapturedError::message), Some("fk_person_team"));
    }

    #[test]
    fn test_failure_rejects_success_reason() {
        let result = Outcome::try_failure_detailed("x", "y", ReasonCode::NoContent, None);
        assert_eq!(
            result,
            Err(OutcomeError::NotAFailureReason {
                reason: ReasonCode::NoContent
            })
        );
    }

    #[test]
    #[should_panic(expected = "cannot describe a failure")]
    fn test_failure_panics_on_success_reason() {
        Outcome::failure_with("x", ReasonCode::Success);
    }

    #[test]
    fn test_from_error() {
        let err = anyhow::anyhow!("disk full").context("saving person");
        let outcome = Outcome::from_error(&err);

        assert_eq!(outcome.reason_code(), ReasonCode::InternalServerError);
        assert_eq!(outcome.user_message(), Some("saving person"));
        assert!(outcome.detail_message().unwrap().contains("disk full"));
        assert!(outcome.fault().is_some());
    }

    #[test]
    fn test_chain_skips_next_on_failure() {
        let calls = Cell::new(0);
        let outcome = block_on(
            Outcome::failure_with("Bad input", ReasonCode::BadRequest).chain_if_succeeded(|| {
                calls.set(calls.get() + 1);
                async { Outcome::success() }
            }),
        );

        assert_eq!(calls.get(), 0);
        assert_eq!(outcome.reason_code(), ReasonCode::BadRequest);
        assert_eq!(outcome.user_message(), Some("Bad input"));
    }

    #[test]
    fn test_chain_runs_next_once_on_success() {
        let calls = Cell::new(0);
        let outcome = block_on(Outcome::success().chain_if_succeeded(|| {
            calls.set(calls.get() + 1);
            async { Outcome::failure_with("gone", ReasonCode::NotFound) }
        }));

        assert_eq!(calls.get(), 1);
        assert_eq!(outcome.reason_code(), ReasonCode::NotFound);
    }

    #[test]
    fn test_chain_of_three_stops_at_first_failure() {
        let calls = Cell::new(0);
        let step = |result: Outcome| {
            calls.set(calls.get() + 1);
            async move { result }
        };

        let outcome = block_on(async {
            Outcome::success()
                .chain_if_succeeded(|| step(Outcome::failure_with("locked", ReasonCode::Conflict)))
                .await
                .chain_if_succeeded(|| step(Outcome::success()))
                .await
        });

        assert_eq!(calls.get(), 1);
        assert_eq!(outcome.reason_code(), ReasonCode::Conflict);
    }

    #[test]
    fn test_serializes_camel_case_without_fault() {
        let outcome = Outcome::failure_with_fault(
            "Bad input",
            ReasonCode::BadRequest,
            CapturedError::new("secret"),
        );
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "succeeded": false,
                "reasonCode": "BadRequest",
                "userMessage": "Bad input",
                "detailMessage": "Bad input",
            })
        );
    }
}
