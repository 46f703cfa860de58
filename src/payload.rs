use crate::{
    error::OutcomeError, fault::CapturedError, messages, outcome::Outcome, reason::ReasonCode,
};
use log::warn;
use std::future::Future;

/// An [`Outcome`] that also carries a typed payload.
///
/// Construction enforces the payload rules of the success reasons:
///
/// * `Success` and `Created` promise content, the payload must be present.
/// * `NoContent` promises nothing, the payload must be absent.
/// * `Accepted` may carry a payload or not.
///
/// Failures never carry a payload.
///
/// ```rust
/// use verdict::{PayloadOutcome, ReasonCode};
///
/// let found = PayloadOutcome::success(42);
/// assert_eq!(found.payload(), Some(&42));
///
/// let missing = PayloadOutcome::<i32>::from_failure("no such answer", ReasonCode::NotFound);
/// let as_text = PayloadOutcome::convert_via(missing, |n: i32| n.to_string());
/// assert_eq!(as_text.reason_code(), ReasonCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadOutcome<T> {
    outcome: Outcome,
    payload: Option<T>,
}

impl<T> PayloadOutcome<T> {
    /// Successful outcome with `ReasonCode::Success`.
    pub fn success(payload: T) -> Self {
        Self {
            outcome: Outcome::success(),
            payload: Some(payload),
        }
    }

    pub fn created(payload: T) -> Self {
        Self::succeeded(ReasonCode::Created, Some(payload))
    }

    pub fn accepted(payload: Option<T>) -> Self {
        Self::succeeded(ReasonCode::Accepted, payload)
    }

    pub fn no_content() -> Self {
        Self::succeeded(ReasonCode::NoContent, None)
    }

    /// Create a successful outcome, panicking if the payload rules are broken.
    pub fn from_success(payload: Option<T>, reason: ReasonCode) -> Self {
        match Self::try_from_success(payload, reason) {
            Ok(value) => value,
            Err(err) => panic!("successful outcomes must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor validating `reason` against `payload`.
    pub fn try_from_success(payload: Option<T>, reason: ReasonCode) -> Result<Self, OutcomeError> {
        if !reason.is_success() {
            return Err(OutcomeError::NotASuccessReason { reason });
        }
        if reason.carries_content() && payload.is_none() {
            return Err(OutcomeError::MissingPayload { reason });
        }
        if reason == ReasonCode::NoContent && payload.is_some() {
            return Err(OutcomeError::UnexpectedPayload);
        }
        Ok(Self::succeeded(reason, payload))
    }

    /// Same as [`PayloadOutcome::try_from_success`] but content-bearing
    /// reasons fall back to `T::default()` when no payload is given.
    pub fn try_from_success_or_default(
        payload: Option<T>,
        reason: ReasonCode,
    ) -> Result<Self, OutcomeError>
    where
        T: Default,
    {
        let payload = if reason.carries_content() {
            Some(payload.unwrap_or_default())
        } else {
            payload
        };
        Self::try_from_success(payload, reason)
    }

    fn succeeded(reason: ReasonCode, payload: Option<T>) -> Self {
        Self {
            outcome: Outcome::from_parts(true, reason, None, None, None),
            payload,
        }
    }

    fn failed(outcome: Outcome) -> Self {
        debug_assert!(outcome.is_failed());
        Self {
            outcome,
            payload: None,
        }
    }

    /// Failure classified as `ReasonCode::UnknownError`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::failed(Outcome::failure(message))
    }

    pub fn from_failure(message: impl Into<String>, reason: ReasonCode) -> Self {
        Self::failed(Outcome::failure_with(message, reason))
    }

    /// Full failure constructor, panicking if `reason` is a success reason.
    pub fn from_failure_detailed(
        message: impl Into<String>,
        detail: impl Into<String>,
        reason: ReasonCode,
        fault: Option<CapturedError>,
    ) -> Self {
        Self::failed(Outcome::failure_detailed(message, detail, reason, fault))
    }

    pub fn try_from_failure_detailed(
        message: impl Into<String>,
        detail: impl Into<String>,
        reason: ReasonCode,
        fault: Option<CapturedError>,
    ) -> Result<Self, OutcomeError> {
        Outcome::try_failure_detailed(message, detail, reason, fault).map(Self::failed)
    }

    pub fn from_error(err: &anyhow::Error) -> Self {
        Self::failed(Outcome::from_error(err))
    }

    /// Copies the failure described by `other` into a payload outcome of
    /// another type.
    ///
    /// A missing `other` yields an `UnknownError` failure instead of a panic.
    /// Passing a successful `other` is a caller bug: it is logged and turned
    /// into an `UnknownError` failure keeping `other`'s messages, since a
    /// success reason cannot describe a failure.
    pub fn derive_failure_from<'a>(other: impl Into<Option<&'a Outcome>>) -> Self {
        match other.into() {
            None => Self::from_failure_detailed(
                messages::AN_ERROR_OCCURRED,
                messages::OTHER_RESULT_MISSING,
                ReasonCode::UnknownError,
                None,
            ),
            Some(other) if other.is_failed() => Self::failed(other.clone()),
            Some(other) => {
                warn!(
                    "derive_failure_from called with a successful outcome ({})",
                    other.reason_code()
                );
                Self::failed(Outcome::from_parts(
                    false,
                    ReasonCode::UnknownError,
                    Some(
                        other
                            .user_message()
                            .unwrap_or(messages::AN_ERROR_OCCURRED)
                            .to_owned(),
                    ),
                    other.detail_message().map(str::to_owned),
                    other.fault().cloned(),
                ))
            }
        }
    }

    /// Covariant copy from an outcome whose payload converts into `T`.
    ///
    /// Failures are copied verbatim, successes keep their reason and have
    /// their payload converted with `Into`.
    pub fn derive_from<U>(other: PayloadOutcome<U>) -> Self
    where
        U: Into<T>,
    {
        let PayloadOutcome { outcome, payload } = other;
        Self {
            outcome,
            payload: payload.map(Into::into),
        }
    }

    /// Derives from a plain outcome, which has no payload to copy.
    ///
    /// Failures and successes that promise no content convert; a
    /// content-bearing success is an `IncompatibleConversion`.
    pub fn try_derive_from_outcome(other: &Outcome) -> Result<Self, OutcomeError> {
        if other.is_failed() {
            return Ok(Self::derive_failure_from(other));
        }
        if other.reason_code().carries_content() {
            return Err(OutcomeError::IncompatibleConversion {
                target: std::any::type_name::<T>(),
            });
        }
        Ok(Self::succeeded(other.reason_code(), None))
    }

    /// Panicking form of [`PayloadOutcome::try_derive_from_outcome`].
    pub fn derive_from_outcome(other: &Outcome) -> Self {
        match Self::try_derive_from_outcome(other) {
            Ok(value) => value,
            Err(err) => panic!("outcome conversion is a programming error: {err}"),
        }
    }

    /// Maps the payload of `other`, short-circuiting on failure.
    ///
    /// `mapper` is called only when `other` succeeded and carries a payload.
    /// The reason code is kept, so `Created` stays `Created`.
    pub fn convert_via<U, F>(other: PayloadOutcome<U>, mapper: F) -> Self
    where
        F: FnOnce(U) -> T,
    {
        if other.is_failed() {
            return Self::failed(other.outcome);
        }
        Self {
            outcome: other.outcome,
            payload: other.payload.map(mapper),
        }
    }

    /// Async form of [`PayloadOutcome::convert_via`].
    pub async fn convert_via_async<U, F, Fut>(other: PayloadOutcome<U>, mapper: F) -> Self
    where
        F: FnOnce(U) -> Fut,
        Fut: Future<Output = T>,
    {
        if other.is_failed() {
            return Self::failed(other.outcome);
        }
        let payload = match other.payload {
            Some(payload) => Some(mapper(payload).await),
            None => None,
        };
        Self {
            outcome: other.outcome,
            payload,
        }
    }

    /// Runs `next` only when `other` succeeded, otherwise derives the
    /// failure of `other`.
    pub async fn chain_if_succeeded<O, F, Fut>(other: &O, next: F) -> Self
    where
        O: AsRef<Outcome> + ?Sized,
        F: FnOnce() -> Fut,
        Fut: Future<Output = PayloadOutcome<T>>,
    {
        let other = other.as_ref();
        if other.is_failed() {
            return Self::derive_failure_from(other);
        }
        next().await
    }

    /// Method form of [`PayloadOutcome::convert_via`].
    pub fn map<V, F>(self, f: F) -> PayloadOutcome<V>
    where
        F: FnOnce(T) -> V,
    {
        PayloadOutcome::convert_via(self, f)
    }

    /// Method form of [`PayloadOutcome::convert_via_async`].
    pub async fn map_async<V, F, Fut>(self, f: F) -> PayloadOutcome<V>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = V>,
    {
        PayloadOutcome::convert_via_async(self, f).await
    }

    /// Stored payload. Always `None` for failures and `NoContent`.
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub fn into_payload(self) -> Option<T> {
        self.payload
    }

    /// Stored payload, materializing and caching `T::default()` when absent.
    ///
    /// On a failure the default carries no meaning, it only saves callers
    /// from handling `None`.
    pub fn payload_or_default(&mut self) -> &T
    where
        T: Default,
    {
        self.payload.get_or_insert_with(T::default)
    }

    pub fn into_payload_or_default(self) -> T
    where
        T: Default,
    {
        self.payload.unwrap_or_default()
    }

    pub fn into_parts(self) -> (Outcome, Option<T>) {
        (self.outcome, self.payload)
    }

    pub fn as_outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn into_outcome(self) -> Outcome {
        self.outcome
    }

    pub fn is_succeeded(&self) -> bool {
        self.outcome.is_succeeded()
    }

    pub fn is_failed(&self) -> bool {
        self.outcome.is_failed()
    }

    pub fn reason_code(&self) -> ReasonCode {
        self.outcome.reason_code()
    }

    pub fn user_message(&self) -> Option<&str> {
        self.outcome.user_message()
    }

    pub fn detail_message(&self) -> Option<&str> {
        self.outcome.detail_message()
    }

    pub fn fault(&self) -> Option<&CapturedError> {
        self.outcome.fault()
    }
}

impl<T> AsRef<Outcome> for PayloadOutcome<T> {
    fn as_ref(&self) -> &Outcome {
        &self.outcome
    }
}

impl<T> From<PayloadOutcome<T>> for Outcome {
    fn from(value: PayloadOutcome<T>) -> Self {
        value.outcome
    }
}
