use crate::reason::ReasonCode;

/// Contract violations raised by outcome constructors and conversions.
///
/// These describe bugs in calling code, not business failures. Business
/// failures are carried as data inside an [`crate::Outcome`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutcomeError {
    #[error("reason '{reason}' is not a success reason, expected one of: 'Success', 'Created', 'Accepted', 'NoContent'")]
    NotASuccessReason { reason: ReasonCode },

    #[error("reason '{reason}' is a success reason and cannot describe a failure")]
    NotAFailureReason { reason: ReasonCode },

    #[error("payload must have a value when the outcome succeeded with reason '{reason}'")]
    MissingPayload { reason: ReasonCode },

    #[error("payload must be absent when the outcome succeeded with reason 'NoContent'")]
    UnexpectedPayload,

    #[error("cannot derive a successful '{target}' outcome from an outcome without a payload")]
    IncompatibleConversion { target: &'static str },
}

impl OutcomeError {
    /// Construction-time violations, as opposed to conversion-time ones.
    pub fn is_invalid_construction(&self) -> bool {
        !matches!(self, OutcomeError::IncompatibleConversion { .. })
    }
}
