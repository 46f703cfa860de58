use crate::{
    fault::CapturedError,
    messages,
    outcome::Outcome,
    payload::PayloadOutcome,
    reason::ReasonCode,
    response::Response,
    status::status_code,
};
use bytes::Bytes;
use hyper::StatusCode;
use log::{debug, error};
use serde::Serialize;
use std::future::Future;

/// Drives operations returning outcomes and turns their outcome into a
/// boundary [`Response`].
///
/// Rendering rules for [`PayloadOutcome`]:
///
/// * `NoContent` - 204 with an empty body, whatever the payload.
/// * `Accepted` - 202 with the payload, or an empty body without one.
/// * `Success` / `Created` - the payload with the projected status.
/// * anything else - the error envelope with the projected status.
///
/// ```rust
/// # futures_executor::block_on(async {
/// use verdict::{PayloadOutcome, ReasonCode, ResponseBuilder};
///
/// let response = ResponseBuilder::new()
///     .build_from(|| async { PayloadOutcome::<u32>::from_failure("Bad input", ReasonCode::BadRequest) })
///     .await;
/// assert_eq!(response.status_code(), 400);
/// # });
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseBuilder {
    /// Whether the captured fault is written into error envelopes.
    expose_faults: bool,
}

/// Wire shape of a failed outcome.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorEnvelope<'a> {
    succeeded: bool,
    reason_code: ReasonCode,
    user_message: Option<&'a str>,
    detail_message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fault: Option<&'a CapturedError>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether error envelopes include the captured fault. Off by default
    /// since traces are rarely meant for clients.
    pub fn expose_faults(mut self, expose: bool) -> Self {
        self.expose_faults = expose;
        self
    }

    /// Awaits `operation` and projects its outcome.
    pub async fn build_from<T, F, Fut>(&self, operation: F) -> Response
    where
        T: Serialize,
        F: FnOnce() -> Fut,
        Fut: Future<Output = PayloadOutcome<T>>,
    {
        self.project(operation().await)
    }

    /// Like [`ResponseBuilder::build_from`] but failures are rendered by
    /// `error_projector` instead of the default envelope.
    pub async fn build_from_with<T, F, Fut, E, EFut>(
        &self,
        operation: F,
        error_projector: E,
    ) -> Response
    where
        T: Serialize,
        F: FnOnce() -> Fut,
        Fut: Future<Output = PayloadOutcome<T>>,
        E: FnOnce(Outcome) -> EFut,
        EFut: Future<Output = Response>,
    {
        let outcome = operation().await;
        if outcome.is_failed() {
            return error_projector(outcome.into_outcome()).await;
        }
        self.project(outcome)
    }

    /// Awaits `operation`; success renders the outcome itself with 200.
    pub async fn build_from_outcome<F, Fut>(&self, operation: F) -> Response
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome>,
    {
        self.project_outcome(operation().await)
    }

    pub async fn build_from_outcome_with<F, Fut, E, EFut>(
        &self,
        operation: F,
        error_projector: E,
    ) -> Response
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome>,
        E: FnOnce(Outcome) -> EFut,
        EFut: Future<Output = Response>,
    {
        let outcome = operation().await;
        if outcome.is_failed() {
            return error_projector(outcome).await;
        }
        self.project_outcome(outcome)
    }

    /// Synchronous projection of a payload outcome.
    pub fn project<T>(&self, outcome: PayloadOutcome<T>) -> Response
    where
        T: Serialize,
    {
        let reason = outcome.reason_code();
        debug!("ResponseBuilder::project - reason: {}", reason);

        match reason {
            ReasonCode::NoContent => Response::build().status(StatusCode::NO_CONTENT).finalize(),
            ReasonCode::Accepted => {
                let (_, payload) = outcome.into_parts();
                self.payload_response(StatusCode::ACCEPTED, payload)
            }
            _ if outcome.is_succeeded() => {
                let status = status_code(outcome.as_outcome());
                let (_, payload) = outcome.into_parts();
                self.payload_response(status, payload)
            }
            _ => self.error_envelope(outcome.as_outcome()),
        }
    }

    /// Synchronous projection of a plain outcome.
    pub fn project_outcome(&self, outcome: Outcome) -> Response {
        debug!(
            "ResponseBuilder::project_outcome - reason: {}",
            outcome.reason_code()
        );

        if outcome.is_failed() {
            return self.error_envelope(&outcome);
        }
        self.payload_response(StatusCode::OK, Some(outcome))
    }

    /// Renders `outcome` as the error envelope with its projected status.
    pub fn error_envelope(&self, outcome: &Outcome) -> Response {
        let envelope = ErrorEnvelope {
            succeeded: outcome.is_succeeded(),
            reason_code: outcome.reason_code(),
            user_message: outcome.user_message(),
            detail_message: outcome.detail_message(),
            fault: outcome.fault().filter(|_| self.expose_faults),
        };

        let body = match serde_json::to_vec(&envelope) {
            Ok(body) => body,
            Err(e) => {
                error!("could not serialize error envelope: {}", e);
                Vec::new()
            }
        };

        Response::build()
            .status(status_code(outcome))
            .error(Bytes::from(body))
            .finalize()
    }

    fn payload_response<T>(&self, status: StatusCode, payload: Option<T>) -> Response
    where
        T: Serialize,
    {
        let payload = match payload {
            Some(payload) => payload,
            None => return Response::build().status(status).finalize(),
        };

        match serde_json::to_value(payload) {
            Ok(value) => Response::build().status(status).json(value).finalize(),
            Err(e) => {
                // Not a business failure, but the caller still gets a response.
                error!("could not serialize payload: {}", e);
                self.error_envelope(&Outcome::failure_detailed(
                    messages::INTERNAL_SERVER_ERROR,
                    e.to_string(),
                    ReasonCode::InternalServerError,
                    Some(CapturedError::from_std(&e)),
                ))
            }
        }
    }
}
