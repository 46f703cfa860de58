use crate::{builder::ResponseBuilder, outcome::Outcome, payload::PayloadOutcome};
use anyhow::Context;
use bytes::Bytes;
use hyper::{header::CONTENT_TYPE, Body, StatusCode};
use serde::Serialize;
use std::collections::HashMap;

pub const APPLICATION_JSON: &str = "application/json";

/// Types that can be projected into a boundary [`Response`].
///
/// Projection never fails: every outcome, including every failure, has a
/// well-formed response.
pub trait Responder {
    fn into_response(self) -> Response;
}

/// Response by default should implement Responder.
impl Responder for Response {
    fn into_response(self) -> Response {
        self
    }
}

/// Success renders the outcome itself with 200, failure renders the error
/// envelope.
///
/// ```rust
/// use verdict::{Outcome, ReasonCode, Responder};
///
/// let response = Outcome::failure_with("Bad input", ReasonCode::BadRequest).into_response();
/// assert_eq!(response.status.as_u16(), 400);
/// ```
impl Responder for Outcome {
    fn into_response(self) -> Response {
        ResponseBuilder::default().project_outcome(self)
    }
}

impl<T> Responder for PayloadOutcome<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        ResponseBuilder::default().project(self)
    }
}

/// Body of a boundary response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// No body at all, e.g. for 204.
    Empty,

    /// A successful payload, serialized by the boundary.
    Value(serde_json::Value),

    /// An already serialized error envelope.
    SerializedError(Bytes),
}

impl ResponseBody {
    pub fn is_empty(&self) -> bool {
        matches!(self, ResponseBody::Empty)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResponseBody::SerializedError(_))
    }

    /// Body as wire bytes.
    pub fn to_bytes(&self) -> anyhow::Result<Bytes> {
        Ok(match self {
            ResponseBody::Empty => Bytes::new(),
            ResponseBody::Value(value) => Bytes::from(
                serde_json::to_vec(value).context("could not serialize response body")?,
            ),
            ResponseBody::SerializedError(bytes) => bytes.clone(),
        })
    }

    /// Body parsed as JSON, `Null` when empty.
    pub fn to_json(&self) -> anyhow::Result<serde_json::Value> {
        match self {
            ResponseBody::Empty => Ok(serde_json::Value::Null),
            ResponseBody::Value(value) => Ok(value.clone()),
            ResponseBody::SerializedError(bytes) => {
                serde_json::from_slice(bytes).context("error envelope is not valid JSON")
            }
        }
    }
}

impl Default for ResponseBody {
    fn default() -> Self {
        Self::Empty
    }
}

/// Builder for Response struct.
#[derive(Default, Debug)]
pub struct Builder {
    response: Response,
}

impl Builder {
    /// Sets status field.
    pub fn status(&mut self, status: StatusCode) -> &mut Self {
        self.response.status = status;
        self
    }

    /// Add single header to headers field.
    /// Call multiple times for multiple headers.
    pub fn header(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.response.headers.insert(key.into(), value.into());
        self
    }

    /// Sets body field.
    pub fn body(&mut self, body: ResponseBody) -> &mut Self {
        self.response.body = body;
        self
    }

    /// Sets a JSON value as body together with its content type.
    pub fn json(&mut self, value: serde_json::Value) -> &mut Self {
        self.header(CONTENT_TYPE.as_str(), APPLICATION_JSON)
            .body(ResponseBody::Value(value))
    }

    /// Sets a serialized error envelope as body together with its content type.
    pub fn error(&mut self, envelope: Bytes) -> &mut Self {
        self.header(CONTENT_TYPE.as_str(), APPLICATION_JSON)
            .body(ResponseBody::SerializedError(envelope))
    }

    /// Returns built Response leaving empty at that place.
    pub fn finalize(&mut self) -> Response {
        std::mem::take(&mut self.response)
    }
}

/// Responses consist of the following elements:
///
/// * A status code, indicating if the operation was successful or not, and why.
/// * Headers, only `content-type` is set by this crate.
/// * A body that is either empty, a payload or an error envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status returned.
    pub status: StatusCode,

    /// HTTP headers returned.
    pub headers: HashMap<String, String>,

    /// HTTP body content returned.
    pub body: ResponseBody,
}

impl Response {
    pub fn build() -> Builder {
        Builder::default()
    }

    /// Numeric status, as projected from the outcome.
    pub fn status_code(&self) -> i32 {
        i32::from(self.status.as_u16())
    }
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HashMap::default(),
            body: ResponseBody::Empty,
        }
    }
}

/// Hands the response over to a hyper based server.
impl TryFrom<Response> for hyper::Response<Body> {
    type Error = anyhow::Error;

    fn try_from(value: Response) -> Result<Self, Self::Error> {
        let mut builder = hyper::Response::builder().status(value.status);

        for (key, header) in &value.headers {
            builder = builder.header(key.as_str(), header.as_str());
        }

        Ok(builder.body(Body::from(value.body.to_bytes()?))?)
    }
}
