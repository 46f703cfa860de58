//! Outcomes as data.
//!
//! An [`Outcome`] records whether an operation succeeded, why, and what went
//! wrong; a [`PayloadOutcome`] additionally carries the value the operation
//! produced. Outcomes are derived from one another as they travel up through
//! layered calls and are finally projected onto a boundary [`Response`] by
//! the [`ResponseBuilder`].
//!
//! ```rust
//! # futures_executor::block_on(async {
//! use verdict::{Outcome, PayloadOutcome, ReasonCode, ResponseBuilder};
//!
//! async fn authorize(user: &str) -> Outcome {
//!     if user == "admin" {
//!         Outcome::success()
//!     } else {
//!         Outcome::failure_with("You are not authorized", ReasonCode::Forbidden)
//!     }
//! }
//!
//! let response = ResponseBuilder::new()
//!     .build_from(|| async {
//!         let authorized = authorize("guest").await;
//!         PayloadOutcome::chain_if_succeeded(&authorized, || async {
//!             PayloadOutcome::success(vec!["report.pdf"])
//!         })
//!         .await
//!     })
//!     .await;
//!
//! assert_eq!(response.status_code(), 403);
//! # });
//! ```

pub mod builder;
pub mod error;
pub mod fault;
pub mod messages;
pub mod outcome;
pub mod payload;
pub mod reason;
pub mod response;
pub mod status;

pub use builder::ResponseBuilder;
pub use error::OutcomeError;
pub use fault::CapturedError;
pub use outcome::Outcome;
pub use payload::PayloadOutcome;
pub use reason::ReasonCode;
pub use response::{Responder, Response, ResponseBody};
pub use status::{project_status, status_code};
