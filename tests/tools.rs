#![allow(dead_code)]
use futures_executor::block_on;
use hyper::Body;
use serde::Serialize;
use std::{future::Future, pin::Pin};
use verdict::{Outcome, PayloadOutcome, Response, ResponseBuilder};

type Pending = Pin<Box<dyn Future<Output = Response>>>;

type Operation = Box<dyn FnOnce(ResponseBuilder) -> Pending>;

/// Runs an outcome through `ResponseBuilder` and the hyper conversion and
/// checks what a client would receive.
pub struct TestCaseBuilder {
    name: Option<String>,
    builder: ResponseBuilder,
    operation: Operation,

    status: Option<u16>,
    body: Option<serde_json::Value>,
    empty_body: bool,
}

impl TestCaseBuilder {
    pub fn new<T>(outcome: PayloadOutcome<T>) -> Self
    where
        T: Serialize + 'static,
    {
        Self::with_operation(Box::new(move |builder: ResponseBuilder| -> Pending {
            Box::pin(async move { builder.build_from(|| async move { outcome }).await })
        }))
    }

    pub fn plain(outcome: Outcome) -> Self {
        Self::with_operation(Box::new(move |builder: ResponseBuilder| -> Pending {
            Box::pin(async move { builder.build_from_outcome(|| async move { outcome }).await })
        }))
    }

    fn with_operation(operation: Operation) -> Self {
        Self {
            name: None,
            builder: ResponseBuilder::new(),
            operation,
            status: None,
            body: None,
            empty_body: false,
        }
    }

    pub fn name<T: ToString>(mut self, name: T) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn builder(mut self, builder: ResponseBuilder) -> Self {
        self.builder = builder;
        self
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn empty_body(mut self) -> Self {
        self.empty_body = true;
        self
    }

    pub fn run(self) -> anyhow::Result<()> {
        let name = self.name.unwrap_or_default();
        let response = block_on((self.operation)(self.builder));

        let res = hyper::Response::<Body>::try_from(response)?;
        if let Some(status) = self.status {
            assert_eq!(res.status().as_u16(), status, "test case {}", name);
        }

        let body_bytes = block_on(hyper::body::to_bytes(res.into_body()))?;

        if self.empty_body {
            assert!(
                body_bytes.is_empty(),
                "test case {}, expected empty body, got: {}",
                name,
                String::from_utf8_lossy(&body_bytes)
            );
        }

        if let Some(expected) = self.body {
            let actual: serde_json::Value = serde_json::from_slice(&body_bytes)?;
            assert_eq!(
                actual, expected,
                "test case {}, left: {}, right: {}",
                name, actual, expected
            );
        }

        Ok(())
    }
}
