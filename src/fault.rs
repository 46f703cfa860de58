use serde::Serialize;
use std::fmt::Display;

/// Snapshot of the fault that caused a failure.
///
/// Faults are captured as text so outcomes stay `Clone` and `Send` no matter
/// what error type produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedError {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<String>,
}

impl CapturedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace: None,
        }
    }

    /// Attaches trace text, usually the rendered source chain.
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    /// Captures any standard error together with its `source()` chain.
    pub fn from_std<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let mut chain = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }

        let captured = Self::new(err.to_string());
        if chain.is_empty() {
            captured
        } else {
            captured.with_trace(format!("Caused by: {}", chain.join(": ")))
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }
}

/// Uses anyhow's alternate debug rendering, which lists the whole context
/// chain and the backtrace when one was captured.
impl From<&anyhow::Error> for CapturedError {
    fn from(err: &anyhow::Error) -> Self {
        Self::new(err.to_string()).with_trace(format!("{:?}", err))
    }
}

impl From<anyhow::Error> for CapturedError {
    fn from(err: anyhow::Error) -> Self {
        Self::from(&err)
    }
}

impl Display for CapturedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::CapturedError;
    use anyhow::Context;

    #[derive(Debug, thiserror::Error)]
    #[error("connection reset")]
    struct Reset;

    #[derive(Debug, thiserror::Error)]
    #[error("query failed")]
    struct Query(#[source] Reset);

    #[test]
    fn test_from_std_walks_sources() {
        let captured = CapturedError::from_std(&Query(Reset));
        assert_eq!(captured.message(), "query failed");
        assert_eq!(captured.trace(), Some("Caused by: connection reset"));
    }

    #[test]
    fn test_from_std_without_source_has_no_trace() {
        let captured = CapturedError::from_std(&Reset);
        assert_eq!(captured.message(), "connection reset");
        assert!(captured.trace().is_none());
    }

    #[test]
    fn test_from_anyhow_keeps_context_chain() {
        let err = Err::<(), _>(Reset)
            .context("loading person")
            .unwrap_err();

        let captured = CapturedError::from(&err);
        assert_eq!(captured.message(), "loading person");
        assert!(captured.trace().unwrap().contains("connection reset"));
    }
}
