//! "Submit to Server" operator.
//!
//! Host operator callbacks are synchronous, so the request is a blocking POST.
//! Do not call [`SubmitOperator::execute`] from inside an async runtime.

use dcclink_core::TransformPayload;

use crate::scene::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Warning,
    Error,
}

/// Host status-bar reporting.
pub trait Reporter {
    fn report(&mut self, level: ReportLevel, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorResult {
    Finished,
    Cancelled,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Error: {0}")]
    Status(u16),
}

#[derive(Debug, Clone, Default)]
pub struct SubmitOperator {
    http: reqwest::blocking::Client,
}

impl SubmitOperator {
    pub const ID: &'static str = "dcc.submit_operator";
    pub const LABEL: &'static str = "Submit to Server";

    pub fn new() -> Self {
        Self::default()
    }

    /// POST `payload` to `endpoint`. Anything but 200 is an error.
    pub fn submit(&self, endpoint: &str, payload: &TransformPayload) -> Result<(), SubmitError> {
        let resp = self
            .http
            .post(endpoint)
            .json(payload)
            .send()
            .map_err(|e| SubmitError::Connection(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().unwrap_or_default();
        tracing::info!(status = status.as_u16(), %body, "server response");

        if status != reqwest::StatusCode::OK {
            return Err(SubmitError::Status(status.as_u16()));
        }
        Ok(())
    }

    /// Send the active object's transform to the scene's endpoint.
    pub fn execute(&self, scene: &Scene, reporter: &mut impl Reporter) -> OperatorResult {
        let Some(object) = scene.active_object() else {
            tracing::warn!("no active object selected");
            reporter.report(ReportLevel::Warning, "No active object selected!");
            return OperatorResult::Cancelled;
        };

        let payload = object.transform_payload();
        tracing::info!(
            object = %object.name,
            endpoint = %scene.server_endpoint,
            ?payload,
            "sending transform data"
        );

        match self.submit(&scene.server_endpoint, &payload) {
            Ok(()) => reporter.report(ReportLevel::Info, "Data sent successfully!"),
            Err(e) => {
                tracing::error!(error = %e, "transform submit failed");
                reporter.report(ReportLevel::Error, &e.to_string());
            }
        }
        OperatorResult::Finished
    }
}
