use super::{EngineState, Envelope, Perft, PerftEnvelope, Remote, RemoteError};
use super::{ReportEnvelope, TestReport};
use crate::chess::Color;
use futures_util::future::BoxFuture;
use reqwest::{Client, Url};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, debug_span, Instrument};

/// A [`Remote`] engine served over HTTP.
#[derive(Debug, Clone)]
pub struct Http {
    client: Client,
    base: String,
}

impl Http {
    /// Connects to the engine served at `base`.
    ///
    /// Requests never time out unless a `timeout` is given.
    pub fn new(base: Url, timeout: Option<Duration>) -> Result<Self, RemoteError> {
        let builder = Client::builder();
        let builder = match timeout {
            Some(t) => builder.timeout(t),
            None => builder,
        };

        Ok(Http {
            client: builder.build()?,
            base: base.as_str().trim_end_matches('/').into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

impl Remote for Http {
    fn new_game(&self, color: Color) -> BoxFuture<'static, Result<EngineState, RemoteError>> {
        let request = self
            .client
            .post(self.endpoint(&format!("/api/new-game?human_color={}", color.code())));

        let span = debug_span!("new_game", %color);
        Box::pin(
            async move {
                let envelope: Envelope = request.send().await?.json().await?;
                debug!(ok = envelope.ok);
                envelope.into_result("new-game failed")
            }
            .instrument(span),
        )
    }

    fn play(&self, m: &str) -> BoxFuture<'static, Result<EngineState, RemoteError>> {
        let request = self
            .client
            .post(self.endpoint("/api/move"))
            .json(&json!({ "move": m }));

        let span = debug_span!("play", %m);
        Box::pin(
            async move {
                let envelope: Envelope = request.send().await?.json().await?;
                debug!(ok = envelope.ok);
                envelope.into_result("move failed")
            }
            .instrument(span),
        )
    }

    fn perft(&self, depth: u32) -> BoxFuture<'static, Result<Perft, RemoteError>> {
        let request = self
            .client
            .get(self.endpoint(&format!("/perft?depth={}", depth)));

        let span = debug_span!("perft", depth);
        Box::pin(
            async move {
                let envelope: PerftEnvelope = request.send().await?.json().await?;
                envelope.into_result(depth)
            }
            .instrument(span),
        )
    }

    fn run_tests(&self) -> BoxFuture<'static, Result<TestReport, RemoteError>> {
        let request = self.client.post(self.endpoint("/api/run-tests"));

        let span = debug_span!("run_tests");
        Box::pin(
            async move {
                let envelope: ReportEnvelope = request.send().await?.json().await?;
                let report = envelope.into_result()?;
                debug!(success = report.success, returncode = report.returncode);
                Ok(report)
            }
            .instrument(span),
        )
    }
}
