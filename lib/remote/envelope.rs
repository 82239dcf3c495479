use super::{EngineState, Perft, RemoteError, TestReport};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The wrapper around every engine response.
///
/// Failures carry no `ok` flag at all, only a `detail`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct Envelope {
    #[serde(default)]
    pub ok: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl Envelope {
    /// Unwraps the [`EngineState`], or explains why the request was declined.
    pub fn into_result(self, fallback: &str) -> Result<EngineState, RemoteError> {
        match self {
            Envelope {
                ok: true,
                engine: Some(state),
                ..
            } => Ok(state),

            Envelope { ok: true, .. } => Err(RemoteError::Rejected("missing engine state".into())),
            Envelope { detail, .. } => Err(RemoteError::Rejected(describe(detail, fallback))),
        }
    }
}

/// The raw response to a perft request.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct PerftEnvelope {
    #[serde(default)]
    pub depth: Option<u32>,

    #[serde(default)]
    pub nodes: Option<u64>,

    #[serde(default)]
    pub detail: Option<Value>,
}

impl PerftEnvelope {
    /// Unwraps the [`Perft`] count, or explains why the request failed.
    pub fn into_result(self, depth: u32) -> Result<Perft, RemoteError> {
        match self {
            PerftEnvelope {
                nodes: Some(nodes),
                depth: d,
                ..
            } => Ok(Perft {
                depth: d.unwrap_or(depth),
                nodes,
            }),

            PerftEnvelope { detail, .. } => {
                Err(RemoteError::Rejected(describe(detail, "perft failed")))
            }
        }
    }
}

/// The raw response to a request for running the test suite.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReportEnvelope {
    #[serde(default)]
    pub returncode: Option<i32>,

    #[serde(default)]
    pub output: Option<String>,

    #[serde(default)]
    pub success: Option<bool>,

    #[serde(default)]
    pub detail: Option<Value>,
}

impl ReportEnvelope {
    /// Unwraps the [`TestReport`], or explains why the suite could not be run.
    pub fn into_result(self) -> Result<TestReport, RemoteError> {
        match self {
            ReportEnvelope {
                returncode: Some(returncode),
                success: Some(success),
                output,
                ..
            } => Ok(TestReport {
                returncode,
                output: output.unwrap_or_default(),
                success,
            }),

            ReportEnvelope { detail, .. } => {
                Err(RemoteError::Rejected(describe(detail, "run-tests failed")))
            }
        }
    }
}

/// Turns a `detail` into a human readable message.
///
/// Details that carry no information, such as `""`, `0` or `false`, yield the `fallback`.
fn describe(detail: Option<Value>, fallback: &str) -> String {
    match detail {
        None | Some(Value::Null) | Some(Value::Bool(false)) => fallback.into(),
        Some(Value::String(s)) if s.is_empty() => fallback.into(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => fallback.into(),
        Some(Value::String(s)) => s,
        Some(v) => v.to_string(),
    }
}
