use crate::chess::Color;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Whether the game goes on, or how it ended.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum GameStatus {
    #[display(fmt = "ongoing")]
    Ongoing,
    #[display(fmt = "{}", _0)]
    Over(String),
}

impl From<String> for GameStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ongoing" => GameStatus::Ongoing,
            _ => GameStatus::Over(s),
        }
    }
}

impl From<GameStatus> for String {
    fn from(s: GameStatus) -> Self {
        match s {
            GameStatus::Ongoing => "ongoing".into(),
            GameStatus::Over(s) => s,
        }
    }
}

/// The state of the remote engine, as reported after each request.
///
/// Fields this client does not interpret are retained in [`EngineState::extra`],
/// so that the record can be shown in full.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct EngineState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fen: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_to_move: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GameStatus>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EngineState {
    /// Whether the engine reported an error event.
    pub fn is_error(&self) -> bool {
        self.event.as_deref() == Some("error")
    }

    /// The side to move, anything but `w` counting as black.
    pub fn turn(&self) -> Color {
        match self.side_to_move.as_deref() {
            Some("w") => Color::White,
            _ => Color::Black,
        }
    }

    /// Whether the game goes on.
    pub fn is_ongoing(&self) -> bool {
        self.status == Some(GameStatus::Ongoing)
    }
}

/// The outcome of a [perft] request.
///
/// [perft]: https://www.chessprogramming.org/Perft
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Perft {
    pub depth: u32,
    pub nodes: u64,
}

/// The outcome of running the engine's test suite.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct TestReport {
    pub returncode: i32,
    #[serde(default)]
    pub output: String,
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_strategy::proptest;

    #[test]
    fn live_state_is_deserialized() -> Result<(), serde_json::Error> {
        let state: EngineState = serde_json::from_value(json!({
            "fen": "8/8/8/8/8/8/8/8 w - - 0 1",
            "side_to_move": "w",
            "status": "ongoing",
        }))?;

        assert!(!state.is_error());
        assert!(state.is_ongoing());
        assert_eq!(state.turn(), Color::White);

        Ok(())
    }

    #[test]
    fn error_event_is_recognized() -> Result<(), serde_json::Error> {
        let state: EngineState = serde_json::from_value(json!({
            "event": "error",
            "message": "king in check",
        }))?;

        assert!(state.is_error());
        assert_eq!(state.message.as_deref(), Some("king in check"));

        Ok(())
    }

    #[test]
    fn terminal_status_is_kept_verbatim() -> Result<(), serde_json::Error> {
        let state: EngineState = serde_json::from_value(json!({ "status": "checkmate" }))?;
        assert_eq!(state.status, Some(GameStatus::Over("checkmate".into())));
        assert!(!state.is_ongoing());
        Ok(())
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() -> Result<(), serde_json::Error> {
        let record = json!({
            "event": "engine_move",
            "engine_move": "e7e5",
            "fen": "8/8/8/8/8/8/8/8 w - - 0 1",
            "side_to_move": "w",
            "status": "ongoing",
        });

        let state: EngineState = serde_json::from_value(record.clone())?;
        assert_eq!(state.extra.get("engine_move"), Some(&json!("e7e5")));
        assert_eq!(serde_json::to_value(&state)?, record);

        Ok(())
    }

    #[proptest]
    fn side_to_move_other_than_w_is_black(#[filter(#s != "w")] s: String) {
        let state = EngineState {
            side_to_move: Some(s),
            ..EngineState::default()
        };

        assert_eq!(state.turn(), Color::Black);
    }
}
