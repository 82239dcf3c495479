use crate::remote::EngineState;

/// Describes an [`EngineState`] in a single line of text.
pub fn describe(state: Option<&EngineState>) -> String {
    match state {
        None => "No engine state.".into(),
        Some(s) if s.is_error() => format!("Error: {}", s.message.as_deref().unwrap_or("Unknown")),
        Some(s) if s.is_ongoing() => format!("Side to move: {}", s.turn()),
        Some(s) => match &s.status {
            Some(status) => format!("Game over: {}", status),
            None => "Game over: undefined".into(),
        },
    }
}

/// Dumps the whole [`EngineState`] as indented JSON.
pub fn dump(state: &EngineState) -> String {
    serde_json::to_string_pretty(state).unwrap_or_else(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::GameStatus;
    use serde_json::json;
    use test_strategy::proptest;

    #[test]
    fn missing_state_is_reported() {
        assert_eq!(describe(None), "No engine state.");
    }

    #[proptest]
    fn error_event_shows_its_message(m: String) {
        let state = EngineState {
            event: Some("error".into()),
            message: Some(m.clone()),
            ..EngineState::default()
        };

        assert_eq!(describe(Some(&state)), format!("Error: {m}"));
    }

    #[test]
    fn error_event_without_message_is_unknown() {
        let state = EngineState {
            event: Some("error".into()),
            ..EngineState::default()
        };

        assert_eq!(describe(Some(&state)), "Error: Unknown");
    }

    #[test]
    fn ongoing_game_shows_side_to_move() {
        let mut state = EngineState {
            side_to_move: Some("w".into()),
            status: Some(GameStatus::Ongoing),
            ..EngineState::default()
        };

        assert_eq!(describe(Some(&state)), "Side to move: White");

        state.side_to_move = Some("b".into());
        assert_eq!(describe(Some(&state)), "Side to move: Black");
    }

    #[proptest]
    fn finished_game_shows_terminal_status(#[filter(#s != "ongoing")] s: String) {
        let state = EngineState {
            status: Some(GameStatus::from(s.clone())),
            ..EngineState::default()
        };

        assert_eq!(describe(Some(&state)), format!("Game over: {s}"));
    }

    #[test]
    fn dump_is_indented_json() -> Result<(), serde_json::Error> {
        let state: EngineState = serde_json::from_value(json!({ "status": "stalemate" }))?;
        assert_eq!(dump(&state), "{\n  \"status\": \"stalemate\"\n}");
        Ok(())
    }
}
