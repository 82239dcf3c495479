/// Chess domain types.
pub mod chess;
/// Client for the remote chess engine.
pub mod remote;
/// Board rendering and user interaction.
pub mod view;
