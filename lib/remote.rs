use crate::chess::Color;
use derive_more::{Display, Error, From};
use futures_util::future::BoxFuture;

mod envelope;
mod http;
mod state;

pub use envelope::*;
pub use http::*;
pub use state::*;

/// The reason why a request to the remote engine failed.
#[derive(Debug, Display, Error, From)]
pub enum RemoteError {
    /// The request could not be delivered or its response could not be decoded.
    #[display(fmt = "{}", _0)]
    Transport(reqwest::Error),

    /// The server explicitly declined the request.
    #[display(fmt = "{}", _0)]
    #[from(ignore)]
    Rejected(#[error(not(source))] String),
}

/// Trait for types that know how to talk to a remote chess engine.
///
/// Requests are independent of one another and of `self`, so several may be in flight at once.
/// Nothing is cancelled or coalesced; callers observe responses in the order they resolve.
#[cfg_attr(test, mockall::automock)]
pub trait Remote {
    /// Starts a new game where the user plays the given [`Color`].
    fn new_game(&self, color: Color) -> BoxFuture<'static, Result<EngineState, RemoteError>>;

    /// Submits a move in coordinate notation.
    ///
    /// The move is forwarded verbatim, validating it is up to the engine.
    fn play(&self, m: &str) -> BoxFuture<'static, Result<EngineState, RemoteError>>;

    /// Counts the leaf nodes of the move tree from the starting position.
    fn perft(&self, depth: u32) -> BoxFuture<'static, Result<Perft, RemoteError>>;

    /// Runs the engine's built-in test suite.
    fn run_tests(&self) -> BoxFuture<'static, Result<TestReport, RemoteError>>;
}
