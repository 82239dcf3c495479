use crate::chess::{Color, Placement, Square};
use crate::remote::{EngineState, Remote, RemoteError};
use derive_more::{Constructor, Display};
use futures_util::future::BoxFuture;
use tracing::{debug, instrument, warn};

mod board;
mod selection;
mod status;

pub use board::*;
pub use selection::*;
pub use status::*;

/// Where the game session stands.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    /// No game has been requested yet.
    #[default]
    #[display(fmt = "idle")]
    Idle,
    /// A new game has been requested.
    #[display(fmt = "loading")]
    Loading,
    #[display(fmt = "ongoing")]
    Ongoing,
    #[display(fmt = "terminal")]
    Terminal,
    /// The last request failed, the board shows the last good position.
    #[display(fmt = "failed")]
    Failed,
}

/// What a [`Request`] asked for.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RequestKind {
    #[display(fmt = "new game")]
    NewGame,
    #[display(fmt = "move")]
    Move,
}

/// A request in flight to the [`Remote`] engine.
pub struct Request {
    kind: RequestKind,
    response: BoxFuture<'static, Result<EngineState, RemoteError>>,
}

impl Request {
    /// What this request asked for.
    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    /// Waits for the engine to respond.
    pub async fn resolve(self) -> Response {
        Response::new(self.kind, self.response.await)
    }
}

/// The engine's answer to a [`Request`].
#[derive(Debug, Constructor)]
pub struct Response {
    pub kind: RequestKind,
    pub result: Result<EngineState, RemoteError>,
}

/// What became of a click on the board.
pub enum Click {
    /// No game is loaded.
    Ignored,
    /// The square is now the pending origin.
    Selected(Square),
    /// The move was composed and submitted.
    Submitted(Request),
    /// The move awaits the choice of a promotion piece, see [`BoardView::promote`].
    Promotion(PendingPromotion),
}

/// The controller behind the board.
///
/// Holds everything shown to the user: the [`Board`], the status line,
/// the move input and a dump of the last engine response.
#[derive(Debug)]
pub struct BoardView<R> {
    remote: R,
    phase: Phase,
    selection: Selection,
    fen: Option<String>,
    board: Board,
    status: String,
    output: String,
    input: String,
}

impl<R: Remote> BoardView<R> {
    /// Constructs a [`BoardView`] showing an empty board.
    pub fn new(remote: R) -> Self {
        BoardView {
            remote,
            phase: Phase::Idle,
            selection: Selection::None,
            fen: None,
            board: Board::render(Placement::parse("8/8/8/8/8/8/8/8 w - - 0 1").as_ref(), None),
            status: String::new(),
            output: String::new(),
            input: String::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// The dump of the last successful engine response.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The last position received from the engine.
    pub fn fen(&self) -> Option<&str> {
        self.fen.as_deref()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Replaces the text of the move input.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    fn placement(&self) -> Option<Placement> {
        Placement::parse(self.fen.as_deref()?)
    }

    fn redraw(&mut self) {
        self.board = Board::render(self.placement().as_ref(), self.selection.origin());
    }

    /// Requests a new game where the user plays `color`.
    #[instrument(level = "debug", skip(self))]
    pub fn new_game(&mut self, color: Color) -> Request {
        self.phase = Phase::Loading;
        self.status = "Starting...".into();
        self.output.clear();

        Request {
            kind: RequestKind::NewGame,
            response: self.remote.new_game(color),
        }
    }

    /// Submits the move typed into the input, unless it is blank.
    #[instrument(level = "debug", skip(self), fields(input = %self.input))]
    pub fn submit(&mut self) -> Option<Request> {
        let m = self.input.trim();
        if m.is_empty() {
            return None;
        }

        Some(Request {
            kind: RequestKind::Move,
            response: self.remote.play(m),
        })
    }

    /// Registers a click on a [`Square`].
    #[instrument(level = "debug", skip(self))]
    pub fn click(&mut self, sq: Square) -> Click {
        if self.fen.is_none() {
            return Click::Ignored;
        }

        let placement = self.placement();
        let composed = self.selection.click(sq, placement.as_ref());
        self.redraw();

        match composed {
            None => {
                self.input = sq.to_string();
                Click::Selected(sq)
            }

            Some(Composed::Promotion(pending)) => Click::Promotion(pending),

            Some(Composed::Ready(m)) => {
                self.input = m.to_string();
                self.submit().map_or(Click::Ignored, Click::Submitted)
            }
        }
    }

    /// Completes a promotion with the user's reply and submits the move.
    #[instrument(level = "debug", skip(self))]
    pub fn promote(&mut self, pending: PendingPromotion, reply: Option<&str>) -> Option<Request> {
        self.input = pending.resolve(reply).to_string();
        self.submit()
    }

    /// Reflects the engine's [`Response`].
    ///
    /// Responses are applied in the order they arrive, the last one wins.
    /// A failed request leaves the board untouched.
    #[instrument(level = "debug", skip(self, response), fields(kind = %response.kind))]
    pub fn apply(&mut self, response: Response) {
        match (response.kind, response.result) {
            (_, Err(e)) => {
                warn!("{}", e);
                self.fail(format!("Error: {}", e));
            }

            (RequestKind::NewGame, Ok(state)) if state.is_error() => {
                let message = state.message.as_deref().unwrap_or("Engine error");
                self.fail(format!("Error: {}", message));
            }

            (RequestKind::Move, Ok(state)) if state.is_error() => {
                let message = state.message.as_deref().unwrap_or_default();
                self.fail(format!("Illegal move: {}", message));
            }

            (kind, Ok(state)) => {
                if kind == RequestKind::NewGame {
                    self.selection.clear();
                } else {
                    self.input.clear();
                }

                self.fen = state.fen.clone();
                self.redraw();
                self.status = describe(Some(&state));
                self.output = dump(&state);
                self.phase = match state.is_ongoing() {
                    true => Phase::Ongoing,
                    false => Phase::Terminal,
                };

                debug!(phase = %self.phase, fen = ?self.fen);
            }
        }
    }

    fn fail(&mut self, status: String) {
        debug!(%status);
        self.status = status;
        self.phase = Phase::Failed;
    }
}
