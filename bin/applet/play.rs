use crate::io::{Io, Pipe};
use crate::{build::Build, config::RemoteConfig};
use anyhow::Error as Anyhow;
use clap::Parser;
use futures_util::{future::BoxFuture, stream::FuturesUnordered, FutureExt, StreamExt};
use lib::chess::{Color, Square};
use lib::remote::Remote;
use lib::view::{BoardView, Click, PendingPromotion, Request, Response};
use std::io::{self, ErrorKind::UnexpectedEof};
use tokio::io::{stdin, stdout};
use tracing::{debug, instrument};

const HELP: &str = "Type a move such as `e2e4`, click squares by typing their names, \
                    `new [w|b]` to start a game and `back` to leave.";

/// Plays against the remote engine from the terminal.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The remote engine configuration.
    #[clap(short, long, default_value_t)]
    remote: RemoteConfig,

    /// The side played by the user when a new game starts, `w` or `b`.
    #[clap(short, long, default_value = "w")]
    color: Color,
}

impl Default for Play {
    fn default() -> Self {
        Play {
            remote: RemoteConfig::default(),
            color: Color::White,
        }
    }
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        let remote = self.remote.build()?;
        let io = Pipe::new(stdout(), stdin());
        Session::new(io, remote, self.color).run().await
    }
}

/// A line typed by the user.
#[derive(Debug, Clone, Eq, PartialEq)]
enum Command {
    Back,
    NewGame(Option<Color>),
    Click(Square),
    Move(String),
    Invalid(String),
}

impl From<&str> for Command {
    fn from(line: &str) -> Self {
        let words: Vec<_> = line.split_whitespace().collect();

        match words[..] {
            ["back"] | ["quit"] => Command::Back,
            ["new"] => Command::NewGame(None),
            ["new", c] => match c.parse() {
                Ok(color) => Command::NewGame(Some(color)),
                Err(e) => Command::Invalid(format!("{e}, found `{c}`")),
            },
            ["new", ..] => Command::Invalid("usage: new [w|b]".into()),
            ["click", s] | [s] if s.parse::<Square>().is_ok() => match s.parse() {
                Ok(sq) => Command::Click(sq),
                Err(_) => Command::Move(line.into()),
            },
            _ => Command::Move(line.into()),
        }
    }
}

enum Event {
    Line(io::Result<String>),
    Response(Response),
}

/// A game session bound to the terminal.
struct Session<I, R> {
    io: I,
    view: BoardView<R>,
    color: Color,
    pending: FuturesUnordered<BoxFuture<'static, Response>>,
}

impl<I: Io + Send, R: Remote> Session<I, R> {
    fn new(io: I, remote: R, color: Color) -> Self {
        Session {
            io,
            view: BoardView::new(remote),
            color,
            pending: FuturesUnordered::new(),
        }
    }

    /// Runs until the user leaves or the input ends.
    ///
    /// Requests in flight when that happens are still waited for.
    async fn run(&mut self) -> Result<(), Anyhow> {
        self.io.send(HELP).await?;
        self.show(false).await?;

        loop {
            let event = tokio::select! {
                biased;
                Some(r) = self.pending.next(), if !self.pending.is_empty() => Event::Response(r),
                line = self.io.recv() => Event::Line(line),
            };

            match event {
                Event::Response(r) => {
                    self.view.apply(r);
                    self.show(true).await?;
                }

                Event::Line(Err(e)) if e.kind() == UnexpectedEof => break,
                Event::Line(Err(e)) => return Err(e.into()),
                Event::Line(Ok(line)) => {
                    if !self.handle(Command::from(line.as_str())).await? {
                        break;
                    }
                }
            }
        }

        while let Some(r) = self.pending.next().await {
            self.view.apply(r);
            self.show(true).await?;
        }

        Ok(())
    }

    /// Carries out a [`Command`], returns whether the session goes on.
    #[instrument(level = "debug", skip(self), err)]
    async fn handle(&mut self, cmd: Command) -> Result<bool, Anyhow> {
        match cmd {
            Command::Back => return Ok(false),

            Command::NewGame(color) => {
                let request = self.view.new_game(color.unwrap_or(self.color));
                self.dispatch(request);
            }

            Command::Click(sq) => match self.view.click(sq) {
                Click::Ignored => debug!("no game loaded yet"),
                Click::Selected(_) => {}
                Click::Submitted(request) => self.dispatch(request),
                Click::Promotion(pending) => {
                    let reply = self.prompt(PendingPromotion::PROMPT).await?;
                    if let Some(request) = self.view.promote(pending, reply.as_deref()) {
                        self.dispatch(request);
                    }
                }
            },

            Command::Invalid(reason) => self.io.send(&reason).await?,

            Command::Move(m) => {
                self.view.set_input(m);
                if let Some(request) = self.view.submit() {
                    self.dispatch(request);
                }
            }
        }

        self.show(false).await?;
        Ok(true)
    }

    fn dispatch(&mut self, request: Request) {
        debug!(kind = %request.kind(), in_flight = self.pending.len());
        self.pending.push(request.resolve().boxed());
    }

    /// Asks the user a question, no answer if the input ended.
    async fn prompt(&mut self, question: &str) -> Result<Option<String>, Anyhow> {
        self.io.send(question).await?;
        self.io.flush().await?;

        match self.io.recv().await {
            Ok(reply) => Ok(Some(reply)),
            Err(e) if e.kind() == UnexpectedEof => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Prints the board, the status line and the move input, followed by
    /// the dump of the last engine response if `dump` is set.
    async fn show(&mut self, dump: bool) -> Result<(), Anyhow> {
        self.io.send(&self.view.board().to_string()).await?;
        self.io.send(self.view.status()).await?;
        self.io.send(&format!("> {}", self.view.input())).await?;

        if dump && !self.view.output().is_empty() {
            self.io.send(self.view.output()).await?;
        }

        self.io.flush().await?;
        Ok(())
    }
}
