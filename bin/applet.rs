use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod perft;
mod play;
mod suite;

#[derive(From, Subcommand)]
pub enum Applet {
    Play(play::Play),
    Perft(perft::Perft),
    #[clap(name = "tests")]
    Suite(suite::Suite),
}

impl Default for Applet {
    fn default() -> Self {
        play::Play::default().into()
    }
}

impl Applet {
    pub async fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Play(a) => Ok(a.execute().await?),
            Applet::Perft(a) => Ok(a.execute().await?),
            Applet::Suite(a) => Ok(a.execute().await?),
        }
    }
}

#[cfg(test)]
mockall::mock! {
    pub Engine {}

    impl lib::remote::Remote for Engine {
        fn new_game(
            &self,
            color: lib::chess::Color,
        ) -> futures_util::future::BoxFuture<
            'static,
            Result<lib::remote::EngineState, lib::remote::RemoteError>,
        >;

        fn play(
            &self,
            m: &str,
        ) -> futures_util::future::BoxFuture<
            'static,
            Result<lib::remote::EngineState, lib::remote::RemoteError>,
        >;

        fn perft(
            &self,
            depth: u32,
        ) -> futures_util::future::BoxFuture<
            'static,
            Result<lib::remote::Perft, lib::remote::RemoteError>,
        >;

        fn run_tests(
            &self,
        ) -> futures_util::future::BoxFuture<
            'static,
            Result<lib::remote::TestReport, lib::remote::RemoteError>,
        >;
    }
}
