use crate::{build::Build, config::RemoteConfig};
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::remote::{Perft as Count, Remote};
use tracing::{info, instrument};

/// Counts the leaf nodes of the engine's move tree.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Perft {
    /// The remote engine configuration.
    #[clap(short, long, default_value_t)]
    remote: RemoteConfig,

    /// How many plies deep to count.
    #[clap(default_value_t = 3)]
    depth: u32,
}

impl Perft {
    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        let remote = self.remote.build()?;
        let count = count(&remote, self.depth).await?;
        info!(depth = %count.depth, nodes = %count.nodes);
        Ok(())
    }
}

async fn count<R: Remote>(remote: &R, depth: u32) -> Result<Count, Anyhow> {
    let count = remote
        .perft(depth)
        .await
        .with_context(|| format!("perft at depth {depth} failed"))?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applet::MockEngine;
    use lib::remote::RemoteError;
    use std::future::ready;
    use test_strategy::proptest;
    use tokio::runtime;

    #[proptest]
    fn count_forwards_the_engine_result(#[strategy(1u32..8)] d: u32, n: u64) {
        let rt = runtime::Builder::new_multi_thread().build()?;

        let mut remote = MockEngine::new();
        remote
            .expect_perft()
            .once()
            .withf(move |&depth| depth == d)
            .returning(move |depth| Box::pin(ready(Ok(Count { depth, nodes: n }))));

        assert_eq!(
            rt.block_on(count(&remote, d)).ok(),
            Some(Count { depth: d, nodes: n })
        );
    }

    #[test]
    fn count_fails_if_engine_rejects_the_request() -> Result<(), Anyhow> {
        let rt = runtime::Builder::new_multi_thread().build()?;

        let mut remote = MockEngine::new();
        remote
            .expect_perft()
            .once()
            .returning(|_| Box::pin(ready(Err(RemoteError::Rejected("perft failed".into())))));

        let e = rt.block_on(count(&remote, 9)).unwrap_err();
        assert_eq!(e.to_string(), "perft at depth 9 failed");
        assert_eq!(e.root_cause().to_string(), "perft failed");

        Ok(())
    }
}
