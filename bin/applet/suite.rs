use crate::{build::Build, config::RemoteConfig};
use anyhow::{bail, Error as Anyhow};
use clap::Parser;
use lib::remote::Remote;
use tracing::{info, instrument, warn};

/// Runs the engine's built-in test suite.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Suite {
    /// The remote engine configuration.
    #[clap(short, long, default_value_t)]
    remote: RemoteConfig,
}

impl Suite {
    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        run(&self.remote.build()?).await
    }
}

async fn run<R: Remote>(remote: &R) -> Result<(), Anyhow> {
    let report = remote.run_tests().await?;

    for line in report.output.lines() {
        info!("{}", line);
    }

    if !report.success {
        warn!(returncode = report.returncode);
        bail!("test suite failed with return code {}", report.returncode);
    }

    Ok(())
}
