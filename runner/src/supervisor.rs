//! Top level of a run: picks the chain backend for the resolved
//! provider and turns whatever the run returns into a process exit.

use {
  crate::{
    config::Config,
    error::Error,
    orchestrator::{Orchestrator, Report},
    registry::ChainInfo,
    settings::SystemSettings,
  },
  predicate_client_sdk::Chain,
  predicate_devnode::{DevnodeConfig, Devnet},
  std::process::ExitCode,
  tracing::{debug, error},
};

/// How a supervised run ended.
#[derive(Debug)]
pub enum Exit {
  /// Funding went through. The invocation may still have failed, that
  /// is part of the report.
  Completed(Report),

  /// A fatal error stopped the run. Holds the logged message.
  Aborted(String),
}

impl Exit {
  pub fn is_success(&self) -> bool {
    matches!(self, Exit::Completed(_))
  }

  pub fn code(&self) -> ExitCode {
    match self {
      Exit::Completed(_) => ExitCode::SUCCESS,
      Exit::Aborted(_) => ExitCode::FAILURE,
    }
  }
}

/// Runs against `chain` and logs any fatal error as
/// `Unhandled error: <message>`.
pub async fn supervise<C: Chain>(
  chain: &C,
  config: &Config,
  provider_url: &str,
) -> Exit {
  report_exit(Orchestrator::new(chain, config).run(provider_url).await)
}

/// Starts a run on the backend that serves `chain`.
///
/// `devnet://` providers get a fresh in-process devnode with the
/// configured wallet funded at genesis, everything else goes through
/// the network client.
pub async fn launch(
  settings: &SystemSettings,
  config: &Config,
  chain: &ChainInfo,
) -> Exit {
  debug!("running against {} at {}", chain.name, chain.provider_url);

  if !chain.is_devnet() {
    return launch_remote(config, chain).await;
  }

  let devnode = DevnodeConfig::default()
    .with_block_time(settings.devnet_block_time())
    .with_funded_key(&config.private_key, settings.devnet_genesis_balance());

  match devnode {
    Ok(devnode) => {
      supervise(&Devnet::new(devnode), config, &chain.provider_url).await
    }
    Err(e) => report_exit(Err(e.into())),
  }
}

#[cfg(feature = "fuel")]
async fn launch_remote(config: &Config, chain: &ChainInfo) -> Exit {
  use predicate_client_sdk::fuel::FuelChain;
  supervise(&FuelChain, config, &chain.provider_url).await
}

#[cfg(not(feature = "fuel"))]
async fn launch_remote(_: &Config, chain: &ChainInfo) -> Exit {
  report_exit(Err(Error::BackendUnavailable {
    chain: chain.name.clone(),
    url: chain.provider_url.clone(),
  }))
}

fn report_exit(result: Result<Report, Error>) -> Exit {
  match result {
    Ok(report) => {
      debug!("run finished: {report:?}");
      Exit::Completed(report)
    }
    Err(e) => {
      error!("Unhandled error: {e}");
      Exit::Aborted(e.to_string())
    }
  }
}
