use {
  crate::config::{
    Amounts,
    ArtifactPaths,
    Config,
    ConfigError,
    DEFAULT_FUNDING_AMOUNT,
    DEFAULT_SPEND_MARGIN,
  },
  clap::Parser,
  std::{path::PathBuf, time::Duration},
};

#[derive(Debug, Parser)]
#[clap(
  name = "run-predicate",
  about = "Funds a predicate from a wallet and spends it back to the wallet"
)]
pub struct SystemSettings {
  /// Name of the chain to run against
  #[clap(long, env = "NEXT_PUBLIC_FUEL_CHAIN_NAME", value_name = "NAME")]
  chain_name: Option<String>,

  /// Hex encoded private key of the funding wallet
  #[clap(long, env = "PRIVATE_KEY", hide_env_values = true, value_name = "HEX")]
  private_key: Option<String>,

  /// Provider endpoint, overrides the one registered for the chain
  #[clap(long, value_name = "URL")]
  provider_url: Option<String>,

  /// Compiled predicate bytecode
  #[clap(long, default_value = "out/debug/predicate-app.bin")]
  bin_path: PathBuf,

  /// JSON ABI of the predicate
  #[clap(long, default_value = "out/debug/predicate-app-abi.json")]
  abi_path: PathBuf,

  /// Base asset units sent from the wallet to the predicate
  #[clap(long, default_value_t = DEFAULT_FUNDING_AMOUNT, value_name = "UNITS")]
  amount: u64,

  /// Base asset units left in the predicate when spending it back
  #[clap(long, default_value_t = DEFAULT_SPEND_MARGIN, value_name = "UNITS")]
  spend_margin: u64,

  /// Block production interval of the in-process devnode
  #[clap(long, default_value = "100ms", value_name = "DURATION")]
  devnet_block_time: humantime::Duration,

  /// Base asset units credited to the wallet at devnode genesis
  #[clap(long, default_value_t = 10_000_000, value_name = "UNITS")]
  devnet_genesis_balance: u64,
}

impl SystemSettings {
  /// Validates the settings into the run configuration.
  ///
  /// This touches neither the filesystem nor the network, so a run
  /// with missing settings fails before doing any I/O.
  pub fn config(&self) -> Result<Config, ConfigError> {
    let config = Config::new(
      self.chain_name.as_deref(),
      self.private_key.as_deref(),
      ArtifactPaths {
        bytecode: self.bin_path.clone(),
        abi: self.abi_path.clone(),
      },
      Amounts::new(self.amount, self.spend_margin)?,
    )?;

    Ok(match &self.provider_url {
      Some(url) => config.with_provider_url(url),
      None => config,
    })
  }

  pub fn devnet_block_time(&self) -> Duration {
    *self.devnet_block_time
  }

  pub fn devnet_genesis_balance(&self) -> u64 {
    self.devnet_genesis_balance
  }
}
