use {
  crate::registry::{self, ChainInfo, UnknownChain},
  predicate_primitives::{KeyError, PrivateKey},
  std::path::PathBuf,
  thiserror::Error,
};

/// Default amount moved into the predicate, in the smallest
/// denomination of the base asset.
pub const DEFAULT_FUNDING_AMOUNT: u64 = 300_000;

/// Default part of the funding that stays in the predicate when
/// spending back to the wallet.
pub const DEFAULT_SPEND_MARGIN: u64 = 150_000;

pub const CHAIN_NAME_VAR: &str = "NEXT_PUBLIC_FUEL_CHAIN_NAME";
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
  #[error(
    "Missing some config in .env file. Should have \
     NEXT_PUBLIC_FUEL_CHAIN_NAME and PRIVATE_KEY (missing: {})",
    .0.join(", ")
  )]
  Missing(Vec<&'static str>),

  #[error("PRIVATE_KEY is not a valid key: {0}")]
  InvalidKey(#[from] KeyError),

  #[error(
    "spend margin {margin} must be greater than zero and less than the \
     funding amount {funding}"
  )]
  InvalidAmounts { funding: u64, margin: u64 },
}

/// Amounts moved by one run, in the smallest denomination of the
/// base asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amounts {
  funding: u64,
  spend_margin: u64,
}

impl Amounts {
  pub fn new(funding: u64, spend_margin: u64) -> Result<Self, ConfigError> {
    if spend_margin == 0 || spend_margin >= funding {
      return Err(ConfigError::InvalidAmounts {
        funding,
        margin: spend_margin,
      });
    }
    Ok(Self {
      funding,
      spend_margin,
    })
  }

  /// Sent from the wallet to the predicate.
  pub fn funding(&self) -> u64 {
    self.funding
  }

  pub fn spend_margin(&self) -> u64 {
    self.spend_margin
  }

  /// Sent from the predicate back to the wallet. Always strictly
  /// between zero and the funding amount.
  pub fn spend(&self) -> u64 {
    self.funding - self.spend_margin
  }
}

impl Default for Amounts {
  fn default() -> Self {
    Self {
      funding: DEFAULT_FUNDING_AMOUNT,
      spend_margin: DEFAULT_SPEND_MARGIN,
    }
  }
}

/// Locations of the compiler output for the predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
  pub bytecode: PathBuf,
  pub abi: PathBuf,
}

impl Default for ArtifactPaths {
  fn default() -> Self {
    Self {
      bytecode: PathBuf::from("out/debug/predicate-app.bin"),
      abi: PathBuf::from("out/debug/predicate-app-abi.json"),
    }
  }
}

/// Everything a run needs, validated once at startup.
///
/// Holding a `Config` means the required settings were present, so
/// nothing downstream has to look at the environment again.
#[derive(Debug, Clone)]
pub struct Config {
  pub chain_name: String,
  pub private_key: PrivateKey,
  pub provider_url: Option<String>,
  pub artifacts: ArtifactPaths,
  pub amounts: Amounts,
}

impl Config {
  pub fn new(
    chain_name: Option<&str>,
    private_key: Option<&str>,
    artifacts: ArtifactPaths,
    amounts: Amounts,
  ) -> Result<Self, ConfigError> {
    let chain_name = chain_name.map(str::trim).filter(|s| !s.is_empty());
    let private_key = private_key.map(str::trim).filter(|s| !s.is_empty());

    let (chain_name, private_key) = match (chain_name, private_key) {
      (Some(chain_name), Some(private_key)) => (chain_name, private_key),
      (chain_name, private_key) => {
        let mut missing = vec![];
        if chain_name.is_none() {
          missing.push(CHAIN_NAME_VAR);
        }
        if private_key.is_none() {
          missing.push(PRIVATE_KEY_VAR);
        }
        return Err(ConfigError::Missing(missing));
      }
    };

    Ok(Self {
      chain_name: chain_name.to_owned(),
      private_key: private_key.parse()?,
      provider_url: None,
      artifacts,
      amounts,
    })
  }

  pub fn with_provider_url(mut self, url: impl Into<String>) -> Self {
    self.provider_url = Some(url.into());
    self
  }

  /// Resolves the configured chain name, applying the provider url
  /// override if one was given.
  pub fn chain_info(&self) -> Result<ChainInfo, UnknownChain> {
    let mut info = registry::resolve(&self.chain_name)?;
    if let Some(url) = &self.provider_url {
      info.provider_url = url.clone();
    }
    Ok(info)
  }
}
