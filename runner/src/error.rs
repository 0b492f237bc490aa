use {
  crate::{artifacts::ArtifactError, config::ConfigError, registry::UnknownChain},
  thiserror::Error,
};

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error(transparent)]
  Registry(#[from] UnknownChain),

  #[error(transparent)]
  Artifacts(#[from] ArtifactError),

  #[error(transparent)]
  Client(#[from] predicate_client_sdk::Error),

  #[error(
    "chain '{chain}' at {url} needs the network client, rebuild with \
     `--features fuel`"
  )]
  BackendUnavailable { chain: String, url: String },
}
