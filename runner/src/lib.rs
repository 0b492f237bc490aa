//! Funds a predicate account from a wallet and spends it back.
//!
//! A run validates its [`Config`], loads the compiled predicate,
//! transfers the funding amount to the predicate's address and then
//! asks the predicate to send part of it back to the wallet. The chain
//! itself is reached through the traits of `predicate-client-sdk`.

mod artifacts;
mod config;
mod error;
mod orchestrator;
mod registry;
mod settings;
mod supervisor;

pub use {
  artifacts::{ArtifactError, PredicateArtifacts},
  config::{
    Amounts,
    ArtifactPaths,
    Config,
    ConfigError,
    CHAIN_NAME_VAR,
    DEFAULT_FUNDING_AMOUNT,
    DEFAULT_SPEND_MARGIN,
    PRIVATE_KEY_VAR,
  },
  error::Error,
  orchestrator::{Funding, InvokeOutcome, Orchestrator, Report},
  registry::{resolve, ChainInfo, UnknownChain},
  settings::SystemSettings,
  supervisor::{launch, supervise, Exit},
};
