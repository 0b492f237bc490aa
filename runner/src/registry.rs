use {predicate_devnode::DEVNET_SCHEME, thiserror::Error};

/// Networks the runner knows by name, with the GraphQL endpoint of
/// their public node.
const KNOWN_CHAINS: &[(&str, &str)] = &[
  ("devnet", "devnet://local"),
  ("localhost", "http://127.0.0.1:4000/v1/graphql"),
  ("testnet", "https://testnet.fuel.network/v1/graphql"),
  ("beta-5", "https://beta-5.fuel.network/graphql"),
];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown chain '{name}', expected one of: {known}")]
pub struct UnknownChain {
  pub name: String,
  pub known: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainInfo {
  pub name: String,
  pub provider_url: String,
}

impl ChainInfo {
  /// True when the provider is the in-process devnode rather than a
  /// network endpoint.
  pub fn is_devnet(&self) -> bool {
    self.provider_url.starts_with(DEVNET_SCHEME)
  }
}

pub fn resolve(name: &str) -> Result<ChainInfo, UnknownChain> {
  KNOWN_CHAINS
    .iter()
    .find(|(known, _)| known.eq_ignore_ascii_case(name.trim()))
    .map(|(known, url)| ChainInfo {
      name: (*known).to_owned(),
      provider_url: (*url).to_owned(),
    })
    .ok_or_else(|| UnknownChain {
      name: name.to_owned(),
      known: KNOWN_CHAINS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", "),
    })
}
