use {
  serde::{Deserialize, Serialize},
  std::fmt::Display,
};

/// Identifier assigned by the network to a submitted transaction.
///
/// Networks differ in how they render ids, so this is kept as the
/// opaque text the network returned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxId(String);

impl TxId {
  pub fn new(id: impl Into<String>) -> Self {
    Self(id.into())
  }

  /// Renders raw digest bytes as a `0x`-prefixed id.
  pub fn from_digest(digest: &[u8]) -> Self {
    Self(format!("0x{}", hex::encode(digest)))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl Display for TxId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for TxId {
  fn from(id: &str) -> Self {
    Self(id.to_owned())
  }
}
