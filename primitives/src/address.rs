use {
  serde::{Deserialize, Serialize},
  std::{
    fmt::{Debug, Display},
    ops::Deref,
    str::FromStr,
  },
  thiserror::Error,
};

#[derive(Debug, Error, PartialEq)]
pub enum Error {
  #[error("invalid hex encoding: {0}")]
  InvalidHex(#[from] hex::FromHexError),

  #[error("expected 32 bytes, got {0}")]
  InvalidLength(usize),
}

/// Parses a 256-bit value from its hex form, with or without
/// the `0x` prefix.
pub(crate) fn parse_b256(s: &str) -> Result<[u8; 32], Error> {
  let s = s.trim();
  let s = s.strip_prefix("0x").unwrap_or(s);
  let bytes = hex::decode(s)?;
  let len = bytes.len();
  bytes.try_into().map_err(|_| Error::InvalidLength(len))
}

/// Represents an address of an account on chain.
///
/// The same address could either represent a user wallet that
/// is controlled by a private key (externally owned) or a predicate
/// account whose address is the root of its bytecode and whose coins
/// are spendable only when the predicate program accepts the spending
/// transaction.
///
/// Addresses are rendered as `0x`-prefixed lowercase hex (b256).
#[derive(
  Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Address([u8; 32]);

impl Address {
  pub const fn new(bytes: [u8; 32]) -> Self {
    Self(bytes)
  }

  pub fn to_bytes(&self) -> [u8; 32] {
    self.0
  }
}

impl AsRef<[u8]> for Address {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl Deref for Address {
  type Target = [u8];

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl Display for Address {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "0x{}", hex::encode(self.0))
  }
}

impl Debug for Address {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "address(0x{})", hex::encode(self.0))
  }
}

impl From<[u8; 32]> for Address {
  fn from(bytes: [u8; 32]) -> Self {
    Self(bytes)
  }
}

impl FromStr for Address {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    parse_b256(s).map(Self)
  }
}

/// Identifies a fungible asset on chain.
///
/// Every network has one base asset that is used for transfers and
/// to pay transaction fees. Its id is configured by the network and
/// is all zeros on development chains.
#[derive(
  Copy,
  Clone,
  Default,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Serialize,
  Deserialize,
)]
pub struct AssetId([u8; 32]);

impl AssetId {
  pub const BASE: AssetId = AssetId([0u8; 32]);

  pub const fn new(bytes: [u8; 32]) -> Self {
    Self(bytes)
  }

  pub fn to_bytes(&self) -> [u8; 32] {
    self.0
  }
}

impl AsRef<[u8]> for AssetId {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl Display for AssetId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "0x{}", hex::encode(self.0))
  }
}

impl Debug for AssetId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "asset(0x{})", hex::encode(self.0))
  }
}

impl FromStr for AssetId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    parse_b256(s).map(Self)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::{Address, AssetId, Error},
    std::str::FromStr,
  };

  #[test]
  fn address_hex_roundtrip() -> anyhow::Result<()> {
    let text =
      "0x09c0b2d1a486c439a87bcba6b46a7a1a23f3897cc83a94521a96da5c23bc58db";
    let addr: Address = text.parse()?;
    assert_eq!(addr.to_string(), text);
    assert_eq!(addr.to_bytes()[0], 0x09);

    // the 0x prefix is optional and surrounding whitespace is ignored
    let unprefixed: Address = text[2..].parse()?;
    assert_eq!(unprefixed, addr);
    assert_eq!(Address::from_str(&format!("  {text}\n"))?, addr);
    Ok(())
  }

  #[test]
  fn address_rejects_bad_input() {
    assert_eq!(
      "0xabcd".parse::<Address>().unwrap_err(),
      Error::InvalidLength(2)
    );
    assert!(matches!(
      "0xnothex".parse::<Address>(),
      Err(Error::InvalidHex(_))
    ));
  }

  #[test]
  fn base_asset_is_zeroed() {
    assert_eq!(AssetId::BASE, AssetId::default());
    assert_eq!(
      AssetId::BASE.to_string(),
      format!("0x{}", "0".repeat(64))
    );
  }
}
