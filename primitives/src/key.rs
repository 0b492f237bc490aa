use {
  crate::address::{parse_b256, Error as AddressError},
  std::{fmt::Debug, str::FromStr},
  thiserror::Error,
};

#[derive(Debug, Error, PartialEq)]
pub enum Error {
  #[error("private key is empty")]
  Empty,

  #[error("malformed private key: {0}")]
  Malformed(#[from] AddressError),
}

/// A 32-byte secret used to derive a wallet identity and sign
/// transactions on its behalf.
///
/// The key material never shows up in `Debug` output, so it is safe
/// to log structures that embed it.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey([u8; 32]);

impl PrivateKey {
  pub fn as_bytes(&self) -> &[u8; 32] {
    &self.0
  }

  /// Lowercase hex of the key with a `0x` prefix, the form expected
  /// by client libraries that parse keys from text.
  pub fn to_hex(&self) -> String {
    format!("0x{}", hex::encode(self.0))
  }
}

impl Debug for PrivateKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "PrivateKey(<redacted>)")
  }
}

impl FromStr for PrivateKey {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.trim().is_empty() {
      return Err(Error::Empty);
    }
    Ok(Self(parse_b256(s)?))
  }
}

impl From<[u8; 32]> for PrivateKey {
  fn from(bytes: [u8; 32]) -> Self {
    Self(bytes)
  }
}

#[cfg(test)]
mod tests {
  use super::{Error, PrivateKey};

  #[test]
  fn parses_and_redacts() -> anyhow::Result<()> {
    let key: PrivateKey =
      "0x5f70feeff1f229e4a95e1056e8b4d80d0b24b565674860cc213bdb07127ce1b1"
        .parse()?;
    assert_eq!(key.as_bytes()[0], 0x5f);
    assert_eq!(format!("{key:?}"), "PrivateKey(<redacted>)");
    assert_eq!(
      key.to_hex(),
      "0x5f70feeff1f229e4a95e1056e8b4d80d0b24b565674860cc213bdb07127ce1b1"
    );
    Ok(())
  }

  #[test]
  fn empty_and_short_keys_are_rejected() {
    assert_eq!("".parse::<PrivateKey>().unwrap_err(), Error::Empty);
    assert_eq!("   ".parse::<PrivateKey>().unwrap_err(), Error::Empty);
    assert!(matches!(
      "0x1234".parse::<PrivateKey>(),
      Err(Error::Malformed(_))
    ));
  }
}
