use {
  crate::Address,
  multihash::{Code, MultihashDigest},
  once_cell::sync::OnceCell,
  std::fmt::Debug,
};

/// Domain separator mixed into the predicate root so that a predicate
/// address can never collide with a hash of arbitrary data.
const PREDICATE_ROOT_TAG: &[u8] = b"predicate-root";

/// Compiled predicate program.
///
/// The address of a predicate account is derived from its bytecode,
/// so the same program always owns the same account on every network
/// that uses this derivation.
#[derive(Clone)]
pub struct Bytecode {
  code: Vec<u8>,
  root_cache: OnceCell<Address>,
}

impl Bytecode {
  pub fn new(code: Vec<u8>) -> Self {
    Self {
      code,
      root_cache: OnceCell::new(),
    }
  }

  pub fn as_bytes(&self) -> &[u8] {
    &self.code
  }

  pub fn len(&self) -> usize {
    self.code.len()
  }

  pub fn is_empty(&self) -> bool {
    self.code.is_empty()
  }

  /// Hexadecimal text form of the program with a `0x` prefix.
  pub fn to_hex(&self) -> String {
    format!("0x{}", hex::encode(&self.code))
  }

  /// Deterministic address of the account governed by this program.
  pub fn root(&self) -> &Address {
    self.root_cache.get_or_init(|| {
      let mut preimage =
        Vec::with_capacity(PREDICATE_ROOT_TAG.len() + self.code.len());
      preimage.extend_from_slice(PREDICATE_ROOT_TAG);
      preimage.extend_from_slice(&self.code);
      let digest = Code::Sha3_256.digest(&preimage);
      let mut bytes = [0u8; 32];
      bytes.copy_from_slice(&digest.digest()[..32]);
      Address::new(bytes)
    })
  }
}

impl PartialEq for Bytecode {
  fn eq(&self, other: &Self) -> bool {
    self.code == other.code
  }
}

impl Eq for Bytecode {}

impl Debug for Bytecode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "bytecode({} bytes, root {})", self.code.len(), self.root())
  }
}
