use {
  ed25519_dalek::Signature,
  multihash::{Code, MultihashDigest},
  predicate_primitives::{Address, AssetId, Bytecode, TxId},
};

/// Proof that the sender is allowed to move coins out of its account.
#[derive(Debug, Clone)]
pub enum Authorization {
  /// Wallet accounts sign the transfer body with their key.
  Signature(Signature),

  /// Predicate accounts carry their program and the data it is
  /// evaluated against. Data is `None` until it has been set.
  Predicate {
    code: Bytecode,
    data: Option<Vec<u8>>,
  },
}

/// The signed part of a transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferBody {
  pub from: Address,
  pub to: Address,
  pub amount: u64,
  pub asset_id: AssetId,
  pub gas_price: u64,
  pub nonce: u64,
}

impl TransferBody {
  /// Canonical byte representation, this is what wallets sign.
  pub fn digest(&self) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(32 * 3 + 8 * 3);
    bytes.extend_from_slice(&self.from);
    bytes.extend_from_slice(&self.to);
    bytes.extend_from_slice(&self.amount.to_be_bytes());
    bytes.extend_from_slice(self.asset_id.as_ref());
    bytes.extend_from_slice(&self.gas_price.to_be_bytes());
    bytes.extend_from_slice(&self.nonce.to_be_bytes());
    bytes
  }

  pub fn id(&self) -> TxId {
    TxId::from_digest(Code::Sha3_256.digest(&self.digest()).digest())
  }
}

#[derive(Debug, Clone)]
pub struct Transfer {
  pub body: TransferBody,
  pub auth: Authorization,
}

impl Transfer {
  pub fn id(&self) -> TxId {
    self.body.id()
  }
}

#[derive(Debug)]
pub struct Block {
  pub height: u64,
  pub transfers: Vec<Transfer>,
}
