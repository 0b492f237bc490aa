use {
  crate::wallet_address,
  predicate_client_sdk::Error,
  predicate_primitives::{Address, AssetId, PrivateKey},
  std::time::Duration,
};

/// Devnode wide configuration.
#[derive(Debug, Clone)]
pub struct DevnodeConfig {
  /// Block production interval. Transfers submitted within one
  /// interval land in the same block.
  pub block_time: Duration,

  /// Lowest accepted gas price, reported by the fee config query.
  pub min_gas_price: u64,

  /// Gas units charged for one transfer. The fee burnt from the
  /// sender is `gas_price * transfer_gas`.
  pub transfer_gas: u64,

  /// Balances that exist before the first block.
  pub genesis: Vec<(Address, AssetId, u64)>,
}

impl DevnodeConfig {
  /// Adds a genesis allocation of the base asset to the wallet that
  /// `key` controls on this devnode.
  pub fn with_funded_key(
    mut self,
    key: &PrivateKey,
    amount: u64,
  ) -> Result<Self, Error> {
    self
      .genesis
      .push((wallet_address(key)?, AssetId::BASE, amount));
    Ok(self)
  }

  pub fn with_block_time(mut self, block_time: Duration) -> Self {
    self.block_time = block_time;
    self
  }
}

impl Default for DevnodeConfig {
  fn default() -> Self {
    Self {
      block_time: Duration::from_millis(100),
      min_gas_price: 1,
      transfer_gas: 1_000,
      genesis: vec![],
    }
  }
}
