use {
  crate::Error,
  async_trait::async_trait,
  predicate_primitives::{
    Abi,
    Address,
    AssetId,
    Bytecode,
    PrivateKey,
    Token,
    TxId,
  },
};

/// Fee parameters currently enforced by the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeConfig {
  /// Lowest gas price a transaction may declare and still be accepted.
  pub min_gas_price: u64,
}

/// Per-transaction options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TxOptions {
  /// When unset the backend picks the network's minimum.
  pub gas_price: Option<u64>,
}

impl TxOptions {
  pub fn with_gas_price(mut self, gas_price: u64) -> Self {
    self.gas_price = Some(gas_price);
    self
  }
}

/// Final state of a transaction that made it into a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResult {
  pub id: TxId,
  pub block_height: Option<u64>,
  pub fee: u64,
}

/// A session with one network.
#[async_trait]
pub trait Provider: Send + Sync {
  /// The asset used for transfers and to pay fees.
  fn base_asset_id(&self) -> AssetId;

  async fn fee_config(&self) -> Result<FeeConfig, Error>;
}

/// A submitted transaction that has not necessarily reached a final
/// state yet.
#[async_trait]
pub trait PendingTransaction: Send {
  /// Suspends until the network reports the transaction as final.
  ///
  /// There is no timeout here, if the network never settles the
  /// transaction this never returns.
  async fn wait_for_result(self) -> Result<TransactionResult, Error>;
}

/// Anything that owns coins on chain and can move them.
#[async_trait]
pub trait Account: Send + Sync {
  type Pending: PendingTransaction;

  fn address(&self) -> &Address;

  /// Balance as reported by the network, never computed locally.
  async fn balance(&self, asset_id: &AssetId) -> Result<u64, Error>;

  async fn transfer(
    &self,
    to: &Address,
    amount: u64,
    asset_id: AssetId,
    options: TxOptions,
  ) -> Result<Self::Pending, Error>;
}

/// An account governed by a program rather than a private key.
///
/// Before coins can be spent from it, the data the program evaluates
/// against has to be supplied. The arguments are encoded according to
/// the predicate's ABI.
pub trait PredicateAccount: Account {
  fn set_data(&mut self, args: Vec<Token>) -> Result<(), Error>;
}

/// Entrypoint into a client library for one family of networks.
///
/// Everything the runner knows about a blockchain goes through this
/// trait, which keeps signing, predicate evaluation and transport out
/// of the runner.
#[async_trait]
pub trait Chain: Send + Sync {
  type Provider: Provider;
  type Wallet: Account;
  type Predicate: PredicateAccount;

  async fn connect(&self, url: &str) -> Result<Self::Provider, Error>;

  fn wallet(
    &self,
    key: &PrivateKey,
    provider: &Self::Provider,
  ) -> Result<Self::Wallet, Error>;

  fn predicate(
    &self,
    bytecode: &Bytecode,
    abi: &Abi,
    provider: &Self::Provider,
  ) -> Result<Self::Predicate, Error>;
}
