//! Backend for live Fuel networks built on the `fuels` SDK.
//!
//! `fuels` resolves transfers once they are included in a block, so the
//! pending handles returned here are already settled.
//!
//! `fuels` reports node failures as text. When that text embeds the
//! node's GraphQL error body its error list is recovered, otherwise
//! [`Error::reason`] is the whole text.

use {
  crate::{
    Account,
    Chain,
    Error,
    FeeConfig,
    PendingTransaction,
    PredicateAccount,
    Provider,
    TransactionResult,
    TxOptions,
  },
  async_trait::async_trait,
  fuels::{
    accounts::predicate::Predicate,
    crypto::SecretKey,
    prelude::{
      Account as FuelAccount,
      Address as FuelAddress,
      AssetId as FuelAssetId,
      Bech32Address,
      Provider as FuelsProvider,
      TxPolicies,
      ViewOnlyAccount as _,
      WalletUnlocked,
    },
  },
  predicate_primitives::{
    Abi,
    Address,
    AssetId,
    Bytecode,
    PrivateKey,
    Token,
    TxId,
  },
  tracing::debug,
};

fn to_bech32(address: &Address) -> Bech32Address {
  Bech32Address::from(FuelAddress::new(address.to_bytes()))
}

fn from_bech32(address: &Bech32Address) -> Address {
  Address::new(*address.hash())
}

fn to_asset_id(asset_id: AssetId) -> FuelAssetId {
  FuelAssetId::new(asset_id.to_bytes())
}

/// Connects to Fuel GraphQL endpoints.
#[derive(Debug, Default, Clone, Copy)]
pub struct FuelChain;

#[derive(Debug, Clone)]
pub struct FuelProvider {
  inner: FuelsProvider,
}

#[async_trait]
impl Provider for FuelProvider {
  fn base_asset_id(&self) -> AssetId {
    AssetId::new(**self.inner.base_asset_id())
  }

  async fn fee_config(&self) -> Result<FeeConfig, Error> {
    let latest = self
      .inner
      .latest_gas_price()
      .await
      .map_err(|e| Error::from_text(e.to_string()))?;
    Ok(FeeConfig {
      min_gas_price: latest.gas_price,
    })
  }
}

/// Transfer that `fuels` already waited on.
#[derive(Debug)]
pub struct SettledTransaction {
  result: TransactionResult,
}

#[async_trait]
impl PendingTransaction for SettledTransaction {
  async fn wait_for_result(self) -> Result<TransactionResult, Error> {
    Ok(self.result)
  }
}

async fn transfer_from(
  account: &(impl FuelAccount + Sync),
  to: &Address,
  amount: u64,
  asset_id: AssetId,
  options: TxOptions,
) -> Result<SettledTransaction, Error> {
  // Fuel nodes price gas themselves, the hint is only logged.
  debug!(
    "submitting transfer of {amount} to {to} (gas price hint {:?})",
    options.gas_price
  );
  let (tx_id, _receipts) = account
    .transfer(
      &to_bech32(to),
      amount,
      to_asset_id(asset_id),
      TxPolicies::default(),
    )
    .await
    .map_err(|e| Error::from_text(e.to_string()))?;

  Ok(SettledTransaction {
    result: TransactionResult {
      id: TxId::from_digest(&*tx_id),
      block_height: None,
      fee: 0,
    },
  })
}

pub struct FuelWallet {
  address: Address,
  inner: WalletUnlocked,
}

#[async_trait]
impl Account for FuelWallet {
  type Pending = SettledTransaction;

  fn address(&self) -> &Address {
    &self.address
  }

  async fn balance(&self, asset_id: &AssetId) -> Result<u64, Error> {
    self
      .inner
      .get_asset_balance(&to_asset_id(*asset_id))
      .await
      .map_err(|e| Error::from_text(e.to_string()))
  }

  async fn transfer(
    &self,
    to: &Address,
    amount: u64,
    asset_id: AssetId,
    options: TxOptions,
  ) -> Result<Self::Pending, Error> {
    transfer_from(&self.inner, to, amount, asset_id, options).await
  }
}

pub struct FuelPredicate {
  address: Address,
  abi: Abi,
  inner: Predicate,
}

#[async_trait]
impl Account for FuelPredicate {
  type Pending = SettledTransaction;

  fn address(&self) -> &Address {
    &self.address
  }

  async fn balance(&self, asset_id: &AssetId) -> Result<u64, Error> {
    self
      .inner
      .get_asset_balance(&to_asset_id(*asset_id))
      .await
      .map_err(|e| Error::from_text(e.to_string()))
  }

  async fn transfer(
    &self,
    to: &Address,
    amount: u64,
    asset_id: AssetId,
    options: TxOptions,
  ) -> Result<Self::Pending, Error> {
    transfer_from(&self.inner, to, amount, asset_id, options).await
  }
}

impl PredicateAccount for FuelPredicate {
  fn set_data(&mut self, args: Vec<Token>) -> Result<(), Error> {
    let data = self.abi.encode_main_args(&args)?;
    self.inner = self.inner.clone().with_data(data);
    Ok(())
  }
}

#[async_trait]
impl Chain for FuelChain {
  type Predicate = FuelPredicate;
  type Provider = FuelProvider;
  type Wallet = FuelWallet;

  async fn connect(&self, url: &str) -> Result<Self::Provider, Error> {
    let inner =
      FuelsProvider::connect(url)
        .await
        .map_err(|e| Error::Connection {
          url: url.to_owned(),
          reason: e.to_string(),
        })?;
    Ok(FuelProvider { inner })
  }

  fn wallet(
    &self,
    key: &PrivateKey,
    provider: &Self::Provider,
  ) -> Result<Self::Wallet, Error> {
    let secret: SecretKey = key
      .to_hex()
      .parse()
      .map_err(|e| Error::InvalidKey(format!("{e:?}")))?;
    let inner =
      WalletUnlocked::new_from_private_key(secret, Some(provider.inner.clone()));
    Ok(FuelWallet {
      address: from_bech32(inner.address()),
      inner,
    })
  }

  fn predicate(
    &self,
    bytecode: &Bytecode,
    abi: &Abi,
    provider: &Self::Provider,
  ) -> Result<Self::Predicate, Error> {
    if bytecode.is_empty() {
      return Err(Error::InvalidPredicate("empty bytecode".into()));
    }
    let inner = Predicate::from_code(bytecode.as_bytes().to_vec())
      .with_provider(provider.inner.clone());
    Ok(FuelPredicate {
      address: from_bech32(inner.address()),
      abi: abi.clone(),
      inner,
    })
  }
}
