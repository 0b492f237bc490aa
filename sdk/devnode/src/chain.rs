use {
  crate::{
    block::{Authorization, Transfer, TransferBody},
    node::{Node, Outcome},
    settings::DevnodeConfig,
  },
  async_trait::async_trait,
  ed25519_dalek::{Keypair, PublicKey, SecretKey, Signer},
  once_cell::sync::OnceCell,
  predicate_client_sdk::{
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
  predicate_primitives::{
    Abi,
    Address,
    AssetId,
    Bytecode,
    PrivateKey,
    Token,
    TxId,
  },
  std::sync::Arc,
  tokio::sync::oneshot,
};

/// Scheme of provider urls served by the devnode.
pub const DEVNET_SCHEME: &str = "devnet://";

fn keypair(key: &PrivateKey) -> Result<Keypair, Error> {
  let secret = SecretKey::from_bytes(key.as_bytes())
    .map_err(|e| Error::InvalidKey(e.to_string()))?;
  let public = PublicKey::from(&secret);
  Ok(Keypair { secret, public })
}

/// Address of the wallet controlled by `key` on a devnode.
pub fn wallet_address(key: &PrivateKey) -> Result<Address, Error> {
  Ok(Address::new(keypair(key)?.public.to_bytes()))
}

/// Client side of an in-process devnode.
///
/// All providers connected through the same `Devnet` value share one
/// node, the node is started by the first `connect`.
#[derive(Default)]
pub struct Devnet {
  config: DevnodeConfig,
  node: OnceCell<Arc<Node>>,
}

impl Devnet {
  pub fn new(config: DevnodeConfig) -> Self {
    Self {
      config,
      node: OnceCell::new(),
    }
  }
}

#[async_trait]
impl Chain for Devnet {
  type Predicate = DevPredicate;
  type Provider = DevProvider;
  type Wallet = DevWallet;

  async fn connect(&self, url: &str) -> Result<Self::Provider, Error> {
    if !url.starts_with(DEVNET_SCHEME) {
      return Err(Error::UnsupportedProvider(url.to_owned()));
    }

    let node = self
      .node
      .get_or_init(|| Node::start(self.config.clone()))
      .clone();

    Ok(DevProvider { node })
  }

  fn wallet(
    &self,
    key: &PrivateKey,
    provider: &Self::Provider,
  ) -> Result<Self::Wallet, Error> {
    let keypair = keypair(key)?;
    Ok(DevWallet {
      address: Address::new(keypair.public.to_bytes()),
      keypair,
      node: provider.node.clone(),
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
    abi.main()?;

    Ok(DevPredicate {
      address: *bytecode.root(),
      bytecode: bytecode.clone(),
      abi: abi.clone(),
      data: None,
      node: provider.node.clone(),
    })
  }
}

pub struct DevProvider {
  node: Arc<Node>,
}

impl DevProvider {
  /// Height of the most recently produced block.
  pub fn block_height(&self) -> u64 {
    self.node.height()
  }
}

#[async_trait]
impl Provider for DevProvider {
  fn base_asset_id(&self) -> AssetId {
    AssetId::BASE
  }

  async fn fee_config(&self) -> Result<FeeConfig, Error> {
    Ok(FeeConfig {
      min_gas_price: self.node.min_gas_price(),
    })
  }
}

/// A transfer sitting in the devnode mempool.
pub struct DevPending {
  id: TxId,
  outcome: oneshot::Receiver<Outcome>,
}

#[async_trait]
impl PendingTransaction for DevPending {
  async fn wait_for_result(self) -> Result<TransactionResult, Error> {
    match self.outcome.await {
      Ok(Ok(result)) => Ok(result),
      Ok(Err(rejection)) => Err(rejection.into()),
      Err(_) => Err(Error::Dropped(self.id)),
    }
  }
}

async fn submit(
  node: &Node,
  body: TransferBody,
  auth: Authorization,
) -> Result<DevPending, Error> {
  let id = body.id();
  let outcome = node.submit(Transfer { body, auth }).await?;
  Ok(DevPending { id, outcome })
}

fn transfer_body(
  node: &Node,
  from: Address,
  to: &Address,
  amount: u64,
  asset_id: AssetId,
  options: TxOptions,
) -> TransferBody {
  TransferBody {
    from,
    to: *to,
    amount,
    asset_id,
    gas_price: options.gas_price.unwrap_or_else(|| node.min_gas_price()),
    nonce: node.next_nonce(),
  }
}

pub struct DevWallet {
  address: Address,
  keypair: Keypair,
  node: Arc<Node>,
}

#[async_trait]
impl Account for DevWallet {
  type Pending = DevPending;

  fn address(&self) -> &Address {
    &self.address
  }

  async fn balance(&self, asset_id: &AssetId) -> Result<u64, Error> {
    Ok(self.node.balance(&self.address, asset_id))
  }

  async fn transfer(
    &self,
    to: &Address,
    amount: u64,
    asset_id: AssetId,
    options: TxOptions,
  ) -> Result<Self::Pending, Error> {
    let body =
      transfer_body(&self.node, self.address, to, amount, asset_id, options);
    let signature = self.keypair.sign(&body.digest());
    submit(&self.node, body, Authorization::Signature(signature)).await
  }
}

pub struct DevPredicate {
  address: Address,
  bytecode: Bytecode,
  abi: Abi,
  data: Option<Vec<u8>>,
  node: Arc<Node>,
}

#[async_trait]
impl Account for DevPredicate {
  type Pending = DevPending;

  fn address(&self) -> &Address {
    &self.address
  }

  async fn balance(&self, asset_id: &AssetId) -> Result<u64, Error> {
    Ok(self.node.balance(&self.address, asset_id))
  }

  async fn transfer(
    &self,
    to: &Address,
    amount: u64,
    asset_id: AssetId,
    options: TxOptions,
  ) -> Result<Self::Pending, Error> {
    let body =
      transfer_body(&self.node, self.address, to, amount, asset_id, options);
    submit(&self.node, body, Authorization::Predicate {
      code: self.bytecode.clone(),
      data: self.data.clone(),
    })
    .await
  }
}

impl PredicateAccount for DevPredicate {
  fn set_data(&mut self, args: Vec<Token>) -> Result<(), Error> {
    self.data = Some(self.abi.encode_main_args(&args)?);
    Ok(())
  }
}
