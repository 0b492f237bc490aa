#![allow(dead_code)]

use {
  async_trait::async_trait,
  predicate_client_sdk::{
    Account,
    Chain,
    Error,
    FeeConfig,
    NetworkError,
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
  predicate_runner::{Amounts, ArtifactPaths, Config},
  std::{
    io,
    path::Path,
    sync::{Arc, Mutex},
  },
  tracing::Dispatch,
};

pub const PREDICATE_ABI: &str = r#"{
  "types": [
    { "typeId": 0, "type": "b256", "components": null, "typeParameters": null },
    { "typeId": 1, "type": "bool", "components": null, "typeParameters": null }
  ],
  "functions": [{
    "inputs": [{ "name": "receiver", "type": 0, "typeArguments": null }],
    "name": "main",
    "output": { "name": "", "type": 1, "typeArguments": null },
    "attributes": null
  }],
  "loggedTypes": [],
  "messagesTypes": [],
  "configurables": []
}"#;

pub const PREDICATE_CODE: &[u8] = b"\x1a\x40\x50\x00predicate-app";

pub const PRIVATE_KEY: &str =
  "0x5f70feeff1f229e4a95e1056e8b4d80d0b24b565674860cc213bdb07127ce1b1";

pub const WALLET: Address = Address::new([0xaa; 32]);
pub const PREDICATE: Address = Address::new([0xbb; 32]);
pub const MIN_GAS_PRICE: u64 = 7;

/// Writes the predicate binary and its ABI into `dir`.
pub fn write_artifacts(dir: &Path) -> io::Result<ArtifactPaths> {
  let paths = ArtifactPaths {
    bytecode: dir.join("predicate-app.bin"),
    abi: dir.join("predicate-app-abi.json"),
  };
  std::fs::write(&paths.bytecode, PREDICATE_CODE)?;
  std::fs::write(&paths.abi, PREDICATE_ABI)?;
  Ok(paths)
}

pub fn config(chain_name: &str, artifacts: ArtifactPaths) -> Config {
  config_with(chain_name, artifacts, Amounts::default())
}

pub fn config_with(
  chain_name: &str,
  artifacts: ArtifactPaths,
  amounts: Amounts,
) -> Config {
  Config::new(Some(chain_name), Some(PRIVATE_KEY), artifacts, amounts)
    .expect("valid test config")
}

/// Every interaction the orchestrator had with the mock chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
  Connect(String),
  Wallet(PrivateKey),
  Predicate(Vec<u8>),
  FeeConfig,
  Balance(Address),
  SetData(Vec<Token>),
  Transfer {
    from: Address,
    to: Address,
    amount: u64,
    asset_id: AssetId,
    gas_price: Option<u64>,
  },
  Wait(TxId),
}

/// How the mock network treats a transfer.
#[derive(Debug, Clone)]
pub enum Settle {
  /// Final with this transaction id.
  Ok(&'static str),

  /// Rejected with a structured error list.
  Rejected(Vec<&'static str>),

  /// Failed without any error list.
  Failed(&'static str),
}

impl Settle {
  fn into_result(self, id: &TxId) -> Result<TransactionResult, Error> {
    match self {
      Settle::Ok(id) => Ok(TransactionResult {
        id: id.into(),
        block_height: Some(1),
        fee: 0,
      }),
      Settle::Rejected(messages) => Err(Error::rejected(
        format!("transaction {id} rejected"),
        messages.into_iter().map(NetworkError::new),
      )),
      Settle::Failed(message) => Err(Error::response(message)),
    }
  }
}

type Journal = Arc<Mutex<Vec<Call>>>;

#[derive(Clone)]
pub struct MockChain {
  journal: Journal,
  funding: Settle,
  spend: Settle,
  predicate_balance: u64,
  refuse_connect: Option<&'static str>,
}

impl Default for MockChain {
  fn default() -> Self {
    Self {
      journal: Journal::default(),
      funding: Settle::Ok("0xFUND"),
      spend: Settle::Ok("0xSPEND"),
      predicate_balance: 300_000,
      refuse_connect: None,
    }
  }
}

impl MockChain {
  pub fn with_funding(mut self, settle: Settle) -> Self {
    self.funding = settle;
    self
  }

  pub fn with_spend(mut self, settle: Settle) -> Self {
    self.spend = settle;
    self
  }

  pub fn with_predicate_balance(mut self, balance: u64) -> Self {
    self.predicate_balance = balance;
    self
  }

  /// Every `connect` fails with `reason`.
  pub fn refusing_connections(mut self, reason: &'static str) -> Self {
    self.refuse_connect = Some(reason);
    self
  }

  pub fn calls(&self) -> Vec<Call> {
    self.journal.lock().unwrap().clone()
  }

  /// Transfers in the order they were submitted.
  pub fn transfers(&self) -> Vec<Call> {
    self
      .calls()
      .into_iter()
      .filter(|call| matches!(call, Call::Transfer { .. }))
      .collect()
  }

  fn record(&self, call: Call) {
    self.journal.lock().unwrap().push(call);
  }
}

#[async_trait]
impl Chain for MockChain {
  type Predicate = MockPredicate;
  type Provider = MockProvider;
  type Wallet = MockWallet;

  async fn connect(&self, url: &str) -> Result<Self::Provider, Error> {
    self.record(Call::Connect(url.to_owned()));
    if let Some(reason) = self.refuse_connect {
      return Err(Error::Connection {
        url: url.to_owned(),
        reason: reason.to_owned(),
      });
    }
    Ok(MockProvider {
      chain: self.clone(),
    })
  }

  fn wallet(
    &self,
    key: &PrivateKey,
    _: &Self::Provider,
  ) -> Result<Self::Wallet, Error> {
    self.record(Call::Wallet(key.clone()));
    Ok(MockWallet {
      chain: self.clone(),
    })
  }

  fn predicate(
    &self,
    bytecode: &Bytecode,
    _: &Abi,
    _: &Self::Provider,
  ) -> Result<Self::Predicate, Error> {
    self.record(Call::Predicate(bytecode.as_bytes().to_vec()));
    Ok(MockPredicate {
      chain: self.clone(),
    })
  }
}

pub struct MockProvider {
  chain: MockChain,
}

#[async_trait]
impl Provider for MockProvider {
  fn base_asset_id(&self) -> AssetId {
    AssetId::BASE
  }

  async fn fee_config(&self) -> Result<FeeConfig, Error> {
    self.chain.record(Call::FeeConfig);
    Ok(FeeConfig {
      min_gas_price: MIN_GAS_PRICE,
    })
  }
}

pub struct MockPending {
  id: TxId,
  settle: Settle,
  chain: MockChain,
}

#[async_trait]
impl PendingTransaction for MockPending {
  async fn wait_for_result(self) -> Result<TransactionResult, Error> {
    self.chain.record(Call::Wait(self.id.clone()));
    self.settle.into_result(&self.id)
  }
}

fn submit(
  chain: &MockChain,
  from: Address,
  to: &Address,
  amount: u64,
  asset_id: AssetId,
  options: TxOptions,
  settle: Settle,
) -> MockPending {
  chain.record(Call::Transfer {
    from,
    to: *to,
    amount,
    asset_id,
    gas_price: options.gas_price,
  });
  MockPending {
    id: TxId::new(format!("pending-{}", chain.transfers().len())),
    settle,
    chain: chain.clone(),
  }
}

pub struct MockWallet {
  chain: MockChain,
}

#[async_trait]
impl Account for MockWallet {
  type Pending = MockPending;

  fn address(&self) -> &Address {
    &WALLET
  }

  async fn balance(&self, _: &AssetId) -> Result<u64, Error> {
    self.chain.record(Call::Balance(WALLET));
    Ok(10_000_000)
  }

  async fn transfer(
    &self,
    to: &Address,
    amount: u64,
    asset_id: AssetId,
    options: TxOptions,
  ) -> Result<Self::Pending, Error> {
    let settle = self.chain.funding.clone();
    Ok(submit(
      &self.chain,
      WALLET,
      to,
      amount,
      asset_id,
      options,
      settle,
    ))
  }
}

pub struct MockPredicate {
  chain: MockChain,
}

#[async_trait]
impl Account for MockPredicate {
  type Pending = MockPending;

  fn address(&self) -> &Address {
    &PREDICATE
  }

  async fn balance(&self, _: &AssetId) -> Result<u64, Error> {
    self.chain.record(Call::Balance(PREDICATE));
    Ok(self.chain.predicate_balance)
  }

  async fn transfer(
    &self,
    to: &Address,
    amount: u64,
    asset_id: AssetId,
    options: TxOptions,
  ) -> Result<Self::Pending, Error> {
    let settle = self.chain.spend.clone();
    Ok(submit(
      &self.chain,
      PREDICATE,
      to,
      amount,
      asset_id,
      options,
      settle,
    ))
  }
}

impl PredicateAccount for MockPredicate {
  fn set_data(&mut self, args: Vec<Token>) -> Result<(), Error> {
    self.chain.record(Call::SetData(args));
    Ok(())
  }
}

/// Collects formatted log output of whatever runs under
/// [`LogCapture::dispatch`].
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
  pub fn dispatch(&self) -> Dispatch {
    let sink = self.clone();
    Dispatch::new(
      tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || sink.clone())
        .finish(),
    )
  }

  pub fn lines(&self) -> Vec<String> {
    String::from_utf8_lossy(&self.0.lock().unwrap())
      .lines()
      .map(str::to_owned)
      .collect()
  }
}

impl io::Write for LogCapture {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}
