use {
  crate::{
    block::{Authorization, Transfer},
    mempool::Mempool,
    settings::DevnodeConfig,
    storage::Ledger,
  },
  dashmap::DashMap,
  ed25519_dalek::{PublicKey, Verifier},
  predicate_client_sdk::{Error, NetworkError, TransactionResult},
  predicate_primitives::{Address, AssetId, TxId},
  std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
    Weak,
  },
  thiserror::Error,
  tokio::{
    sync::{oneshot, Mutex},
    time::{interval, MissedTickBehavior},
  },
  tracing::{debug, info, warn},
};

/// Reasons a devnode refuses a transfer. They reach clients as the
/// structured error list of a rejected request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
  #[error("gas price {offered} is below the minimum of {minimum}")]
  GasPriceTooLow { offered: u64, minimum: u64 },

  #[error("not enough coins to fit the target")]
  InsufficientFunds,

  #[error("invalid signature")]
  InvalidSignature,

  #[error("predicate data missing")]
  MissingPredicateData,

  #[error("predicate root mismatch")]
  PredicateRootMismatch,

  #[error("balance overflow")]
  BalanceOverflow,
}

impl From<Rejection> for Error {
  fn from(rejection: Rejection) -> Self {
    Error::rejected("transaction rejected by devnode", [NetworkError::new(
      rejection.to_string(),
    )])
  }
}

pub type Outcome = Result<TransactionResult, Rejection>;

/// State of a running devnode shared by all client handles.
///
/// Transfers are accepted into a mempool and applied by a background
/// task that produces a block every `block_time`. Whoever submitted a
/// transfer gets notified through a oneshot channel once the block
/// containing it has been applied.
pub struct Node {
  config: DevnodeConfig,
  ledger: Ledger,
  mempool: Mutex<Mempool>,
  watchlist: DashMap<TxId, oneshot::Sender<Outcome>>,
  height: AtomicU64,
  nonce: AtomicU64,
}

impl Node {
  /// Creates the node from genesis and starts block production.
  ///
  /// Must be called from within a tokio runtime. Block production
  /// stops once the last handle to the node is dropped.
  pub fn start(config: DevnodeConfig) -> Arc<Self> {
    let ledger = Ledger::default();
    for (owner, asset_id, amount) in &config.genesis {
      ledger.credit(*owner, *asset_id, *amount);
    }

    info!(
      "devnode genesis with {} allocations, block time {:?}",
      config.genesis.len(),
      config.block_time
    );

    let node = Arc::new(Self {
      config,
      ledger,
      mempool: Mutex::new(Mempool::default()),
      watchlist: DashMap::new(),
      height: AtomicU64::new(0),
      nonce: AtomicU64::new(0),
    });

    tokio::spawn(Self::runloop(Arc::downgrade(&node)));
    node
  }

  async fn runloop(node: Weak<Node>) {
    let block_time = match node.upgrade() {
      Some(node) => node.config.block_time,
      None => return,
    };

    let mut interval = interval(block_time);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
      interval.tick().await;
      let Some(node) = node.upgrade() else {
        debug!("devnode dropped, stopping block production");
        break;
      };
      node.produce_block().await;
    }
  }

  pub fn min_gas_price(&self) -> u64 {
    self.config.min_gas_price
  }

  pub fn height(&self) -> u64 {
    self.height.load(Ordering::Acquire)
  }

  pub fn next_nonce(&self) -> u64 {
    self.nonce.fetch_add(1, Ordering::AcqRel)
  }

  pub fn balance(&self, owner: &Address, asset_id: &AssetId) -> u64 {
    self.ledger.balance(owner, asset_id)
  }

  /// Accepts a transfer into the mempool.
  ///
  /// Gas price is checked right away, everything else is checked when
  /// the transfer is applied in a block.
  pub async fn submit(
    &self,
    transfer: Transfer,
  ) -> Result<oneshot::Receiver<Outcome>, Rejection> {
    let minimum = self.config.min_gas_price;
    if transfer.body.gas_price < minimum {
      return Err(Rejection::GasPriceTooLow {
        offered: transfer.body.gas_price,
        minimum,
      });
    }

    // register before the transfer becomes visible to block
    // production so the outcome can't be signalled too early.
    let (tx, rx) = oneshot::channel();
    self.watchlist.insert(transfer.id(), tx);

    let mut mempool = self.mempool.lock().await;
    mempool.consume(transfer);
    debug!("mempool size: {}", mempool.len());
    Ok(rx)
  }

  async fn produce_block(&self) {
    let parent = self.height.load(Ordering::Acquire);
    let block = self.mempool.lock().await.produce(parent);

    if block.transfers.is_empty() {
      self.height.store(block.height, Ordering::Release);
      return;
    }

    let count = block.transfers.len();
    for transfer in block.transfers {
      let id = transfer.id();
      let outcome = self.execute(&transfer).map(|fee| TransactionResult {
        id: id.clone(),
        block_height: Some(block.height),
        fee,
      });

      match &outcome {
        Ok(result) => info!(
          "transaction {id} included in block {} (fee {})",
          block.height, result.fee
        ),
        Err(reason) => warn!("transaction {id} rejected: {reason}"),
      }

      if let Some((_, signal)) = self.watchlist.remove(&id) {
        if signal.send(outcome).is_err() {
          debug!("nobody is awaiting transaction {id}");
        }
      }
    }

    self.height.store(block.height, Ordering::Release);
    info!("produced block {} with {count} transfers", block.height);
  }

  /// Checks authorization and applies one transfer to the ledger.
  /// Returns the fee charged.
  fn execute(&self, transfer: &Transfer) -> Result<u64, Rejection> {
    let body = &transfer.body;
    match &transfer.auth {
      Authorization::Signature(signature) => {
        let public = PublicKey::from_bytes(&body.from)
          .map_err(|_| Rejection::InvalidSignature)?;
        public
          .verify(&body.digest(), signature)
          .map_err(|_| Rejection::InvalidSignature)?;
      }
      Authorization::Predicate { code, data } => {
        if code.root() != &body.from {
          return Err(Rejection::PredicateRootMismatch);
        }
        if data.is_none() {
          return Err(Rejection::MissingPredicateData);
        }
      }
    }

    let fee = body.gas_price.saturating_mul(self.config.transfer_gas);
    self
      .ledger
      .transfer(body.from, body.to, body.asset_id, body.amount, fee)?;
    Ok(fee)
  }
}
