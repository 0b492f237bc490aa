use {
  crate::{artifacts::PredicateArtifacts, config::Config, error::Error},
  predicate_client_sdk::{
    Account,
    Chain,
    PendingTransaction,
    PredicateAccount,
    Provider,
    TxOptions,
  },
  predicate_primitives::{
    format_units,
    Address,
    AssetId,
    TxId,
    BASE_ASSET_DECIMALS,
  },
  tracing::{debug, error, info},
};

/// What the funding step observed once its transfer was final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Funding {
  pub tx_id: TxId,
  pub wallet: Address,
  pub predicate: Address,

  /// Predicate balance as reported by the network after the transfer.
  pub predicate_balance: u64,

  /// Fee rate used for funding, reused when spending.
  pub gas_price: u64,
}

/// Result of trying to spend from the predicate back to the wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeOutcome {
  Spent { tx_id: TxId },
  Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
  pub funding: Funding,
  pub invocation: InvokeOutcome,
}

/// Drives one fund and spend cycle against a chain.
///
/// Every step runs once in a fixed order. Errors before the spend
/// attempt are returned to the caller, a failed spend is reported in
/// [`InvokeOutcome::Failed`] instead. Nothing is retried and if the
/// spend fails the predicate stays funded.
pub struct Orchestrator<'a, C: Chain> {
  chain: &'a C,
  config: &'a Config,
}

impl<'a, C: Chain> Orchestrator<'a, C> {
  pub fn new(chain: &'a C, config: &'a Config) -> Self {
    Self { chain, config }
  }

  pub async fn run(&self, provider_url: &str) -> Result<Report, Error> {
    let artifacts = PredicateArtifacts::load(&self.config.artifacts).await?;
    debug!("predicate bytecode: {}", artifacts.bytecode.to_hex());

    let provider = self.chain.connect(provider_url).await?;
    let wallet = self.chain.wallet(&self.config.private_key, &provider)?;
    let mut predicate = self.chain.predicate(
      &artifacts.bytecode,
      &artifacts.abi,
      &provider,
    )?;

    let base_asset = provider.base_asset_id();
    let funding = self.fund(&provider, &wallet, &predicate, base_asset).await?;
    report_funding(&funding);

    let invocation = self
      .invoke(&wallet, &mut predicate, base_asset, funding.gas_price)
      .await?;
    report_invocation(&invocation);

    Ok(Report {
      funding,
      invocation,
    })
  }

  /// Moves the funding amount from the wallet to the predicate at the
  /// network's minimum fee rate and waits until it is final.
  pub async fn fund(
    &self,
    provider: &C::Provider,
    wallet: &C::Wallet,
    predicate: &C::Predicate,
    base_asset: AssetId,
  ) -> Result<Funding, Error> {
    let fees = provider.fee_config().await?;
    let options = TxOptions::default().with_gas_price(fees.min_gas_price);

    info!("💰 Funding predicate...");
    let result = wallet
      .transfer(
        predicate.address(),
        self.config.amounts.funding(),
        base_asset,
        options,
      )
      .await?
      .wait_for_result()
      .await?;

    let predicate_balance = predicate.balance(&base_asset).await?;

    Ok(Funding {
      tx_id: result.id,
      wallet: *wallet.address(),
      predicate: *predicate.address(),
      predicate_balance,
      gas_price: fees.min_gas_price,
    })
  }

  /// Hands the wallet address to the predicate as its data and spends
  /// from it back to the wallet.
  ///
  /// Only the transfer and the wait are guarded. Failing to encode the
  /// predicate data is an error of the run itself.
  pub async fn invoke(
    &self,
    wallet: &C::Wallet,
    predicate: &mut C::Predicate,
    base_asset: AssetId,
    gas_price: u64,
  ) -> Result<InvokeOutcome, Error> {
    info!("⌛️ Running predicate...");
    predicate.set_data(vec![(*wallet.address()).into()])?;

    let options = TxOptions::default().with_gas_price(gas_price);
    let spend = async {
      predicate
        .transfer(
          wallet.address(),
          self.config.amounts.spend(),
          base_asset,
          options,
        )
        .await?
        .wait_for_result()
        .await
    };

    Ok(match spend.await {
      Ok(result) => InvokeOutcome::Spent { tx_id: result.id },
      Err(error) => InvokeOutcome::Failed {
        message: error.reason(),
      },
    })
  }
}

fn report_funding(funding: &Funding) {
  info!("→ Transaction Id: {}", funding.tx_id);
  info!(
    "→ Predicate balance: {}",
    format_units(funding.predicate_balance, BASE_ASSET_DECIMALS)
  );
  info!("→ Predicate Id: {}", funding.predicate);
  info!("📝 Wallet address: {}", funding.wallet);
}

fn report_invocation(outcome: &InvokeOutcome) {
  match outcome {
    InvokeOutcome::Spent { tx_id } => info!("→ Transaction Id: {tx_id}"),
    InvokeOutcome::Failed { message } => error!("Error: {message}"),
  }
}
