use {
  crate::Rejection,
  dashmap::DashMap,
  predicate_primitives::{Address, AssetId},
};

/// Coin balances of every account on the devnode, keyed by owner
/// and asset.
#[derive(Debug, Default)]
pub struct Ledger {
  balances: DashMap<(Address, AssetId), u64>,
}

impl Ledger {
  pub fn balance(&self, owner: &Address, asset_id: &AssetId) -> u64 {
    self
      .balances
      .get(&(*owner, *asset_id))
      .map(|b| *b)
      .unwrap_or_default()
  }

  /// Adds `amount` to a balance, saturating at `u64::MAX`. Only used
  /// for genesis allocations, transfers check for overflow up front.
  pub fn credit(&self, owner: Address, asset_id: AssetId, amount: u64) {
    let mut balance = self.balances.entry((owner, asset_id)).or_default();
    *balance = balance.saturating_add(amount);
  }

  /// Moves `amount` of `asset_id` from `from` to `to` and burns `fee`
  /// units of the base asset from `from`.
  ///
  /// Either everything is applied or nothing is.
  pub fn transfer(
    &self,
    from: Address,
    to: Address,
    asset_id: AssetId,
    amount: u64,
    fee: u64,
  ) -> Result<(), Rejection> {
    let base = AssetId::BASE;
    let (needed_asset, needed_base) = if asset_id == base {
      (amount.checked_add(fee).ok_or(Rejection::InsufficientFunds)?, 0)
    } else {
      (amount, fee)
    };

    if self.balance(&from, &asset_id) < needed_asset
      || self.balance(&from, &base) < needed_base
    {
      return Err(Rejection::InsufficientFunds);
    }

    if from != to
      && self.balance(&to, &asset_id).checked_add(amount).is_none()
    {
      return Err(Rejection::BalanceOverflow);
    }

    if let Some(mut balance) = self.balances.get_mut(&(from, asset_id)) {
      *balance -= needed_asset;
    }
    if needed_base != 0 {
      if let Some(mut balance) = self.balances.get_mut(&(from, base)) {
        *balance -= needed_base;
      }
    }
    self.credit(to, asset_id, amount);
    Ok(())
  }
}
