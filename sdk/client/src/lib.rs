mod chain;
mod error;

#[cfg(feature = "fuel")]
pub mod fuel;

pub use {
  chain::{
    Account,
    Chain,
    FeeConfig,
    PendingTransaction,
    PredicateAccount,
    Provider,
    TransactionResult,
    TxOptions,
  },
  error::{Error, ErrorResponse, NetworkError},
  predicate_primitives as primitives,
};
