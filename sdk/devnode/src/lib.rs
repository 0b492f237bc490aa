//! A single node development chain for local runs and tests.
//!
//! There is no consensus and no networking, the node lives inside
//! the process that connects to it. It keeps a coin ledger, accepts
//! transfers from wallets and predicates, and settles them in blocks
//! produced on a fixed interval. Predicate programs are not executed,
//! a predicate spend is accepted when it carries the program that
//! owns the account and the data for it has been set.

mod block;
mod chain;
mod mempool;
mod node;
mod settings;
mod storage;

pub use {
  chain::{
    wallet_address,
    DevPending,
    DevPredicate,
    DevProvider,
    DevWallet,
    Devnet,
    DEVNET_SCHEME,
  },
  node::Rejection,
  settings::DevnodeConfig,
};
