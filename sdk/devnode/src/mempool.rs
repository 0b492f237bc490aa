use crate::block::{Block, Transfer};

#[derive(Default)]
pub struct Mempool {
  txs: Vec<Transfer>,
}

impl Mempool {
  pub fn consume(&mut self, tx: Transfer) {
    self.txs.push(tx);
  }

  pub fn len(&self) -> usize {
    self.txs.len()
  }

  /// Drains everything accepted so far into a block on top of
  /// `parent_height`, in submission order.
  pub fn produce(&mut self, parent_height: u64) -> Block {
    Block {
      height: parent_height + 1,
      transfers: std::mem::take(&mut self.txs),
    }
  }
}
