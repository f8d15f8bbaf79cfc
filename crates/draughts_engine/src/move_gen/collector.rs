//! Longest-chain accumulator
//!
//! Completed chains are offered one at a time while the capture walk runs.
//! The collector enforces the majority-capture rule incrementally:
//!
//! - longer than the best so far: drop everything kept, keep this one
//! - equal length: keep alongside the others
//! - shorter: drop
//!
//! One collector is created per generation call and consumed by it, so no
//! chain can leak from one call into the next.

use crate::types::Move;

#[derive(Debug, Default)]
pub struct ChainCollector {
    best_len: usize,
    chains: Vec<Vec<Move>>,
}

impl ChainCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer(&mut self, chain: &[Move]) {
        if chain.is_empty() || chain.len() < self.best_len {
            return;
        }
        if chain.len() > self.best_len {
            self.best_len = chain.len();
            self.chains.clear();
        }
        self.chains.push(chain.to_vec());
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn best_len(&self) -> usize {
        self.best_len
    }

    pub fn into_chains(self) -> Vec<Vec<Move>> {
        self.chains
    }
}
