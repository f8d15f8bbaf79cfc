//! Capture-chain coordination
//!
//! A capture chain is generated as a whole but played one jump at a time. The
//! [`ChainState`] bridges the two views for the side to move:
//!
//! 1. At the start of a turn the generation result is stored as-is.
//! 2. While captures are pending, the selectable steps are the next step of
//!    every stored chain whose prefix equals the jumps already played.
//! 3. Once a surviving chain is fully played the chain is exhausted and the
//!    turn passes; the state is reset to fresh.
//!
//! Filtering is always re-derived from the stored generation and the played
//! prefix, never by narrowing in place, so restoring an older `ChainState`
//! snapshot is all undo needs to do.

use crate::move_gen::MoveSet;
use crate::types::Move;
use std::sync::Arc;
use tracing::trace;

/// Per-turn move bookkeeping for the side to move
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainState {
    /// Generation for the current turn, `None` until first requested
    moves: Option<Arc<MoveSet>>,
    /// Jumps of the current chain played so far
    played: Vec<Move>,
}

impl ChainState {
    /// True when no generation has been stored for this turn yet
    pub fn is_fresh(&self) -> bool {
        self.moves.is_none()
    }

    /// Capture-chain mode: captures are on offer or a chain is in progress
    pub fn is_capturing(&self) -> bool {
        !self.played.is_empty() || self.moves.as_deref().is_some_and(MoveSet::is_capture)
    }

    /// Steps of the current chain already played
    pub fn capture_index(&self) -> usize {
        self.played.len()
    }

    pub fn played(&self) -> &[Move] {
        &self.played
    }

    pub fn generation(&self) -> Option<&MoveSet> {
        self.moves.as_deref()
    }

    /// Store a fresh generation for the turn
    pub fn begin(&mut self, moves: MoveSet) {
        self.moves = Some(Arc::new(moves));
        self.played.clear();
    }

    /// Chains still consistent with the jumps played
    pub fn surviving(&self) -> impl Iterator<Item = &[Move]> + '_ {
        let chains: &[Vec<Move>] = match self.moves.as_deref() {
            Some(MoveSet::Chains(chains)) => chains,
            _ => &[],
        };
        chains
            .iter()
            .filter(move |chain| chain.starts_with(&self.played))
            .map(Vec::as_slice)
    }

    /// Currently selectable single steps
    pub fn selectable(&self) -> Vec<Move> {
        let Some(moves) = self.moves.as_deref() else {
            return Vec::new();
        };
        if self.played.is_empty() {
            return moves.first_steps();
        }

        let index = self.played.len();
        let mut next: Vec<Move> = Vec::new();
        for mv in self.surviving().filter_map(|chain| chain.get(index)) {
            if !next.contains(mv) {
                next.push(*mv);
            }
        }
        next
    }

    /// Remaining plies: whole alternatives at turn start, otherwise the
    /// unplayed suffix of every surviving chain
    pub fn remaining_lines(&self) -> Vec<Vec<Move>> {
        let Some(moves) = self.moves.as_deref() else {
            return Vec::new();
        };
        if self.played.is_empty() {
            return moves.lines();
        }

        let index = self.played.len();
        self.surviving()
            .filter(|chain| chain.len() > index)
            .map(|chain| chain[index..].to_vec())
            .collect()
    }

    /// Record a jump that was just played and report whether the chain is
    /// exhausted.
    ///
    /// Every jump must extend a stored chain; only validated steps reach
    /// here. Debug builds panic on a jump no chain accounts for, release
    /// builds end the chain so the turn can never get stuck.
    pub fn advance(&mut self, mv: Move) -> bool {
        self.played.push(mv);
        let played = self.played.len();

        let mut any = false;
        let mut exhausted = false;
        for chain in self.surviving() {
            any = true;
            if chain.len() == played {
                exhausted = true;
            }
        }
        debug_assert!(any, "jump {} diverges from every generated chain", mv);

        trace!(
            capture_index = played,
            surviving = self.surviving().count(),
            exhausted = exhausted || !any,
            "chain advanced"
        );
        exhausted || !any
    }
}
