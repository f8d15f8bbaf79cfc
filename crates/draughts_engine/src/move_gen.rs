//! Move generation under the majority-capture rule
//!
//! Produces the legal move set for the side to move. The result is one of two
//! mutually exclusive shapes:
//!
//! - [`MoveSet::Steps`]: quiet single steps, when no capture exists anywhere
//! - [`MoveSet::Chains`]: the longest capture chains, when any capture exists
//!
//! ## Capture Search
//!
//! Chains are discovered by a depth-first walk from every piece of the side to
//! move. Each jump is simulated on the grid in place (the jumper moves, the
//! jumped piece is removed), the walk continues from the landing square, and
//! the jump is reverted before the next sibling is tried. A branch that finds
//! no further jump is a complete chain and is offered to a [`ChainCollector`],
//! which keeps only the chains of maximum length.
//!
//! A man that lands on its farthest row in the middle of a chain keeps
//! capturing as a man. Crowning happens only when the turn ends.
//!
//! Because every simulated jump is reverted, the grid is identical before and
//! after a call to [`generate_moves`].
//!
//! ## Module Organization
//!
//! - `man` - Forward steps and short jumps
//! - `king` - Flying slides and long-range jumps
//! - `collector` - Longest-chain accumulator

mod collector;
mod king;
mod man;

pub use collector::ChainCollector;

use crate::board::*;
use crate::types::*;

/// Legal moves for one side, in generation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveSet {
    /// Quiet single steps (no capture available)
    Steps(Vec<Move>),
    /// Maximal capture chains, all of the same length
    Chains(Vec<Vec<Move>>),
}

impl MoveSet {
    pub fn is_capture(&self) -> bool {
        matches!(self, MoveSet::Chains(_))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            MoveSet::Steps(steps) => steps.is_empty(),
            MoveSet::Chains(chains) => chains.is_empty(),
        }
    }

    /// Number of alternatives (steps or chains)
    pub fn len(&self) -> usize {
        match self {
            MoveSet::Steps(steps) => steps.len(),
            MoveSet::Chains(chains) => chains.len(),
        }
    }

    /// Length of the chains on offer, 0 for quiet steps
    pub fn chain_len(&self) -> usize {
        match self {
            MoveSet::Steps(_) => 0,
            MoveSet::Chains(chains) => chains.first().map_or(0, Vec::len),
        }
    }

    /// First step of every alternative, duplicates removed, order kept
    pub fn first_steps(&self) -> Vec<Move> {
        match self {
            MoveSet::Steps(steps) => steps.clone(),
            MoveSet::Chains(chains) => {
                let mut firsts: Vec<Move> = Vec::new();
                for mv in chains.iter().filter_map(|c| c.first()) {
                    if !firsts.contains(mv) {
                        firsts.push(*mv);
                    }
                }
                firsts
            }
        }
    }

    /// Every alternative as a full ply: a one-step line or a whole chain
    pub fn lines(&self) -> Vec<Vec<Move>> {
        match self {
            MoveSet::Steps(steps) => steps.iter().map(|mv| vec![*mv]).collect(),
            MoveSet::Chains(chains) => chains.clone(),
        }
    }
}

/// Generate the legal move set for `color`.
///
/// Takes the grid mutably to simulate jumps; the grid is restored before
/// returning.
pub fn generate_moves(board: &mut Board, color: Color) -> MoveSet {
    let mut collector = ChainCollector::new();
    let mut path = Vec::new();

    for sq in playable_squares() {
        if let Some(piece) = piece_at(board, sq) {
            if piece.color == color {
                extend_chain(board, sq, piece, &mut path, &mut collector);
            }
        }
    }

    if !collector.is_empty() {
        return MoveSet::Chains(collector.into_chains());
    }

    let mut steps = Vec::new();
    for sq in playable_squares() {
        if let Some(piece) = piece_at(board, sq) {
            if piece.color == color {
                match piece.rank {
                    Rank::Man => man::generate_steps(board, sq, piece, &mut steps),
                    Rank::King => king::generate_steps(board, sq, piece, &mut steps),
                }
            }
        }
    }
    MoveSet::Steps(steps)
}

/// True when `color` has at least one legal move
pub fn has_any_move(board: &mut Board, color: Color) -> bool {
    !generate_moves(board, color).is_empty()
}

/// Single jumps available to `piece` standing on `from`
pub fn capture_steps(board: &Board, from: Square, piece: Piece) -> Vec<Move> {
    let mut jumps = Vec::new();
    match piece.rank {
        Rank::Man => man::generate_captures(board, from, piece, &mut jumps),
        Rank::King => king::generate_captures(board, from, piece, &mut jumps),
    }
    jumps
}

/// Depth-first chain walk from `from`. `path` holds the jumps made so far.
fn extend_chain(
    board: &mut Board,
    from: Square,
    piece: Piece,
    path: &mut Vec<Move>,
    out: &mut ChainCollector,
) {
    let jumps = capture_steps(board, from, piece);

    if jumps.is_empty() {
        if !path.is_empty() {
            out.offer(path);
        }
        return;
    }

    for mv in jumps {
        apply_step(board, &mv);
        path.push(mv);
        extend_chain(board, mv.to, piece, path, out);
        path.pop();
        revert_step(board, &mv);
    }
}
