//! # Game State
//!
//! ## Overview
//!
//! [`Game`] owns everything that changes during play: the grid, the side to
//! move, the capture-chain state and the move log. All mutation goes through
//! [`Game::make_move`] (validated) or the crate-internal
//! [`Game::apply_unchecked`] used by the search, and every mutation is
//! reversed exactly by [`Game::undo_step`].
//!
//! ## Turn Structure
//!
//! A ply is either one quiet step or one complete capture chain. The chain is
//! played one jump at a time:
//!
//! ```text
//! make(jump 1) -> ChainContinues   (same side still to move)
//! make(jump 2) -> ChainContinues
//! make(jump 3) -> TurnComplete     (man crowned if on its far row, turn flips)
//! ```
//!
//! ## Undo
//!
//! Each log entry keeps a snapshot of the [`ChainState`] as it was before the
//! step. Undo reverts the grid step, flips the turn back if the step ended a
//! turn, and reinstates the snapshot, which carries the generation the step
//! was chosen from. Nothing has to be recomputed.

use crate::board::*;
use crate::coordinator::ChainState;
use crate::error::{EngineError, EngineResult};
use crate::move_gen::generate_moves;
use crate::types::*;
use tracing::trace;

/// Outcome of playing one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// A capture chain is under way; the same side moves again
    ChainContinues,
    /// The ply is over and the other side is to move
    TurnComplete,
}

/// One played step as kept in the move log
#[derive(Debug, Clone)]
pub struct LoggedStep {
    pub mv: Move,
    /// This step ended the ply
    pub ended_turn: bool,
    /// The moving man was crowned when the ply ended
    pub promoted: bool,
    prior: ChainState,
}

/// A draughts game in progress
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    white_to_move: bool,
    chain: ChainState,
    log: Vec<LoggedStep>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Standard starting position, White to move
    pub fn new() -> Self {
        Game {
            board: init_board(),
            white_to_move: true,
            chain: ChainState::default(),
            log: Vec::new(),
        }
    }

    /// Empty grid for building positions by hand
    pub fn empty(white_to_move: bool) -> Self {
        Game {
            board: empty_board(),
            white_to_move,
            chain: ChainState::default(),
            log: Vec::new(),
        }
    }

    /// Put `cell` on a playable square.
    ///
    /// Editing the grid invalidates the move log and any chain in progress,
    /// both are cleared.
    pub fn set_piece(&mut self, square: Square, cell: Cell) -> EngineResult<()> {
        if !square.is_on_board() {
            return Err(EngineError::OffBoard { row: square.row, col: square.col });
        }
        if !square.is_playable() {
            return Err(EngineError::NotPlayable { row: square.row, col: square.col });
        }
        set_cell(&mut self.board, square, cell);
        self.chain = ChainState::default();
        self.log.clear();
        Ok(())
    }

    pub fn set_white_to_move(&mut self, white_to_move: bool) {
        self.white_to_move = white_to_move;
        self.chain = ChainState::default();
        self.log.clear();
    }

    /// Back to the starting position with an empty log
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, square: Square) -> Cell {
        if square.is_on_board() {
            piece_at(&self.board, square)
        } else {
            None
        }
    }

    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Captures are on offer or a chain is under way.
    ///
    /// Takes `&mut self` because the ply's moves are generated lazily on
    /// first query and cached in the chain state.
    pub fn is_capturing(&mut self) -> bool {
        self.ensure_generated();
        self.chain.is_capturing()
    }

    /// Jumps of the current chain already played
    pub fn capture_index(&self) -> usize {
        self.chain.capture_index()
    }

    pub fn move_log(&self) -> &[LoggedStep] {
        &self.log
    }

    pub fn piece_count(&self, color: Color) -> usize {
        count_pieces(&self.board, color)
    }

    /// Legal single steps for the side to move, respecting the chain in
    /// progress
    pub fn valid_moves(&mut self) -> Vec<Move> {
        self.ensure_generated();
        self.chain.selectable()
    }

    /// Legal single steps starting on `square`
    pub fn valid_moves_for_square(&mut self, square: Square) -> Vec<Move> {
        self.valid_moves()
            .into_iter()
            .filter(|mv| mv.from == square)
            .collect()
    }

    /// The legal step going from `from` to `to`, if any
    pub fn find_move(&mut self, from: Square, to: Square) -> Option<Move> {
        self.valid_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to)
    }

    /// Every way to finish the current ply: whole plies at turn start, the
    /// unplayed remainder of each surviving chain mid-chain
    pub fn legal_lines(&mut self) -> Vec<Vec<Move>> {
        self.ensure_generated();
        self.chain.remaining_lines()
    }

    pub fn has_legal_move(&mut self) -> bool {
        !self.valid_moves().is_empty()
    }

    /// Play one step.
    ///
    /// The step must be one of [`Game::valid_moves`]; anything else is
    /// rejected with [`EngineError::IllegalMove`] and the game is untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use draughts_engine::game::{Game, Progress};
    /// use draughts_engine::types::Square;
    ///
    /// let mut game = Game::new();
    /// let step = game.find_move(Square::new(6, 1), Square::new(5, 0)).unwrap();
    /// assert_eq!(game.make_move(&step), Ok(Progress::TurnComplete));
    /// assert!(!game.white_to_move());
    /// ```
    pub fn make_move(&mut self, mv: &Move) -> EngineResult<Progress> {
        let canonical = self
            .valid_moves()
            .into_iter()
            .find(|legal| legal == mv)
            .ok_or_else(|| EngineError::IllegalMove {
                from: mv.from.to_string(),
                to: mv.to.to_string(),
            })?;
        Ok(self.apply_unchecked(canonical))
    }

    /// Play a step known to be legal. Used by the search, which only ever
    /// feeds back steps taken from [`Game::legal_lines`].
    pub(crate) fn apply_unchecked(&mut self, mv: Move) -> Progress {
        self.ensure_generated();
        let prior = self.chain.clone();

        apply_step(&mut self.board, &mv);
        let ended_turn = if mv.is_capture() { self.chain.advance(mv) } else { true };
        let promoted = ended_turn && self.finish_turn(mv.to);

        trace!(
            step = %mv,
            ended_turn,
            promoted,
            "step made"
        );
        self.log.push(LoggedStep { mv, ended_turn, promoted, prior });

        if ended_turn {
            Progress::TurnComplete
        } else {
            Progress::ChainContinues
        }
    }

    /// Reverse the most recent step exactly. `None` on an empty log.
    pub fn undo_step(&mut self) -> Option<Move> {
        let entry = self.log.pop()?;
        revert_step(&mut self.board, &entry.mv);
        if entry.ended_turn {
            self.white_to_move = !self.white_to_move;
        }
        self.chain = entry.prior;
        trace!(step = %entry.mv, "step undone");
        Some(entry.mv)
    }

    /// Undo a whole ply.
    ///
    /// Mid-chain, the jumps played so far are taken back and the side keeps
    /// the move. Otherwise the previous complete ply (one step or a whole
    /// chain) is taken back. Returns the undone steps, most recent first;
    /// empty when there was nothing to undo.
    pub fn undo_move(&mut self) -> Vec<Move> {
        let mut undone = Vec::new();
        if self.chain.capture_index() == 0 {
            match self.undo_step() {
                Some(mv) => undone.push(mv),
                None => return undone,
            }
        }
        while self.chain.capture_index() > 0 {
            match self.undo_step() {
                Some(mv) => undone.push(mv),
                None => break,
            }
        }
        undone
    }

    fn ensure_generated(&mut self) {
        if self.chain.is_fresh() {
            let side = self.side_to_move();
            let moves = generate_moves(&mut self.board, side);
            self.chain.begin(moves);
        }
    }

    /// Crown the piece on `landing` if it is a man on its far row, then
    /// hand the move to the other side
    fn finish_turn(&mut self, landing: Square) -> bool {
        let promoted = match piece_at(&self.board, landing) {
            Some(piece) if !piece.is_king() && landing.row == piece.color.promotion_row() => {
                set_cell(&mut self.board, landing, Some(piece.crowned()));
                true
            }
            _ => false,
        };
        self.white_to_move = !self.white_to_move;
        self.chain = ChainState::default();
        promoted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    fn put(game: &mut Game, row: i8, col: i8, piece: Piece) {
        game.set_piece(sq(row, col), Some(piece)).expect("playable square");
    }

    // ========================================================================
    // Setup
    // ========================================================================

    #[test]
    fn test_new_game_white_to_move() {
        let mut game = Game::new();
        assert!(game.white_to_move());
        assert_eq!(game.capture_index(), 0);
        assert!(!game.is_capturing());
        assert_eq!(game.valid_moves().len(), 9);
    }

    #[test]
    fn test_capture_query_generates_lazily_after_setup() {
        //! `set_piece` clears the cached moves; the first query regenerates
        //! them for the new position without touching the board

        let mut game = Game::new();
        assert!(!game.is_capturing());

        put(&mut game, 5, 2, Piece::man(Color::Black));
        let before = *game.board();
        assert!(game.is_capturing());
        assert_eq!(*game.board(), before);
        assert!(game.valid_moves().iter().all(|mv| mv.is_capture()));
    }

    #[test]
    fn test_set_piece_rejects_light_and_off_board_squares() {
        let mut game = Game::empty(true);
        assert_eq!(
            game.set_piece(sq(0, 0), Some(Piece::man(Color::White))),
            Err(EngineError::NotPlayable { row: 0, col: 0 })
        );
        assert_eq!(
            game.set_piece(sq(10, 1), None),
            Err(EngineError::OffBoard { row: 10, col: 1 })
        );
    }

    // ========================================================================
    // Turn flow
    // ========================================================================

    #[test]
    fn test_quiet_step_flips_turn() {
        let mut game = Game::new();
        let step = game.find_move(sq(6, 1), sq(5, 0)).expect("legal opening step");
        assert_eq!(game.make_move(&step), Ok(Progress::TurnComplete));
        assert!(!game.white_to_move());
        assert_eq!(game.cell(sq(5, 0)), Some(Piece::man(Color::White)));
        assert_eq!(game.cell(sq(6, 1)), None);
    }

    #[test]
    fn test_illegal_move_leaves_game_untouched() {
        let mut game = Game::new();
        let before = *game.board();
        let backward = Move::new(sq(6, 1), sq(7, 0), Piece::man(Color::White), None);

        let result = game.make_move(&backward);
        assert!(matches!(result, Err(EngineError::IllegalMove { .. })));
        assert_eq!(*game.board(), before);
        assert!(game.white_to_move());
        assert!(game.move_log().is_empty());
    }

    #[test]
    fn test_chain_holds_turn_until_exhausted() {
        let mut game = Game::empty(true);
        put(&mut game, 6, 7, Piece::man(Color::White));
        put(&mut game, 5, 8, Piece::man(Color::Black));
        put(&mut game, 3, 8, Piece::man(Color::Black));
        put(&mut game, 0, 1, Piece::man(Color::Black));

        assert!(game.is_capturing());
        let first = game.find_move(sq(6, 7), sq(4, 9)).expect("first jump");
        assert_eq!(game.make_move(&first), Ok(Progress::ChainContinues));
        assert!(game.white_to_move());
        assert_eq!(game.capture_index(), 1);
        assert_eq!(game.valid_moves().len(), 1);

        let second = game.find_move(sq(4, 9), sq(2, 7)).expect("second jump");
        assert_eq!(game.make_move(&second), Ok(Progress::TurnComplete));
        assert!(!game.white_to_move());
        assert_eq!(game.capture_index(), 0);
        assert_eq!(game.piece_count(Color::Black), 1);
    }

    #[test]
    fn test_quiet_step_rejected_while_capture_pending() {
        let mut game = Game::empty(true);
        put(&mut game, 6, 3, Piece::man(Color::White));
        put(&mut game, 6, 9, Piece::man(Color::White));
        put(&mut game, 5, 4, Piece::man(Color::Black));

        let quiet = Move::new(sq(6, 9), sq(5, 8), Piece::man(Color::White), None);
        assert!(game.make_move(&quiet).is_err());
        assert!(game.valid_moves().iter().all(Move::is_capture));
    }

    // ========================================================================
    // Promotion
    // ========================================================================

    #[test]
    fn test_promotion_on_quiet_step() {
        let mut game = Game::empty(true);
        put(&mut game, 1, 2, Piece::man(Color::White));
        put(&mut game, 9, 0, Piece::man(Color::Black));

        let step = game.find_move(sq(1, 2), sq(0, 1)).expect("step to far row");
        game.make_move(&step).expect("legal");
        assert_eq!(game.cell(sq(0, 1)), Some(Piece::king(Color::White)));
        assert!(game.move_log()[0].promoted);
    }

    #[test]
    fn test_promotion_deferred_to_end_of_chain() {
        //! The man crosses row 0 on the first jump, keeps capturing as a
        //! man and is not crowned because the chain ends on row 2

        let mut game = Game::empty(true);
        put(&mut game, 2, 5, Piece::man(Color::White));
        put(&mut game, 1, 4, Piece::man(Color::Black));
        put(&mut game, 1, 2, Piece::man(Color::Black));
        put(&mut game, 9, 0, Piece::man(Color::Black));

        let first = game.find_move(sq(2, 5), sq(0, 3)).expect("first jump");
        assert_eq!(game.make_move(&first), Ok(Progress::ChainContinues));
        assert_eq!(game.cell(sq(0, 3)), Some(Piece::man(Color::White)));

        let second = game.find_move(sq(0, 3), sq(2, 1)).expect("second jump");
        assert_eq!(game.make_move(&second), Ok(Progress::TurnComplete));
        assert_eq!(game.cell(sq(2, 1)), Some(Piece::man(Color::White)));
    }

    #[test]
    fn test_promotion_when_chain_ends_on_far_row() {
        let mut game = Game::empty(true);
        put(&mut game, 4, 5, Piece::man(Color::White));
        put(&mut game, 3, 4, Piece::man(Color::Black));
        put(&mut game, 1, 2, Piece::man(Color::Black));
        put(&mut game, 9, 0, Piece::man(Color::Black));

        let first = game.find_move(sq(4, 5), sq(2, 3)).expect("first jump");
        game.make_move(&first).expect("legal");
        let second = game.find_move(sq(2, 3), sq(0, 1)).expect("second jump");
        assert_eq!(game.make_move(&second), Ok(Progress::TurnComplete));
        assert_eq!(game.cell(sq(0, 1)), Some(Piece::king(Color::White)));
    }

    // ========================================================================
    // Undo
    // ========================================================================

    #[test]
    fn test_undo_on_empty_log_is_noop() {
        let mut game = Game::new();
        assert_eq!(game.undo_step(), None);
        assert!(game.undo_move().is_empty());
        assert!(game.white_to_move());
    }

    #[test]
    fn test_undo_step_restores_crowning_and_turn() {
        let mut game = Game::empty(true);
        put(&mut game, 1, 2, Piece::man(Color::White));
        put(&mut game, 9, 0, Piece::man(Color::Black));
        let before = *game.board();

        let step = game.find_move(sq(1, 2), sq(0, 1)).expect("step to far row");
        game.make_move(&step).expect("legal");
        assert_eq!(game.undo_step(), Some(step));

        assert_eq!(*game.board(), before);
        assert!(game.white_to_move());
        assert!(game.valid_moves().contains(&step));
        assert!(game.move_log().is_empty());
    }

    #[test]
    fn test_undo_mid_chain_restores_all_chains() {
        let mut game = Game::empty(true);
        // Two double captures share the first jump and split on the second
        put(&mut game, 6, 3, Piece::man(Color::White));
        put(&mut game, 5, 4, Piece::man(Color::Black));
        put(&mut game, 3, 4, Piece::man(Color::Black));
        put(&mut game, 3, 6, Piece::man(Color::Black));
        let before = *game.board();

        let first = game.find_move(sq(6, 3), sq(4, 5)).expect("first jump");
        game.make_move(&first).expect("legal");
        assert_eq!(game.valid_moves().len(), 2);

        assert_eq!(game.undo_step(), Some(first));
        assert_eq!(*game.board(), before);
        assert_eq!(game.capture_index(), 0);
        assert_eq!(game.legal_lines().len(), 2);
        assert_eq!(game.valid_moves(), vec![first]);
    }

    #[test]
    fn test_undo_move_takes_back_whole_chain() {
        let mut game = Game::empty(true);
        put(&mut game, 6, 7, Piece::man(Color::White));
        put(&mut game, 5, 8, Piece::man(Color::Black));
        put(&mut game, 3, 8, Piece::man(Color::Black));
        put(&mut game, 0, 1, Piece::man(Color::Black));
        let before = *game.board();

        for (from, to) in [(sq(6, 7), sq(4, 9)), (sq(4, 9), sq(2, 7))] {
            let mv = game.find_move(from, to).expect("jump");
            game.make_move(&mv).expect("legal");
        }
        assert!(!game.white_to_move());

        let undone = game.undo_move();
        assert_eq!(undone.len(), 2);
        assert_eq!(undone[0].to, sq(2, 7));
        assert_eq!(*game.board(), before);
        assert!(game.white_to_move());
    }

    #[test]
    fn test_undo_move_mid_chain_keeps_side_to_move() {
        let mut game = Game::empty(true);
        put(&mut game, 6, 7, Piece::man(Color::White));
        put(&mut game, 5, 8, Piece::man(Color::Black));
        put(&mut game, 3, 8, Piece::man(Color::Black));

        let first = game.find_move(sq(6, 7), sq(4, 9)).expect("jump");
        game.make_move(&first).expect("legal");

        assert_eq!(game.undo_move(), vec![first]);
        assert!(game.white_to_move());
        assert_eq!(game.capture_index(), 0);
    }
}
