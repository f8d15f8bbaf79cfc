//! Search tests

use super::*;
use crate::constants::WIN_SCORE;
use crate::evaluation::evaluate;
use crate::game::Game;
use crate::types::{Piece, Square};

const ALL: [Algorithm; 3] = [Algorithm::Minimax, Algorithm::AlphaBeta, Algorithm::Negamax];

fn sq(row: i8, col: i8) -> Square {
    Square::new(row, col)
}

fn put(game: &mut Game, row: i8, col: i8, piece: Piece) {
    game.set_piece(sq(row, col), Some(piece)).expect("playable square");
}

fn search(game: &mut Game, depth: u32, algorithm: Algorithm) -> SearchResult {
    best_move(game, depth, algorithm)
        .expect("search invariant")
        .expect("side to move has a legal move")
}

// ============================================================================
// Scoring
// ============================================================================

#[test]
fn test_depth_zero_on_initial_board_is_material_balance() {
    //! 20 men each: the static score is exactly 0

    let mut game = Game::new();
    let mut stats = SearchStats::default();
    assert_eq!(minimax(&mut game, 0, &mut stats), Ok(0));
    assert_eq!(stats.nodes, 1);
}

#[test]
fn test_side_without_moves_scores_as_loss() {
    //! White is ahead on material but every white piece is blocked

    let mut game = Game::empty(true);
    put(&mut game, 0, 9, Piece::king(Color::White));
    put(&mut game, 1, 8, Piece::man(Color::White));
    put(&mut game, 0, 7, Piece::man(Color::Black));

    assert!(evaluate(game.board()) > 0);
    assert_eq!(best_move(&mut game, 3, Algorithm::AlphaBeta), Ok(None));

    let mut stats = SearchStats::default();
    assert_eq!(minimax(&mut game, 3, &mut stats), Ok(-WIN_SCORE));
    assert_eq!(alphabeta(&mut game, 3, -255, 255, &mut stats), Ok(-WIN_SCORE));
    assert_eq!(negamax(&mut game, 3, -255, 255, &mut stats), Ok(-WIN_SCORE));
}

#[test]
fn test_capturing_last_piece_wins() {
    let mut game = Game::empty(true);
    put(&mut game, 5, 2, Piece::man(Color::White));
    put(&mut game, 4, 3, Piece::man(Color::Black));

    for algorithm in ALL {
        let result = search(&mut game, 1, algorithm);
        assert_eq!(result.score, WIN_SCORE, "{} should see the win", algorithm);
        assert_eq!(result.line[0].to, sq(3, 4));
    }
}

#[test]
fn test_black_win_scores_negative() {
    let mut game = Game::empty(false);
    put(&mut game, 4, 3, Piece::man(Color::Black));
    put(&mut game, 5, 4, Piece::man(Color::White));

    for algorithm in ALL {
        assert_eq!(search(&mut game, 2, algorithm).score, -WIN_SCORE);
    }
}

// ============================================================================
// Move choice
// ============================================================================

#[test]
fn test_avoids_stepping_into_capture() {
    //! Stepping to (4,3) lets the black man jump it; (4,5) is safe

    let mut game = Game::empty(true);
    put(&mut game, 5, 4, Piece::man(Color::White));
    put(&mut game, 3, 2, Piece::man(Color::Black));

    for algorithm in ALL {
        let result = search(&mut game, 2, algorithm);
        assert_eq!(result.line[0].to, sq(4, 5), "{} stepped into a capture", algorithm);
        assert_eq!(result.score, 0);
    }
}

#[test]
fn test_ties_keep_first_generated_line() {
    //! At depth 1 every opening step keeps material level, so the first
    //! step in generation order is chosen

    let mut game = Game::new();
    let first = game.valid_moves()[0];
    for algorithm in ALL {
        let result = search(&mut game, 1, algorithm);
        assert_eq!(result.line, vec![first]);
        assert_eq!(result.score, 0);
    }
}

#[test]
fn test_mid_chain_root_returns_remaining_jumps() {
    let mut game = Game::empty(true);
    put(&mut game, 6, 3, Piece::man(Color::White));
    put(&mut game, 5, 4, Piece::man(Color::Black));
    put(&mut game, 3, 4, Piece::man(Color::Black));
    put(&mut game, 3, 6, Piece::man(Color::Black));
    put(&mut game, 0, 1, Piece::man(Color::Black));

    let first = game.find_move(sq(6, 3), sq(4, 5)).expect("first jump");
    game.make_move(&first).expect("legal");

    let result = search(&mut game, 2, Algorithm::AlphaBeta);
    assert_eq!(result.line.len(), 1);
    assert_eq!(result.line[0].from, sq(4, 5));
    assert_eq!(game.capture_index(), 1);
}

// ============================================================================
// Agreement between variants
// ============================================================================

#[test]
fn test_variants_agree_on_initial_position() {
    let mut game = Game::new();
    for depth in 2..=3 {
        let reference = search(&mut game, depth, Algorithm::Minimax);
        for algorithm in [Algorithm::AlphaBeta, Algorithm::Negamax] {
            let result = search(&mut game, depth, algorithm);
            assert_eq!(result.score, reference.score, "{} at depth {}", algorithm, depth);
            assert_eq!(result.line, reference.line, "{} at depth {}", algorithm, depth);
        }
    }
}

#[test]
fn test_pruning_visits_fewer_nodes() {
    let mut game = Game::new();
    let plain = search(&mut game, 3, Algorithm::Minimax);
    let pruned = search(&mut game, 3, Algorithm::AlphaBeta);

    assert_eq!(plain.stats.cutoffs, 0);
    assert!(pruned.stats.cutoffs > 0);
    assert!(pruned.stats.nodes < plain.stats.nodes);
}

#[test]
fn test_search_is_deterministic_and_restores_game() {
    let mut game = Game::new();
    let opening = game.find_move(sq(6, 3), sq(5, 4)).expect("legal");
    game.make_move(&opening).expect("legal");

    let board = *game.board();
    let log_len = game.move_log().len();

    let a = search(&mut game, 3, Algorithm::AlphaBeta);
    let b = search(&mut game, 3, Algorithm::AlphaBeta);
    assert_eq!(a, b);

    assert_eq!(*game.board(), board);
    assert_eq!(game.move_log().len(), log_len);
    assert!(!game.white_to_move());
    assert_eq!(game.capture_index(), 0);
}

// ============================================================================
// Algorithm names
// ============================================================================

#[test]
fn test_algorithm_names_roundtrip() {
    for algorithm in ALL {
        assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
    }
    assert_eq!("Alpha-Beta".parse::<Algorithm>(), Ok(Algorithm::AlphaBeta));
    assert!(matches!(
        "mcts".parse::<Algorithm>(),
        Err(EngineError::UnknownAlgorithm { .. })
    ));
    assert_eq!(Algorithm::default(), Algorithm::AlphaBeta);
}
