//! Terminal game session
//!
//! A [`Session`] owns one [`Game`] and a [`Controller`] per side, and drives
//! the turn loop:
//!
//! 1. Stop if the side to move has no legal move (the other side wins) or
//!    the ply limit is reached (adjourned).
//! 2. Print the board.
//! 3. AI side: search and play the whole line.
//!    Human side: read commands until a ply is complete.
//!
//! Human input is either a command (`moves`, `undo`, `help`, `quit`) or
//! square-number notation. A capture chain may be typed whole (`34x25x14`)
//! or one jump at a time; the prompt stays with the same side until the
//! chain is finished.

use super::ai::{AiPlayer, PlayerKind};
use super::error::{GameError, GameResult};
use crate::core::GameSettings;
use crate::rendering::board::render_board;
use draughts_engine::game::{Game, Progress};
use draughts_engine::notation::{format_line, parse_line};
use draughts_engine::types::{Color, Move, Square};
use draughts_engine::EngineError;
use std::io::{BufRead, Write};
use tracing::{debug, info};

const HELP: &str = "Enter moves by square number: 32-28 for a step, 28x19 for a jump, \
28x19x10 for a whole chain.\nCommands: moves, undo, help, quit";

/// Who plays one side
#[derive(Debug)]
pub enum Controller {
    Human,
    Ai(AiPlayer),
}

impl Controller {
    pub fn kind(&self) -> PlayerKind {
        match self {
            Controller::Human => PlayerKind::Human,
            Controller::Ai(_) => PlayerKind::Ai,
        }
    }
}

/// A line of human input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// One or more steps given as `(from, to)` squares
    Play(Vec<(Square, Square)>),
    Undo,
    Moves,
    Help,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> GameResult<Command> {
        let trimmed = input.trim().to_lowercase();
        match trimmed.as_str() {
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "undo" | "u" => Ok(Command::Undo),
            "moves" | "m" => Ok(Command::Moves),
            "help" | "h" | "?" => Ok(Command::Help),
            "" => Err(GameError::InvalidInput {
                input: String::new(),
                message: "empty input".to_string(),
            }),
            _ => parse_line(&trimmed).map(Command::Play).map_err(|e| GameError::InvalidInput {
                input: trimmed.clone(),
                message: e.to_string(),
            }),
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The other side had no legal move
    Won(Color),
    /// Ply limit reached
    Adjourned { plies: usize },
    /// A human quit, or input ran out
    Quit,
}

/// One game between two controllers
#[derive(Debug)]
pub struct Session {
    game: Game,
    white: Controller,
    black: Controller,
    max_plies: usize,
    /// Completed plies in notation
    history: Vec<String>,
    /// Jumps of the chain in progress
    pending: Vec<Move>,
}

impl Session {
    pub fn new(settings: &GameSettings) -> Self {
        let controller = |kind: PlayerKind, seed: Option<u64>| match kind {
            PlayerKind::Human => Controller::Human,
            PlayerKind::Ai => Controller::Ai(AiPlayer::new(
                settings.search_depth(),
                settings.algorithm,
                seed,
            )),
        };
        Self::with_game(
            Game::new(),
            controller(settings.white, settings.seed),
            controller(settings.black, settings.seed.map(|s| s.wrapping_add(1))),
            settings.max_plies as usize,
        )
    }

    pub fn with_game(game: Game, white: Controller, black: Controller, max_plies: usize) -> Self {
        Self {
            game,
            white,
            black,
            max_plies,
            history: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Completed plies in notation, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn controller(&self, color: Color) -> &Controller {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    /// `Some` once the game is over
    pub fn outcome(&mut self) -> Option<SessionOutcome> {
        if !self.game.has_legal_move() {
            return Some(SessionOutcome::Won(self.game.side_to_move().opponent()));
        }
        if self.history.len() >= self.max_plies {
            return Some(SessionOutcome::Adjourned { plies: self.history.len() });
        }
        None
    }

    /// Let the AI on move play its whole line. Returns the line in notation,
    /// or `None` if the side to move is not an AI or has no move.
    pub fn play_ai_turn(&mut self) -> GameResult<Option<String>> {
        let controller = match self.game.side_to_move() {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        let Controller::Ai(ai) = controller else {
            return Ok(None);
        };
        let Some(chosen) = ai.choose(&mut self.game)? else {
            return Ok(None);
        };

        for mv in &chosen.line {
            let progress = self.game.make_move(mv)?;
            self.record(*mv, progress);
        }
        Ok(Some(format_line(&chosen.line)))
    }

    /// Play human steps. All steps of one command are taken back if any of
    /// them is illegal.
    pub fn play_human(&mut self, steps: &[(Square, Square)]) -> GameResult<Progress> {
        let mut progress = Progress::ChainContinues;
        for (played, &(from, to)) in steps.iter().enumerate() {
            if played > 0 && progress == Progress::TurnComplete {
                self.take_back(played);
                return Err(extra_steps(from, to));
            }
            let Some(mv) = self.game.find_move(from, to) else {
                self.take_back(played);
                return Err(EngineError::IllegalMove {
                    from: from.to_string(),
                    to: to.to_string(),
                }
                .into());
            };
            progress = self.game.make_move(&mv)?;
            self.record(mv, progress);
        }
        Ok(progress)
    }

    /// Undo back to the last position where a human is to move. Returns the
    /// number of plies taken back, a half-played chain counting as one.
    pub fn undo(&mut self) -> usize {
        let has_human = [&self.white, &self.black]
            .iter()
            .any(|c| c.kind() == PlayerKind::Human);

        let mut plies = 0;
        loop {
            if self.game.undo_move().is_empty() {
                break;
            }
            if self.pending.is_empty() {
                self.history.pop();
            } else {
                self.pending.clear();
            }
            plies += 1;
            let to_move = self.controller(self.game.side_to_move()).kind();
            if !has_human || to_move == PlayerKind::Human {
                break;
            }
        }
        debug!(plies, "session undo");
        plies
    }

    /// Run the game loop until it ends
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> GameResult<SessionOutcome> {
        writeln!(out, "{}", HELP)?;
        info!(
            "[GAME] New game: White={} Black={} | Max plies={}",
            self.white.kind(),
            self.black.kind(),
            self.max_plies
        );

        loop {
            if let Some(outcome) = self.outcome() {
                self.report(outcome, out)?;
                return Ok(outcome);
            }

            let side = self.game.side_to_move();
            writeln!(out)?;
            writeln!(out, "--- Ply {} | {} to move ---", self.history.len() + 1, side)?;
            write!(out, "{}", render_board(self.game.board()))?;

            if self.controller(side).kind() == PlayerKind::Ai {
                writeln!(out, "Thinking...")?;
                if let Some(line) = self.play_ai_turn()? {
                    writeln!(out, "{} plays: {}", side, line)?;
                }
                continue;
            }

            if let Some(outcome) = self.human_turn(&mut input, out)? {
                info!("[GAME] Quit after {} plies", self.history.len());
                return Ok(outcome);
            }
        }
    }

    /// Read commands until the human's ply is complete. `Some(Quit)` when
    /// the human quits or input runs out.
    fn human_turn<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> GameResult<Option<SessionOutcome>> {
        let side = self.game.side_to_move();
        loop {
            write!(out, "{}> ", side)?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(Some(SessionOutcome::Quit));
            }

            match Command::parse(&line) {
                Ok(Command::Quit) => {
                    writeln!(out, "Goodbye!")?;
                    return Ok(Some(SessionOutcome::Quit));
                }
                Ok(Command::Undo) => {
                    match self.undo() {
                        0 => writeln!(out, "Nothing to undo.")?,
                        n => writeln!(out, "Undone {} plies.", n)?,
                    }
                    return Ok(None);
                }
                Ok(Command::Moves) => {
                    let lines: Vec<String> =
                        self.game.legal_lines().iter().map(|l| format_line(l)).collect();
                    writeln!(out, "{} legal moves: {}", lines.len(), lines.join(" "))?;
                }
                Ok(Command::Help) => writeln!(out, "{}", HELP)?,
                Ok(Command::Play(steps)) => match self.play_human(&steps) {
                    Ok(Progress::TurnComplete) => return Ok(None),
                    Ok(Progress::ChainContinues) => {
                        if let Some(last) = self.pending.last() {
                            writeln!(out, "Capture continues from {}.", last.to)?;
                        }
                    }
                    Err(GameError::Io(e)) => return Err(GameError::Io(e)),
                    Err(e) => {
                        writeln!(out, "Illegal move ({}). Type 'moves' to see legal moves.", e)?;
                    }
                },
                Err(e) => writeln!(out, "{}", e)?,
            }
        }
    }

    fn record(&mut self, mv: Move, progress: Progress) {
        self.pending.push(mv);
        if progress == Progress::TurnComplete {
            self.history.push(format_line(&self.pending));
            self.pending.clear();
        }
    }

    /// Take back the last `steps` steps made by one human command
    fn take_back(&mut self, steps: usize) {
        for _ in 0..steps {
            if self.game.undo_step().is_none() {
                break;
            }
            if self.pending.pop().is_none() {
                // The step had completed a ply; reopen it
                self.history.pop();
                let log = self.game.move_log();
                let start = log.len().saturating_sub(self.game.capture_index());
                self.pending = log[start..].iter().map(|entry| entry.mv).collect();
            }
        }
    }

    fn report<W: Write>(&self, outcome: SessionOutcome, out: &mut W) -> GameResult<()> {
        writeln!(out)?;
        write!(out, "{}", render_board(self.game.board()))?;
        match outcome {
            SessionOutcome::Won(winner) => {
                info!("[GAME] {} wins after {} plies", winner, self.history.len());
                writeln!(out, "{} wins!", winner)?;
            }
            SessionOutcome::Adjourned { plies } => {
                info!("[GAME] Adjourned after {} plies", plies);
                writeln!(out, "Game adjourned after {} plies.", plies)?;
            }
            SessionOutcome::Quit => {}
        }
        Ok(())
    }
}

fn extra_steps(from: Square, to: Square) -> GameError {
    GameError::InvalidInput {
        input: format!("{}-{}", from, to),
        message: "the ply was already complete".to_string(),
    }
}
