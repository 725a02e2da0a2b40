//! The game state machine.
//!
//! `GameState` owns the meta-board, whose turn it is, the mandatory
//! sub-board and the terminal status. It changes only through
//! [`GameState::apply_move`], which validates first and mutates second:
//! a rejected move leaves the state exactly as it was.

use crate::contracts::{Contract, MoveContract};
use crate::rules;
use crate::{GameStatus, MetaBoard, Move, Outcome, Position, RuleError, Symbol};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace, warn};

/// Sub-boards won by each symbol, in the order they were won.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct WonBoards {
    /// Won by X.
    x: Vec<Position>,
    /// Won by O.
    o: Vec<Position>,
}

impl WonBoards {
    /// Sub-boards won by `symbol`.
    pub fn of(&self, symbol: Symbol) -> &[Position] {
        match symbol {
            Symbol::X => &self.x,
            Symbol::O => &self.o,
        }
    }

    pub(crate) fn push(&mut self, symbol: Symbol, sub_board: Position) {
        match symbol {
            Symbol::X => self.x.push(sub_board),
            Symbol::O => self.o.push(sub_board),
        }
    }
}

/// A single game of ultimate tic-tac-toe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub(crate) board: MetaBoard,
    pub(crate) mover: Symbol,
    pub(crate) mandatory: Option<Position>,
    pub(crate) status: GameStatus,
    pub(crate) won: WonBoards,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move, free choice.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: MetaBoard::new(),
            mover: Symbol::X,
            mandatory: None,
            status: GameStatus::InProgress,
            won: WonBoards::default(),
            history: Vec::new(),
        }
    }

    /// The meta-board.
    pub fn board(&self) -> &MetaBoard {
        &self.board
    }

    /// The symbol on turn. After a game ends this is the symbol that
    /// made the final move.
    pub fn mover(&self) -> Symbol {
        self.mover
    }

    /// The sub-board the mover is confined to, or `None` for free choice.
    pub fn mandatory(&self) -> Option<Position> {
        self.mandatory
    }

    /// Current lifecycle status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Sub-boards won by each symbol.
    pub fn won(&self) -> &WonBoards {
        &self.won
    }

    /// Sub-boards won by `symbol`, in winning order.
    pub fn won_by(&self, symbol: Symbol) -> &[Position] {
        self.won.of(symbol)
    }

    /// Every move applied so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Checks whether `sub_board`/`cell` may be played by the mover.
    #[instrument(level = "debug", skip(self), fields(mover = %self.mover))]
    pub fn legal_move(&self, sub_board: Position, cell: Position) -> Result<(), RuleError> {
        if self.is_over() {
            return Err(RuleError::GameOver);
        }
        rules::legal_move(&self.board, self.mandatory, Move::new(sub_board, cell))
    }

    /// Every legal move, ordered by sub-board then cell (both row-major).
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.playable_boards()
            .flat_map(|sub_board| {
                self.board
                    .sub_board(sub_board)
                    .empty_cells()
                    .map(move |cell| Move::new(sub_board, cell))
            })
            .collect()
    }

    fn playable_boards(&self) -> impl Iterator<Item = Position> + '_ {
        let forced = self
            .mandatory
            .filter(|pos| !self.board.sub_board(*pos).outcome().is_decided());
        Position::ALL.into_iter().filter(move |pos| match forced {
            Some(forced) => *pos == forced,
            None => !self.board.sub_board(*pos).outcome().is_decided(),
        })
    }

    /// Applies a move for the symbol on turn.
    ///
    /// On success returns the resulting status. On failure the state is
    /// unchanged and the rejection is returned for the caller to surface.
    #[instrument(skip(self), fields(mover = %self.mover, sub_board = %mv.sub_board, cell = %mv.cell))]
    pub fn apply_move(&mut self, mv: Move) -> Result<GameStatus, RuleError> {
        if let Err(e) = MoveContract::pre(self, &mv) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let status = self.advance(mv);

        #[cfg(debug_assertions)]
        {
            let post = MoveContract::post(&before, self);
            debug_assert!(post.is_ok(), "Move postcondition failed: {:?}", post);
        }

        debug!(mandatory = ?self.mandatory, %status, next = %self.mover, "Move applied");
        if status.is_over() {
            info!(%status, moves = self.history.len(), "Game over");
        }
        Ok(status)
    }

    /// Applies a move after checking that `mover` is the symbol on turn.
    #[instrument(skip(self))]
    pub fn play(&mut self, mover: Symbol, mv: Move) -> Result<GameStatus, RuleError> {
        if self.is_over() {
            return Err(RuleError::GameOver);
        }
        if mover != self.mover {
            warn!(expected = %self.mover, actual = %mover, "Move out of turn");
            return Err(RuleError::WrongMover {
                expected: self.mover,
                actual: mover,
            });
        }
        self.apply_move(mv)
    }

    /// Steps 2-7 of a move. The caller has already validated it.
    pub(crate) fn advance(&mut self, mv: Move) -> GameStatus {
        let mover = self.mover;
        let local = self.board.place(mv.sub_board, mv.cell, mover);
        self.history.push(mv);

        if local == Outcome::Won(mover) {
            self.won.push(mover, mv.sub_board);
            trace!(sub_board = %mv.sub_board, %mover, "Sub-board won");
        }

        self.mandatory = rules::next_mandatory_board(&self.board, mv.cell);

        self.status = GameStatus::from(self.board.outcome());
        if !self.status.is_over() {
            self.mover = mover.opponent();
        }
        self.status
    }

    /// Rebuilds a game by re-validating every move from the start.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, RuleError> {
        let mut game = Self::new();
        for mv in moves {
            game.apply_move(*mv)?;
        }
        Ok(game)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Starts a new game.
pub fn new_game() -> GameState {
    GameState::new()
}

/// Applies a move for `mover` to a copy of `state`, returning the copy.
///
/// `state` itself is never modified.
pub fn apply_move(
    state: &GameState,
    sub_board: Position,
    cell: Position,
    mover: Symbol,
) -> Result<GameState, RuleError> {
    let mut next = state.clone();
    next.play(mover, Move::new(sub_board, cell))?;
    Ok(next)
}
