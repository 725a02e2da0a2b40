//! Sub-boards and the meta-board that arranges them.

use crate::rules::{self, Grid};
use crate::{Outcome, Position, Symbol};
use std::fmt::{self, Write};

/// One 3x3 local board with its cached outcome.
///
/// The board itself does not refuse placements on a decided grid; that
/// is the rule engine's job. It only guarantees that a decided outcome
/// never reverts to `Open`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SubBoard {
    cells: Grid<Symbol>,
    outcome: Outcome,
}

impl SubBoard {
    /// Creates an empty, open sub-board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sub-board from raw cells, deriving its outcome.
    pub fn from_cells(cells: Grid<Symbol>) -> Self {
        let mut board = Self {
            cells,
            outcome: Outcome::Open,
        };
        board.outcome = board.evaluate();
        board
    }

    /// The mark in `cell`, if any.
    pub fn get(&self, cell: Position) -> Option<Symbol> {
        self.cells[cell.to_index()]
    }

    /// True when `cell` is unmarked.
    pub fn is_empty(&self, cell: Position) -> bool {
        self.get(cell).is_none()
    }

    /// Cached outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Raw cells in row-major order.
    pub fn cells(&self) -> &Grid<Symbol> {
        &self.cells
    }

    /// True when all nine cells are marked.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.cells)
    }

    /// Unmarked cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|cell| self.is_empty(*cell))
    }

    /// Marks `cell` and refreshes the outcome. Returns the new outcome.
    pub(crate) fn place(&mut self, cell: Position, symbol: Symbol) -> Outcome {
        self.cells[cell.to_index()] = Some(symbol);
        if !self.outcome.is_decided() {
            self.outcome = self.evaluate();
        }
        self.outcome
    }

    fn evaluate(&self) -> Outcome {
        match rules::line_winner(&self.cells) {
            Some(symbol) => Outcome::Won(symbol),
            None if self.is_full() => Outcome::Drawn,
            None => Outcome::Open,
        }
    }
}

/// Nine sub-boards in a 3x3 arrangement plus the overall outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MetaBoard {
    boards: [SubBoard; 9],
    outcome: Outcome,
}

impl MetaBoard {
    /// Creates an empty meta-board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a meta-board from raw cells, recomputing every outcome.
    pub fn from_cells(cells: [Grid<Symbol>; 9]) -> Self {
        let mut board = Self {
            boards: cells.map(SubBoard::from_cells),
            outcome: Outcome::Open,
        };
        board.outcome = board.evaluate();
        board
    }

    /// The sub-board at `position`.
    pub fn sub_board(&self, position: Position) -> &SubBoard {
        &self.boards[position.to_index()]
    }

    /// All sub-boards in row-major order.
    pub fn sub_boards(&self) -> &[SubBoard; 9] {
        &self.boards
    }

    /// Cached overall outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Outcome of every sub-board in row-major order.
    pub fn outcomes(&self) -> [Outcome; 9] {
        std::array::from_fn(|i| self.boards[i].outcome())
    }

    /// The derived grid of sub-board owners. Drawn and open boards are empty.
    pub fn ownership(&self) -> Grid<Symbol> {
        std::array::from_fn(|i| self.boards[i].outcome().winner())
    }

    /// Raw cells of every sub-board.
    pub fn cells(&self) -> [Grid<Symbol>; 9] {
        std::array::from_fn(|i| *self.boards[i].cells())
    }

    /// True when every sub-board is won or drawn.
    pub fn all_decided(&self) -> bool {
        rules::all_decided(&self.outcomes())
    }

    /// Marks a cell, cascading outcome updates to the meta level.
    ///
    /// Returns the outcome of the touched sub-board.
    pub(crate) fn place(&mut self, sub_board: Position, cell: Position, symbol: Symbol) -> Outcome {
        let local = self.boards[sub_board.to_index()].place(cell, symbol);
        if !self.outcome.is_decided() && local.is_decided() {
            self.outcome = self.evaluate();
        }
        local
    }

    fn evaluate(&self) -> Outcome {
        match rules::line_winner(&self.ownership()) {
            Some(symbol) => Outcome::Won(symbol),
            None if self.all_decided() => Outcome::Drawn,
            None => Outcome::Open,
        }
    }
}

impl fmt::Display for MetaBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row == 3 || row == 6 {
                f.write_str("---+---+---\n")?;
            }
            for col in 0..9 {
                if col == 3 || col == 6 {
                    f.write_char('|')?;
                }
                let (sub_board, cell) = split_global(row, col);
                let symbol = match self.sub_board(sub_board).get(cell) {
                    Some(Symbol::X) => 'X',
                    Some(Symbol::O) => 'O',
                    None => '.',
                };
                f.write_char(symbol)?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Maps a 9x9 row/column onto a sub-board and a cell within it.
fn split_global(row: usize, col: usize) -> (Position, Position) {
    let sub_board = Position::ALL[(row / 3) * 3 + col / 3];
    let cell = Position::ALL[(row % 3) * 3 + col % 3];
    (sub_board, cell)
}
