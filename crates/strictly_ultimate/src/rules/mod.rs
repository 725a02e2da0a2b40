//! Game rules for ultimate tic-tac-toe.
//!
//! Pure functions over grids and boards. Line checking is written once
//! and applied at both levels: to the cells of a sub-board and to the
//! ownership grid the meta-board derives from its sub-boards.

pub mod draw;
pub mod legality;
pub mod win;

pub use draw::{all_decided, is_full};
pub use legality::{legal_move, next_mandatory_board};
pub use win::{Grid, LINES, line_winner};
