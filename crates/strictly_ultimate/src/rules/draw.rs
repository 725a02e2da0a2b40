//! Exhaustion checks used to classify draws.

use super::win::Grid;
use crate::Outcome;

/// True when every square of the grid is marked.
pub fn is_full<T>(grid: &Grid<T>) -> bool {
    grid.iter().all(Option::is_some)
}

/// True when every outcome in the grid is won or drawn.
pub fn all_decided(outcomes: &[Outcome; 9]) -> bool {
    outcomes.iter().all(|outcome| outcome.is_decided())
}
