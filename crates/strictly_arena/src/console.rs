//! Human-vs-AI play over line-oriented text streams.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use strictly_ultimate::{
    GameSnapshot, GameState, GameStatus, Move, MoveStrategy, Symbol, select_move,
};
use tracing::{debug, info, instrument, warn};

/// An interactive game between a human on `input`/`output` and a strategy.
pub struct ConsoleGame<R, W> {
    game: GameState,
    human: Symbol,
    opponent: Box<dyn MoveStrategy>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    /// Creates a fresh game. `human` chooses which symbol the human plays.
    pub fn new(human: Symbol, opponent: Box<dyn MoveStrategy>, input: R, output: W) -> Self {
        Self {
            game: GameState::new(),
            human,
            opponent,
            input,
            output,
        }
    }

    /// The game so far.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Plays until the game ends or input runs out.
    #[instrument(skip(self), fields(human = %self.human, opponent = self.opponent.name()))]
    pub fn run(&mut self) -> Result<GameStatus> {
        info!("Starting console game");

        while !self.game.is_over() {
            writeln!(self.output, "\n{}", self.game.board())?;
            writeln!(self.output, "{}", GameSnapshot::from(&self.game).status_string())?;

            if self.game.mover() == self.human {
                let mv = self.read_move()?;
                if let Err(e) = self.game.apply_move(mv) {
                    writeln!(self.output, "Illegal move: {}", e)?;
                }
            } else {
                let mv = select_move(&self.game, &mut self.opponent)
                    .context("Opponent failed to move")?;
                self.game
                    .apply_move(mv)
                    .context("Opponent chose a rejected move")?;
                writeln!(self.output, "{} plays {}", self.opponent.name(), mv)?;
            }
        }

        let status = self.game.status();
        writeln!(self.output, "\n{}", self.game.board())?;
        writeln!(self.output, "{}", GameSnapshot::from(&self.game).status_string())?;
        info!(%status, "Console game finished");
        Ok(status)
    }

    /// Prompts until a line parses as a move.
    fn read_move(&mut self) -> Result<Move> {
        loop {
            write!(self.output, "Your move (board_row,board_col cell_row,cell_col): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                warn!("Input closed mid-game");
                bail!("Input closed before the game ended");
            }

            match line.trim().parse::<Move>() {
                Ok(mv) => {
                    debug!(%mv, "Read move");
                    return Ok(mv);
                }
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use strictly_ultimate::{FirstAvailable, Position};

    #[test]
    fn test_bad_input_reprompts_until_closed() {
        // The opponent opens at (0,0) (0,0), forcing play in the top-left board.
        let input = Cursor::new("hello\n2,2 2,2\n0,0 0,1\n");
        let mut output = Vec::new();
        let mut console = ConsoleGame::new(
            Symbol::O,
            Box::new(FirstAvailable::new("first")),
            input,
            &mut output,
        );

        let err = console.run().unwrap_err();
        assert!(err.to_string().contains("Input closed"));
        assert_eq!(
            console.game().history()[..2],
            [
                Move::new(Position::TopLeft, Position::TopLeft),
                Move::new(Position::TopLeft, Position::TopCenter),
            ]
        );
        drop(console);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Not a grid position"));
        assert!(text.contains("Illegal move: Must play in sub-board (0,0), not (2,2)"));
        assert!(text.contains("first plays (0,0) (0,0)"));
    }
}
