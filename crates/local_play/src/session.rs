//! One game in progress, fed a line of input at a time.

use chess_rules::{
    Color, Glyphs, Move, Position, Rejection, TerminalState, is_in_check, new_game,
    terminal_state,
};

use crate::{config::PlayConfig, record::GameRecord};

/// What a line of input did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank line; prompt again
    Empty,
    /// The player asked to stop
    Quit,
    Rejected(Rejection),
    Played(Move),
}

pub struct Session {
    position: Position,
    record: GameRecord,
    glyphs: Glyphs,
    rotate_board: bool,
}

impl Session {
    pub fn new(config: &PlayConfig) -> Self {
        Self {
            position: new_game(),
            record: GameRecord::new(),
            glyphs: config.glyphs,
            rotate_board: config.rotate_board,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    pub fn state(&self) -> TerminalState {
        terminal_state(&self.position)
    }

    pub fn in_check(&self) -> bool {
        is_in_check(&self.position)
    }

    /// Board drawn from the mover's side (or always White's when rotation is
    /// off), followed by whose turn it is.
    pub fn snapshot(&self) -> String {
        let side = self.position.side_to_move();
        let perspective = if self.rotate_board { side } else { Color::White };
        format!(
            "{}Move {}, {} to play",
            self.position.board().render(self.glyphs, perspective),
            self.position.fullmove_number(),
            side
        )
    }

    pub fn prompt(&self) -> String {
        format!("{} move: ", self.position.side_to_move())
    }

    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let token = line.trim();
        match token {
            "" => return Outcome::Empty,
            "quit" | "exit" => return Outcome::Quit,
            _ => {}
        }

        match self.position.submit(token) {
            Ok(mv) => {
                self.record.push(&mv.to_string());
                let state = self.state();
                if state.is_over() {
                    self.record.finish(state);
                }
                Outcome::Played(mv)
            }
            Err(reason) => Outcome::Rejected(reason),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
