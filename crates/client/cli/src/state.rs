//! Application state layered over the game state.

/// Number of board columns. The starter deck's eight cards sit in two
/// rows of four; larger decks wrap onto further rows.
pub const BOARD_COLUMNS: usize = 4;

/// Cursor movement on the board grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Mutable UI state: the keyboard cursor used to pick cards.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Board position under the cursor.
    pub cursor: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor one step on the grid, clamped to the board.
    pub fn move_cursor(&mut self, direction: CursorDirection, deck_len: usize) {
        if deck_len == 0 {
            return;
        }
        match direction {
            CursorDirection::Left => {
                if self.cursor % BOARD_COLUMNS > 0 {
                    self.cursor -= 1;
                }
            }
            CursorDirection::Right => {
                if self.cursor % BOARD_COLUMNS < BOARD_COLUMNS - 1 && self.cursor + 1 < deck_len {
                    self.cursor += 1;
                }
            }
            CursorDirection::Up => {
                if self.cursor >= BOARD_COLUMNS {
                    self.cursor -= BOARD_COLUMNS;
                }
            }
            CursorDirection::Down => {
                if self.cursor + BOARD_COLUMNS < deck_len {
                    self.cursor += BOARD_COLUMNS;
                }
            }
        }
    }
}
