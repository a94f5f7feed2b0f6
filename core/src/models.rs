use serde::{Deserialize, Serialize};

/// A cell coordinate. `x` runs along a row, `y` selects the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Construction parameters for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldParams {
    pub width: usize,
    pub height: usize,
    pub mines: usize,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            width: 9,
            height: 9,
            mines: 10,
        }
    }
}

/// What a cell looks like from outside the engine. Render layers draw
/// from this instead of combining the raw cell flags themselves.
///
/// A revealed cell always shows its contents; a flag only masks cells
/// that are still hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed { adjacent: u8 },
    Mine,
}

/// One discrete player action, as delivered by an input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,

    CursorToEdgeUp,
    CursorToEdgeDown,
    CursorToEdgeLeft,
    CursorToEdgeRight,

    Flag,
    Reveal,
    RevealAround,
}

/// A field border, for cursor jumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Up,
    Down,
}

/// Derived game status. `Lost` wins over `Won` for the degenerate case
/// where the last reveal both cleared the board and hit a mine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Won,
    Lost,
}
