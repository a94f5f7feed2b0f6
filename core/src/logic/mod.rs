//! Field construction and game logic.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::data::{Cell, Field};
use crate::error::{Error, Result};
use crate::models::{Action, CellView, Edge, FieldParams, GameStatus, Pos};

/// Builds the mine layout: exactly `params.mines` mines spread over the
/// field by a uniform shuffle of the full layout.
fn place_mines<R: Rng + ?Sized>(params: &FieldParams, rng: &mut R) -> Vec<bool> {
    let mut mines = vec![false; params.width * params.height];
    for slot in mines.iter_mut().take(params.mines) {
        *slot = true;
    }
    mines.shuffle(rng);
    mines
}

/// Mine count among the up to eight in-bounds neighbours of `index`.
fn count_adjacent_mines(mines: &[bool], index: usize, params: &FieldParams) -> u8 {
    let x = index % params.width;
    let y = index / params.width;
    let mut count = 0;

    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }

            let new_x = x as i32 + dx;
            let new_y = y as i32 + dy;

            if new_x >= 0
                && new_x < params.width as i32
                && new_y >= 0
                && new_y < params.height as i32
            {
                let adj_index = (new_x as usize) + (new_y as usize) * params.width;
                if mines[adj_index] {
                    count += 1;
                }
            }
        }
    }

    count
}

fn validate(params: &FieldParams) -> Result<()> {
    if params.width == 0 || params.height == 0 {
        return Err(Error::InvalidConfiguration {
            reason: format!(
                "field dimensions must be positive, got {}x{}",
                params.width, params.height
            ),
        });
    }

    if params.mines > params.width * params.height {
        return Err(Error::InvalidConfiguration {
            reason: format!(
                "{} mines do not fit into {} cells",
                params.mines,
                params.width * params.height
            ),
        });
    }

    Ok(())
}

impl Field {
    /// Creates a field with a fresh random mine layout.
    pub fn new(params: FieldParams) -> Result<Self> {
        Self::with_rng(params, &mut rand::rng())
    }

    /// Creates a field using the caller's rng, so tests and replays can
    /// inject a seeded one for reproducible layouts.
    pub fn with_rng<R: Rng + ?Sized>(params: FieldParams, rng: &mut R) -> Result<Self> {
        validate(&params)?;
        let mines = place_mines(&params, rng);
        Ok(Self::build(params, mines))
    }

    /// Creates a field from an explicit row-major mine layout.
    pub fn from_mines(width: usize, height: usize, mines: &[bool]) -> Result<Self> {
        if mines.len() != width * height {
            return Err(Error::InvalidConfiguration {
                reason: format!(
                    "layout has {} cells, a {width}x{height} field needs {}",
                    mines.len(),
                    width * height
                ),
            });
        }

        let params = FieldParams {
            width,
            height,
            mines: mines.iter().filter(|mine| **mine).count(),
        };
        validate(&params)?;
        Ok(Self::build(params, mines.to_vec()))
    }

    fn build(params: FieldParams, mines: Vec<bool>) -> Self {
        let cells = mines
            .iter()
            .enumerate()
            .map(|(i, mine)| {
                let mut cell = Cell::new(*mine);
                cell.adjacent = count_adjacent_mines(&mines, i, &params);
                cell
            })
            .collect();

        Self {
            width: params.width,
            height: params.height,
            mines: params.mines,
            game_over: false,
            cursor: Pos::new(0, 0),
            cells,
        }
    }

    /// Row-major index of `pos`. Out-of-bounds positions are a caller bug.
    fn index(&self, pos: Pos) -> usize {
        assert!(
            pos.x < self.width && pos.y < self.height,
            "position ({}, {}) outside {}x{} field",
            pos.x,
            pos.y,
            self.width,
            self.height
        );
        pos.y * self.width + pos.x
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }
}

impl Field {
    /// Reveals the cell at `pos` and flood-fills through zero-adjacency
    /// regions: whenever a revealed cell has no adjacent mines, all of
    /// its neighbours are revealed too, and any of those that are again
    /// free of adjacent mines keep the cascade going.
    ///
    /// Revealing a mine sets the game-over flag; the call still runs to
    /// completion. A flagged cell never reveals on its own turn and never
    /// expands, so flags block a direct reveal outright and halt the
    /// cascade wherever it reaches one.
    ///
    /// The cascade runs over an explicit work list. `revealed` doubles as
    /// the visited mark, which bounds the list by the grid size and keeps
    /// the stack flat on large fields.
    pub fn reveal(&mut self, pos: Pos) {
        let mut pending = VecDeque::new();
        pending.push_back(pos);

        while let Some(current) = pending.pop_front() {
            let index = self.index(current);
            if self.cells[index].flagged {
                continue;
            }

            self.cells[index].reveal();

            if self.cells[index].mine {
                self.game_over = true;
            }

            if self.cells[index].adjacent != 0 {
                continue;
            }

            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }

                    let new_x = current.x as i32 + dx;
                    let new_y = current.y as i32 + dy;
                    if !self.in_bounds(new_x, new_y) {
                        continue;
                    }

                    let neighbour = Pos::new(new_x as usize, new_y as usize);
                    let adj_index = self.index(neighbour);
                    if !self.cells[adj_index].revealed {
                        self.cells[adj_index].reveal();
                        pending.push_back(neighbour);
                    }
                }
            }
        }
    }

    /// The "chord": when the player has flagged exactly as many cells in
    /// the 3x3 neighbourhood of `pos` as there are mines in it, every
    /// non-flagged cell of the neighbourhood is revealed (cascades may
    /// carry well beyond it). With a mismatch, nothing changes.
    pub fn reveal_around(&mut self, pos: Pos) {
        let mut neighbourhood = Vec::new();
        let mut mines = 0;
        let mut flags = 0;

        for dy in -1..=1 {
            for dx in -1..=1 {
                let new_x = pos.x as i32 + dx;
                let new_y = pos.y as i32 + dy;
                if !self.in_bounds(new_x, new_y) {
                    continue;
                }

                let p = Pos::new(new_x as usize, new_y as usize);
                let cell = &self.cells[self.index(p)];
                if cell.mine {
                    mines += 1;
                }
                if cell.flagged {
                    flags += 1;
                }
                neighbourhood.push(p);
            }
        }

        if mines != flags {
            return;
        }

        for p in neighbourhood {
            if !self.cells[self.index(p)].flagged {
                self.reveal(p);
            }
        }
    }

    /// Toggles the flag at `pos`. Revealed cells can be flagged too; it
    /// has no effect on play but is not prevented.
    pub fn flag(&mut self, pos: Pos) {
        let index = self.index(pos);
        self.cells[index].toggle_flag();
    }

    /// Reveals every cell for end-of-game disclosure. No mine check, no
    /// cascade.
    pub fn reveal_all(&mut self) {
        for cell in &mut self.cells {
            cell.reveal();
        }
    }
}

impl Field {
    fn valid_translation(&self, dx: isize, dy: isize) -> bool {
        let new_x = self.cursor.x as isize + dx;
        let new_y = self.cursor.y as isize + dy;

        new_x >= 0
            && new_x < self.width as isize
            && new_y >= 0
            && new_y < self.height as isize
    }

    /// Moves the cursor horizontally; moves that would leave the field
    /// are ignored.
    pub fn translate_x(&mut self, dx: isize) {
        if self.valid_translation(dx, 0) {
            self.cursor.x = (self.cursor.x as isize + dx) as usize;
        }
    }

    /// Moves the cursor vertically; moves that would leave the field are
    /// ignored.
    pub fn translate_y(&mut self, dy: isize) {
        if self.valid_translation(0, dy) {
            self.cursor.y = (self.cursor.y as isize + dy) as usize;
        }
    }

    /// Jumps the cursor to a field border.
    pub fn move_to_edge(&mut self, edge: Edge) {
        match edge {
            Edge::Left => self.cursor.x = 0,
            Edge::Right => self.cursor.x = self.width - 1,
            Edge::Up => self.cursor.y = 0,
            Edge::Down => self.cursor.y = self.height - 1,
        }
    }

    /// Applies one driver action. Reveal, chord and flag act at the
    /// cursor position.
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::CursorUp => self.translate_y(-1),
            Action::CursorDown => self.translate_y(1),
            Action::CursorLeft => self.translate_x(-1),
            Action::CursorRight => self.translate_x(1),

            Action::CursorToEdgeUp => self.move_to_edge(Edge::Up),
            Action::CursorToEdgeDown => self.move_to_edge(Edge::Down),
            Action::CursorToEdgeLeft => self.move_to_edge(Edge::Left),
            Action::CursorToEdgeRight => self.move_to_edge(Edge::Right),

            Action::Flag => self.flag(self.cursor),
            Action::Reveal => self.reveal(self.cursor),
            Action::RevealAround => self.reveal_around(self.cursor),
        }
    }
}

impl Field {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell at `pos`, or `None` outside the field.
    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        if pos.x < self.width && pos.y < self.height {
            self.cells.get(pos.y * self.width + pos.x)
        } else {
            None
        }
    }

    pub fn cursor(&self) -> Pos {
        self.cursor
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// True iff every non-mine cell has been revealed.
    pub fn has_won(&self) -> bool {
        self.cells.iter().filter(|cell| !cell.mine).all(|cell| cell.revealed)
    }

    pub fn total_flags(&self) -> usize {
        self.cells.iter().filter(|cell| cell.flagged).count()
    }

    pub fn total_mines(&self) -> usize {
        self.mines
    }

    /// Mines minus flags. Negative when the player has overflagged.
    pub fn mines_left(&self) -> isize {
        self.mines as isize - self.total_flags() as isize
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::Lost
        } else if self.has_won() {
            GameStatus::Won
        } else {
            GameStatus::Running
        }
    }
}

impl Cell {
    pub fn view(&self) -> CellView {
        self.into()
    }
}

impl From<&Cell> for CellView {
    fn from(cell: &Cell) -> Self {
        if cell.revealed {
            if cell.mine {
                CellView::Mine
            } else {
                CellView::Revealed {
                    adjacent: cell.adjacent,
                }
            }
        } else if cell.flagged {
            CellView::Flagged
        } else {
            CellView::Hidden
        }
    }
}
