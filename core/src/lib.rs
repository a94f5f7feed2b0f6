//! Field engine for a terminal minesweeper.
//!
//! This crate owns the game rules and nothing else: mine placement,
//! neighbour counts, the flood-fill reveal, the chord reveal, cursor
//! movement and win/loss detection. Input and rendering live with the
//! caller; they feed the engine with [`Action`]s and draw from
//! [`CellView`]s.
//!
//! ```
//! use minefield_core::{Field, FieldParams, Pos};
//!
//! # fn main() -> minefield_core::Result<()> {
//! let mut field = Field::new(FieldParams {
//!     width: 8,
//!     height: 8,
//!     mines: 10,
//! })?;
//!
//! field.reveal(Pos::new(3, 3));
//! if field.has_won() {
//!     println!("cleared!");
//! }
//! # Ok(())
//! # }
//! ```

mod data;
mod error;
mod logic;
mod models;

pub use data::{Cell, Field};
pub use error::{Error, Result};
pub use models::{Action, CellView, Edge, FieldParams, GameStatus, Pos};
