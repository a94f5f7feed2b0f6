//! Terminal renderer using crossterm
//!
//! Draws the field to the alternate screen, one full redraw per input
//! event.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use minefield_core::{CellView, Field, Pos};

/// Terminal renderer. `init` takes over the screen (raw mode, alternate
/// buffer, hidden cursor), `cleanup` gives it back. `Drop` repeats the
/// cleanup so a panic or early return cannot leave the terminal raw.
pub struct Renderer {
    stdout: Stdout,
    initialized: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            initialized: false,
        }
    }

    /// Initialize the terminal for rendering
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            EnterAlternateScreen,
            Hide,
            Clear(ClearType::All),
            MoveTo(0, 0)
        )?;
        self.initialized = true;
        Ok(())
    }

    /// Restore the terminal
    pub fn cleanup(&mut self) -> io::Result<()> {
        if !self.initialized {
            return Ok(());
        }
        self.initialized = false;
        execute!(self.stdout, ResetColor, Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    /// Draw the field with its status header.
    pub fn render(&mut self, field: &Field) -> io::Result<()> {
        queue!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        queue!(
            self.stdout,
            SetForegroundColor(Color::AnsiValue(238)),
            Print(format!(
                "{} out of {} mines left",
                field.mines_left(),
                field.total_mines()
            )),
            ResetColor
        )?;
        self.draw_grid(field)?;
        self.stdout.flush()
    }

    /// Draw the fully disclosed board with an end-of-game banner.
    pub fn render_end(&mut self, field: &Field, won: bool) -> io::Result<()> {
        let (banner, color) = if won {
            ("YOU WON!!!", Color::AnsiValue(178))
        } else {
            ("GAME OVER", Color::AnsiValue(75))
        };

        queue!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        queue!(
            self.stdout,
            SetForegroundColor(color),
            SetAttribute(Attribute::Bold),
            Print(banner),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
        self.draw_grid(field)?;
        queue!(
            self.stdout,
            MoveTo(0, field.height() as u16 + 2),
            SetAttribute(Attribute::Italic),
            Print("press any key to exit"),
            SetAttribute(Attribute::Reset)
        )?;
        self.stdout.flush()
    }

    fn draw_grid(&mut self, field: &Field) -> io::Result<()> {
        let cursor = field.cursor();

        for y in 0..field.height() {
            queue!(self.stdout, MoveTo(0, y as u16 + 1))?;
            for x in 0..field.width() {
                let pos = Pos::new(x, y);
                if let Some(cell) = field.get(pos) {
                    self.draw_cell(cell.view(), pos == cursor)?;
                }
            }
        }
        Ok(())
    }

    /// One cell, two columns wide. Mines are bold red, flags reversed
    /// bold italic red, counts sit on the 256-colour ramp `adjacent * 30`
    /// (at most 240, so the value always fits). The cursor cell gets a
    /// yellow background.
    fn draw_cell(&mut self, view: CellView, under_cursor: bool) -> io::Result<()> {
        if under_cursor {
            queue!(self.stdout, SetBackgroundColor(Color::Yellow))?;
        }

        match view {
            CellView::Hidden => {
                queue!(self.stdout, Print(" ."))?;
            }
            CellView::Flagged => {
                queue!(
                    self.stdout,
                    SetForegroundColor(Color::Red),
                    SetAttribute(Attribute::Bold),
                    SetAttribute(Attribute::Italic),
                    SetAttribute(Attribute::Reverse),
                    Print(" F")
                )?;
            }
            CellView::Mine => {
                queue!(
                    self.stdout,
                    SetForegroundColor(Color::Red),
                    SetAttribute(Attribute::Bold),
                    Print(" M")
                )?;
            }
            CellView::Revealed { adjacent } => {
                queue!(
                    self.stdout,
                    SetForegroundColor(Color::AnsiValue(adjacent * 30)),
                    Print(format!(" {adjacent}"))
                )?;
            }
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset), ResetColor)?;
        Ok(())
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
