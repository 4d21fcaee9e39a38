use ratatui::layout::Rect;

use crate::config::{HEIGHT, WIDTH};

/// Placement of the bordered board inside the terminal.
///
/// Every grid cell takes two columns (glyph and a spacer), and the border
/// plus a leading spacer add three more.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const BOARD_WIDTH: u16 = 2 * WIDTH as u16 + 3;
    pub const BOARD_HEIGHT: u16 = HEIGHT as u16 + 2;

    pub fn from_size(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            x: centered_offset(cols, Self::BOARD_WIDTH),
            y: centered_offset(rows, Self::BOARD_HEIGHT),
            width: Self::BOARD_WIDTH,
            height: Self::BOARD_HEIGHT,
        }
    }

    /// Queries the terminal size, falling back to an exact fit for the board.
    pub fn detect() -> Self {
        match crossterm::terminal::size() {
            Ok((cols, rows)) => Self::from_size(cols, rows),
            Err(err) => {
                tracing::warn!(error = %err, "terminal size unavailable, using board size");
                Self::from_size(Self::BOARD_WIDTH, Self::BOARD_HEIGHT)
            }
        }
    }

    pub fn board(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

fn centered_offset(available: u16, needed: u16) -> u16 {
    available.saturating_sub(needed).div_ceil(2)
}
