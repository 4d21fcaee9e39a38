use crate::config::{HEIGHT, WIDTH};

/// Frame contents, one glyph per cell, indexed by column then row.
#[derive(Clone)]
pub struct Grid {
    cells: [[char; WIDTH]; HEIGHT],
}

impl Grid {
    pub fn new(background: char) -> Self {
        Self {
            cells: [[background; WIDTH]; HEIGHT],
        }
    }

    pub fn fill(&mut self, glyph: char) {
        for row in self.cells.iter_mut() {
            row.fill(glyph);
        }
    }

    /// Writes `glyph` at (x, y). Coordinates outside the grid are dropped.
    pub fn stamp(&mut self, x: i32, y: i32, glyph: char) -> bool {
        match Self::index(x, y) {
            Some((col, row)) => {
                self.cells[row][col] = glyph;
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        Self::index(x, y).map(|(col, row)| self.cells[row][col])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char; WIDTH]> {
        self.cells.iter()
    }

    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok().filter(|&c| c < WIDTH)?;
        let row = usize::try_from(y).ok().filter(|&r| r < HEIGHT)?;
        Some((col, row))
    }
}
