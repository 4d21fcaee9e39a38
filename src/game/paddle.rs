use std::ops::RangeInclusive;

use crate::config::{HEIGHT, PADDLE_HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn player(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A vertical run of `PADDLE_HEIGHT` cells in a fixed column.
///
/// Only the top row is stored; the occupied rows are always
/// `top..=top + PADDLE_HEIGHT - 1` and stay inside the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paddle {
    x: i32,
    top: i32,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => 1,
            Side::Right => WIDTH as i32 - 2,
        };
        Self {
            x,
            top: Self::centered_top(),
            score: 0,
        }
    }

    fn centered_top() -> i32 {
        ((HEIGHT - PADDLE_HEIGHT) / 2) as i32
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn first_row(&self) -> i32 {
        self.top
    }

    pub fn last_row(&self) -> i32 {
        self.top + PADDLE_HEIGHT as i32 - 1
    }

    pub fn rows(&self) -> RangeInclusive<i32> {
        self.first_row()..=self.last_row()
    }

    pub fn recenter(&mut self) {
        self.top = Self::centered_top();
    }

    /// Shifts the paddle one row. A move that would leave the grid is ignored.
    pub fn shift(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Up if self.first_row() > 0 => self.top -= 1,
            Direction::Down if self.last_row() < HEIGHT as i32 - 1 => self.top += 1,
            _ => return false,
        }
        true
    }

    #[cfg(test)]
    pub(crate) fn at(x: i32, top: i32) -> Self {
        Self { x, top, score: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_paddles_are_centered() {
        let left = Paddle::new(Side::Left);
        let right = Paddle::new(Side::Right);
        assert_eq!(left.x(), 1);
        assert_eq!(right.x(), WIDTH as i32 - 2);
        assert_eq!(left.rows(), right.rows());
        // Symmetric around the vertical center of the grid
        assert_eq!(left.first_row() + left.last_row(), HEIGHT as i32 - 1);
        assert_eq!(left.rows().count(), PADDLE_HEIGHT);
    }

    #[test]
    fn test_shift_never_leaves_grid() {
        let mut paddle = Paddle::new(Side::Left);
        for _ in 0..HEIGHT * 2 {
            paddle.shift(Direction::Up);
            assert!(paddle.first_row() >= 0);
        }
        assert_eq!(paddle.first_row(), 0);
        assert!(!paddle.shift(Direction::Up));

        for _ in 0..HEIGHT * 2 {
            paddle.shift(Direction::Down);
            assert!(paddle.last_row() <= HEIGHT as i32 - 1);
            assert_eq!(paddle.rows().count(), PADDLE_HEIGHT);
        }
        assert_eq!(paddle.last_row(), HEIGHT as i32 - 1);
        assert!(!paddle.shift(Direction::Down));
    }

    #[test]
    fn test_shift_moves_one_row() {
        let mut paddle = Paddle::new(Side::Right);
        let top = paddle.first_row();
        assert!(paddle.shift(Direction::Down));
        assert_eq!(paddle.first_row(), top + 1);
        assert!(paddle.shift(Direction::Up));
        assert!(paddle.shift(Direction::Up));
        assert_eq!(paddle.first_row(), top - 1);
        assert_eq!(paddle.x(), WIDTH as i32 - 2);
    }

    #[test]
    fn test_recenter_keeps_score() {
        let mut paddle = Paddle::new(Side::Left);
        paddle.score = 2;
        paddle.shift(Direction::Up);
        paddle.recenter();
        assert_eq!(paddle, Paddle { score: 2, ..Paddle::new(Side::Left) });
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Left.opponent(), Side::Right);
        assert_eq!(Side::Right.player(), 2);
    }
}
