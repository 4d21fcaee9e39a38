//! Ball motion and collision resolution.
//!
//! The ball moves one cell per axis per tick. After each move the ball is
//! reflected off the top and bottom walls and then checked against the
//! paddle columns. A ball that reaches a paddle column outside the paddle's
//! rows is a point for the other player.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::config::{HEIGHT, WIDTH};
use crate::game::paddle::{Paddle, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
}

impl Ball {
    /// Centered ball heading in a random diagonal direction.
    pub fn serve<R: Rng>(rng: &mut R) -> Self {
        let mut unit = || if rng.gen_bool(0.5) { 1 } else { -1 };
        Self {
            x: (WIDTH / 2) as i32,
            y: (HEIGHT / 2) as i32,
            vx: unit(),
            vy: unit(),
        }
    }

    fn previous(&self) -> (i32, i32) {
        (self.x - self.vx, self.y - self.vy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Rally,
    Scored(Side),
}

pub fn advance(ball: &mut Ball) {
    ball.x += ball.vx;
    ball.y += ball.vy;
}

/// Resolves wall and paddle contacts for a ball that has just advanced.
pub fn resolve_collisions(ball: &mut Ball, left: &Paddle, right: &Paddle) -> Outcome {
    let prev = ball.previous();
    let bottom = HEIGHT as i32 - 1;

    if ball.y < 0 || ball.y > bottom {
        ball.vy = -ball.vy;
        ball.y = if ball.y < 0 { -ball.y } else { 2 * bottom - ball.y };
    }

    let (side, paddle) = if ball.x <= left.x() {
        (Side::Left, left)
    } else if ball.x >= right.x() {
        (Side::Right, right)
    } else {
        return Outcome::Rally;
    };

    match deflect(ball, prev, front_edge(side, paddle), paddle.rows()) {
        Some(bounced) => {
            *ball = bounced;
            Outcome::Rally
        }
        None => Outcome::Scored(side.opponent()),
    }
}

/// Column the ball is mirrored about when it strikes `paddle`.
fn front_edge(side: Side, paddle: &Paddle) -> i32 {
    match side {
        Side::Left => paddle.x() + 1,
        Side::Right => paddle.x() - 1,
    }
}

/// Row at which the segment `prev -> (ball.x, ball.y)` crosses column `edge_x`.
pub fn intercept_y(prev: (i32, i32), ball: &Ball, edge_x: i32) -> i32 {
    let (px, py) = prev;
    let dx = ball.x - px;
    if dx == 0 {
        return ball.y;
    }
    py + (edge_x - px) * (ball.y - py) / dx
}

/// Returns the reflected ball if the crossing at `edge_x` lands on `rows`.
pub fn deflect(
    ball: &Ball,
    prev: (i32, i32),
    edge_x: i32,
    rows: RangeInclusive<i32>,
) -> Option<Ball> {
    let iy = intercept_y(prev, ball, edge_x);
    if !rows.contains(&iy) {
        return None;
    }
    Some(Ball {
        x: 2 * edge_x - ball.x,
        vx: -ball.vx,
        ..*ball
    })
}
