pub mod grid;
pub mod paddle;
pub mod physics;

use rand::Rng;

use crate::config::{self, GLYPHS, WINS};
use grid::Grid;
use paddle::{Direction, Paddle, Side};
use physics::{Ball, Outcome};

/// What a key press asks the game loop to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Pause,
    Move(Side, Direction),
}

impl Action {
    /// Maps a key to its binding. Unbound keys yield `None`.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            config::QUIT | crate::event::CTRL_C => Some(Action::Quit),
            config::PAUSE => Some(Action::Pause),
            config::UP_1 => Some(Action::Move(Side::Left, Direction::Up)),
            config::DOWN_1 => Some(Action::Move(Side::Left, Direction::Down)),
            config::UP_2 => Some(Action::Move(Side::Right, Direction::Up)),
            config::DOWN_2 => Some(Action::Move(Side::Right, Direction::Down)),
            _ => None,
        }
    }
}

/// Result of awarding a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Standing {
    Continue(Side),
    Won(Side),
}

/// Ball, paddles and match score.
pub struct Match {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
}

impl Match {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            ball: Ball::serve(rng),
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
        }
    }

    /// Serves a fresh ball and recenters both paddles. Scores are kept.
    pub fn start_round<R: Rng>(&mut self, rng: &mut R) {
        self.ball = Ball::serve(rng);
        self.left.recenter();
        self.right.recenter();
        tracing::debug!(vx = self.ball.vx, vy = self.ball.vy, "round served");
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn move_paddle(&mut self, side: Side, direction: Direction) {
        let paddle = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        paddle.shift(direction);
    }

    /// Advances the ball one cell and resolves its contacts.
    pub fn tick(&mut self) -> Outcome {
        physics::advance(&mut self.ball);
        physics::resolve_collisions(&mut self.ball, &self.left, &self.right)
    }

    /// Credits `scorer` with a point and reports whether the match is over.
    pub fn award(&mut self, scorer: Side) -> Standing {
        let paddle = match scorer {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        paddle.score += 1;
        tracing::info!(
            player = scorer.player(),
            left = self.left.score,
            right = self.right.score,
            "point scored"
        );
        if self.paddle(scorer).score >= WINS {
            Standing::Won(scorer)
        } else {
            Standing::Continue(scorer)
        }
    }

    /// Draws the ball and both paddles onto a cleared grid.
    pub fn project(&self, grid: &mut Grid) {
        grid.fill(GLYPHS.background);
        grid.stamp(self.ball.x, self.ball.y, GLYPHS.ball);
        for paddle in [&self.left, &self.right] {
            for row in paddle.rows() {
                grid.stamp(paddle.x(), row, GLYPHS.paddle);
            }
        }
    }
}
