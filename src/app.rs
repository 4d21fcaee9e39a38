use std::thread;
use std::time::Instant;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::config::{self, GLYPHS, INTRO_SCREEN, PAUSE_POLL, SCORE_BANNER};
use crate::event::InputCell;
use crate::game::grid::Grid;
use crate::game::paddle::Side;
use crate::game::physics::Outcome;
use crate::game::{Action, Match, Standing};
use crate::ui::{self, intro::IntroScreen, viewport::Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Intro(IntroScreen),
    Playing,
    Paused,
    RoundOver(Side),
    MatchOver(Side),
}

/// What the loop does after handling a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Pause,
    Quit,
}

enum RoundEnd {
    Quit,
    Scored(Standing),
}

/// Session state: the match, the frame buffer and where it goes on screen.
pub struct App {
    pub phase: Phase,
    pub game: Match,
    pub grid: Grid,
    pub viewport: Viewport,
    rng: StdRng,
}

impl App {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_rng(viewport, StdRng::from_entropy())
    }

    pub fn with_rng(viewport: Viewport, mut rng: StdRng) -> Self {
        Self {
            phase: Phase::Intro(IntroScreen::Banner),
            game: Match::new(&mut rng),
            grid: Grid::new(GLYPHS.background),
            viewport,
            rng,
        }
    }

    /// Runs the whole match. Returns when a player wins or quits.
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        input: &InputCell,
        skip_intro: bool,
    ) -> Result<()> {
        if !skip_intro {
            for screen in [IntroScreen::Banner, IntroScreen::Controls] {
                self.phase = Phase::Intro(screen);
                self.draw(terminal)?;
                thread::sleep(INTRO_SCREEN);
            }
            // Keys pressed during the intro are not gameplay input
            input.take();
        }

        loop {
            self.game.start_round(&mut self.rng);
            self.phase = Phase::Playing;

            match self.play_round(terminal, input)? {
                RoundEnd::Quit => {
                    tracing::info!("quit requested");
                    return Ok(());
                }
                RoundEnd::Scored(Standing::Continue(_)) => {}
                RoundEnd::Scored(Standing::Won(winner)) => {
                    tracing::info!(player = winner.player(), "match won");
                    return Ok(());
                }
            }
        }
    }

    fn play_round<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        input: &InputCell,
    ) -> Result<RoundEnd> {
        let tick = config::tick_interval();

        loop {
            let started = Instant::now();

            match self.poll_input(input) {
                Control::Quit => return Ok(RoundEnd::Quit),
                Control::Pause => {
                    self.phase = Phase::Paused;
                    self.draw(terminal)?;
                    let resumed = self.resume(input);
                    self.phase = Phase::Playing;
                    if resumed == Control::Quit {
                        return Ok(RoundEnd::Quit);
                    }
                }
                Control::Continue => {}
            }

            if let Outcome::Scored(scorer) = self.game.tick() {
                let standing = self.game.award(scorer);
                self.phase = match standing {
                    Standing::Continue(side) => Phase::RoundOver(side),
                    Standing::Won(side) => Phase::MatchOver(side),
                };
                self.draw(terminal)?;
                thread::sleep(SCORE_BANNER);
                return Ok(RoundEnd::Scored(standing));
            }

            self.draw(terminal)?;
            thread::sleep(tick.saturating_sub(started.elapsed()));
        }
    }

    /// Consumes at most one pending key and applies it.
    pub fn poll_input(&mut self, input: &InputCell) -> Control {
        match input.take() {
            Some(key) => self.on_key(key),
            None => Control::Continue,
        }
    }

    pub fn on_key(&mut self, key: char) -> Control {
        match Action::from_key(key) {
            Some(Action::Quit) => Control::Quit,
            Some(Action::Pause) => Control::Pause,
            Some(Action::Move(side, direction)) => {
                self.game.move_paddle(side, direction);
                Control::Continue
            }
            None => Control::Continue,
        }
    }

    /// Waits while paused. The key that resumes play is discarded unless it is quit.
    pub fn resume(&self, input: &InputCell) -> Control {
        tracing::debug!("paused");
        let key = input.wait(PAUSE_POLL);
        tracing::debug!(?key, "resumed");
        match Action::from_key(key) {
            Some(Action::Quit) => Control::Quit,
            _ => Control::Continue,
        }
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.game.project(&mut self.grid);
        let app: &App = self;
        terminal.draw(|frame| ui::render(frame, app))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::physics::Ball;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;
    use std::time::Duration;

    fn app() -> App {
        App::with_rng(Viewport::from_size(110, 34), StdRng::seed_from_u64(3))
    }

    #[test]
    fn test_keypress_moves_paddle_once() {
        let mut app = app();
        let input = InputCell::new();
        let top = app.game.left.first_row();

        input.store(config::UP_1);
        assert_eq!(app.poll_input(&input), Control::Continue);
        assert_eq!(app.game.left.first_row(), top - 1);

        for _ in 0..3 {
            app.poll_input(&input);
        }
        assert_eq!(app.game.left.first_row(), top - 1);
        assert_eq!(app.game.right.first_row(), top);
    }

    #[test]
    fn test_control_keys() {
        let mut app = app();
        assert_eq!(app.on_key(config::QUIT), Control::Quit);
        assert_eq!(app.on_key(config::PAUSE), Control::Pause);
        assert_eq!(app.on_key('z'), Control::Continue);
        let right = app.game.right.first_row();
        app.on_key(config::DOWN_2);
        assert_eq!(app.game.right.first_row(), right + 1);
    }

    #[test]
    fn test_resume_discards_wake_key() {
        let app = app();
        let input = Arc::new(InputCell::new());
        let writer = Arc::clone(&input);
        let before = (app.game.ball, app.game.left.clone());

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            writer.store(config::UP_1);
        });
        assert_eq!(app.resume(&input), Control::Continue);
        handle.join().unwrap();

        assert_eq!((app.game.ball, app.game.left.clone()), before);
        assert_eq!(input.take(), None);
    }

    #[test]
    fn test_quit_while_paused() {
        let app = app();
        let input = InputCell::new();
        input.store(config::QUIT);
        assert_eq!(app.resume(&input), Control::Quit);
    }

    #[test]
    fn test_play_round_ends_on_winning_point() {
        let mut app = app();
        app.game.left.score = config::WINS - 1;
        app.game.right.score = config::WINS - 1;
        let mut terminal = Terminal::new(TestBackend::new(110, 34)).unwrap();
        let input = InputCell::new();

        // Park both paddles at the top so the serve is never returned.
        for _ in 0..config::HEIGHT {
            input.store(config::UP_1);
            app.poll_input(&input);
            input.store(config::UP_2);
            app.poll_input(&input);
        }
        app.game.ball = Ball { x: 25, y: 15, vx: 1, vy: 1 };
        let result = app.play_round(&mut terminal, &input).unwrap();

        assert!(matches!(result, RoundEnd::Scored(Standing::Won(_))));
        assert!(matches!(app.phase, Phase::MatchOver(_)));
    }

    #[test]
    fn test_run_stops_after_match_point() {
        let mut app = app();
        app.game.left.score = config::WINS - 1;
        app.game.right.score = config::WINS - 1;
        let mut terminal = Terminal::new(TestBackend::new(110, 34)).unwrap();
        let input = InputCell::new();

        // Centered paddles left idle never return a serve, whichever diagonal it takes.
        app.run(&mut terminal, &input, true).unwrap();

        assert!(matches!(app.phase, Phase::MatchOver(_)));
        assert_eq!(app.game.left.score + app.game.right.score, 2 * config::WINS - 1);
        assert!(app.game.left.score == config::WINS || app.game.right.score == config::WINS);
        // A new round would have re-served the ball at the center.
        let center = ((config::WIDTH / 2) as i32, (config::HEIGHT / 2) as i32);
        assert_ne!((app.game.ball.x, app.game.ball.y), center);
    }

    #[test]
    fn test_run_quits_on_quit_key() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(110, 34)).unwrap();
        let input = InputCell::new();
        input.store(config::QUIT);
        app.run(&mut terminal, &input, true).unwrap();
        assert_eq!(app.phase, Phase::Playing);
        assert_eq!((app.game.left.score, app.game.right.score), (0, 0));
    }
}
