//! Build-time game settings.
//!
//! Nothing here is reconfigurable at runtime. Glyphs switch to plain ASCII
//! when the crate is built with the `ascii` feature.

use std::time::Duration;

use ratatui::symbols::border;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const FPS: u64 = 16;
pub const WINS: u32 = 3;

// Board dimensions in grid cells
pub const WIDTH: usize = 50;
pub const HEIGHT: usize = 30;
pub const PADDLE_HEIGHT: usize = 10;

// Controls
pub const UP_1: char = 'w';
pub const DOWN_1: char = 's';
pub const UP_2: char = 'k';
pub const DOWN_2: char = 'j';
pub const QUIT: char = 'q';
pub const PAUSE: char = 'p';

pub const INTRO_SCREEN: Duration = Duration::from_secs(3);
pub const SCORE_BANNER: Duration = Duration::from_secs(1);
pub const PAUSE_POLL: Duration = Duration::from_millis(10);

pub fn tick_interval() -> Duration {
    Duration::from_micros(1_000_000 / FPS)
}

const _: () = assert!(PADDLE_HEIGHT > 0 && PADDLE_HEIGHT <= HEIGHT);
const _: () = assert!(WIDTH >= 5, "paddles need a playfield between them");
const _: () = assert!(WINS > 0);

pub struct Glyphs {
    pub ball: char,
    pub paddle: char,
    pub background: char,
    pub border: border::Set,
}

#[cfg(not(feature = "ascii"))]
pub const GLYPHS: Glyphs = Glyphs {
    ball: '●',
    paddle: '█',
    background: ' ',
    border: border::ROUNDED,
};

#[cfg(feature = "ascii")]
pub const GLYPHS: Glyphs = Glyphs {
    ball: '@',
    paddle: '#',
    background: '.',
    border: border::Set {
        top_left: "+",
        top_right: "+",
        bottom_left: "+",
        bottom_right: "+",
        vertical_left: "|",
        vertical_right: "|",
        horizontal_top: "-",
        horizontal_bottom: "-",
    },
};
