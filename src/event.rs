use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Key code the reader stores for Ctrl+C, which raw mode delivers as a key.
pub const CTRL_C: char = '\u{3}';
const ESC: char = '\u{1b}';

/// Value no `char` can take; marks the cell as holding no new key.
const EMPTY: u32 = u32::MAX;

/// Single-slot mailbox holding the most recent key press.
///
/// The input thread is the only writer and the game loop the only reader.
/// A newer key overwrites an unread one.
pub struct InputCell {
    slot: AtomicU32,
}

impl InputCell {
    pub fn new() -> Self {
        Self {
            slot: AtomicU32::new(EMPTY),
        }
    }

    pub fn store(&self, key: char) {
        self.slot.store(key as u32, Ordering::Release);
    }

    /// Takes the pending key, leaving the cell empty.
    pub fn take(&self) -> Option<char> {
        char::from_u32(self.slot.swap(EMPTY, Ordering::AcqRel))
    }

    /// Sleeps in `poll` steps until a key arrives, then takes it.
    pub fn wait(&self, poll: Duration) -> char {
        loop {
            if let Some(key) = self.take() {
                return key;
            }
            thread::sleep(poll);
        }
    }
}

pub struct InputReader {
    cell: Arc<InputCell>,
}

impl InputReader {
    /// Starts the detached reader thread. It lives until the process exits.
    pub fn spawn() -> Self {
        let cell = Arc::new(InputCell::new());
        let writer = Arc::clone(&cell);

        thread::spawn(move || loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if let Some(c) = key_char(key) {
                        writer.store(c);
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(error = %err, "failed to read terminal input");
                    thread::sleep(Duration::from_millis(50));
                }
            }
        });

        Self { cell }
    }

    pub fn cell(&self) -> &InputCell {
        &self.cell
    }
}

fn key_char(key: KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(CTRL_C),
        KeyCode::Char(c) => Some(c),
        KeyCode::Esc => Some(ESC),
        KeyCode::Enter => Some('\n'),
        _ => None,
    }
}
