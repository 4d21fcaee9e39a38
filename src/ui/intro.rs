use ratatui::prelude::*;

use crate::config::{self, VERSION};
use crate::ui::render_message;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroScreen {
    Banner,
    Controls,
}

const LOGO: [&str; 5] = [
    "    ____                    ",
    "   / __ \\____  ____  ____ _ ",
    "  / /_/ / __ \\/ __ \\/ __ `/ ",
    " / ____/ /_/ / / / / /_/ /  ",
    "/_/    \\____/_/ /_/\\__, /   ",
];

pub fn render(frame: &mut Frame, screen: IntroScreen) {
    let lines = match screen {
        IntroScreen::Banner => banner_lines(),
        IntroScreen::Controls => controls_lines(),
    };
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    render_message(frame, &refs);
}

fn banner_lines() -> Vec<String> {
    let mut lines: Vec<String> = LOGO.iter().map(|l| l.to_string()).collect();
    lines.push(format!(" v{:<16}/____/    ", VERSION));
    lines
}

fn controls_lines() -> Vec<String> {
    vec![
        "Controls:".to_string(),
        format!(" {} pause game      ", config::PAUSE),
        format!(" {} quit session    ", config::QUIT),
        String::new(),
        format!(" {} paddle:1 up     ", config::UP_1),
        format!(" {} paddle:1 down   ", config::DOWN_1),
        format!(" {} paddle:2 up     ", config::UP_2),
        format!(" {} paddle:2 down   ", config::DOWN_2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_list_every_binding() {
        let text = controls_lines().join("\n");
        let keys = [
            config::PAUSE,
            config::QUIT,
            config::UP_1,
            config::DOWN_1,
            config::UP_2,
            config::DOWN_2,
        ];
        for key in keys {
            assert!(text.contains(&format!(" {} ", key)));
        }
    }

    #[test]
    fn test_banner_lines_share_width() {
        let lines = banner_lines();
        assert!(lines.iter().all(|l| l.chars().count() == LOGO[0].chars().count()));
    }
}
