pub mod intro;
pub mod viewport;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Phase};
use crate::config::{GLYPHS, WIDTH};
use crate::game::grid::Grid;

const RULER: &str = "~~~~~~~~~~~~~~~~~~~~";

pub fn render(frame: &mut Frame, app: &App) {
    if let Phase::Intro(screen) = app.phase {
        intro::render(frame, screen);
        return;
    }

    let board = app.viewport.board().intersection(frame.area());
    render_board(frame, board, &app.grid);
    render_scores(frame, app);

    match app.phase {
        Phase::Paused => render_message(frame, &["Game paused...", "[press any key to continue]"]),
        Phase::RoundOver(side) => {
            let msg = format!("Player {} scores!", side.player());
            render_message(frame, &[RULER, msg.as_str(), RULER]);
        }
        Phase::MatchOver(side) => {
            let msg = format!("Player {} wins!", side.player());
            render_message(frame, &[RULER, msg.as_str(), RULER]);
        }
        _ => {}
    }
}

fn render_board(frame: &mut Frame, area: Rect, grid: &Grid) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(GLYPHS.border)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(field_lines(grid)), inner);
}

/// One line per grid row: a leading spacer, then each cell as glyph plus spacer.
fn field_lines(grid: &Grid) -> Vec<Line<'static>> {
    grid.rows()
        .map(|row| {
            let mut spans = Vec::with_capacity(WIDTH + 1);
            spans.push(Span::raw(" "));
            spans.extend(
                row.iter()
                    .map(|&glyph| Span::styled(format!("{} ", glyph), glyph_style(glyph))),
            );
            Line::from(spans)
        })
        .collect()
}

fn glyph_style(glyph: char) -> Style {
    if glyph == GLYPHS.ball {
        Style::default()
            .fg(Color::Rgb(255, 255, 255))
            .add_modifier(Modifier::BOLD)
    } else if glyph == GLYPHS.paddle {
        Style::default().fg(Color::Rgb(180, 200, 255))
    } else {
        Style::default().fg(Color::Rgb(60, 60, 80))
    }
}

/// Scores sit on the top border, a quarter of the grid width in from each side.
fn render_scores(frame: &mut Frame, app: &App) {
    let vp = app.viewport;
    let style = Style::default()
        .fg(Color::Rgb(255, 220, 80))
        .add_modifier(Modifier::BOLD);
    let quarter = (WIDTH / 4) as u16;

    let left = format!("[ {} ]", app.game.left.score);
    let right = format!("[ {} ]", app.game.right.score);
    let right_x = (vp.x + vp.width - 1).saturating_sub(quarter + 4);

    for (x, text) in [(vp.x + quarter, left), (right_x, right)] {
        let area = Rect::new(x, vp.y, text.chars().count() as u16, 1).intersection(frame.area());
        frame.render_widget(Paragraph::new(Span::styled(text, style)), area);
    }
}

/// Centered block of text drawn over whatever is on screen.
pub fn render_message(frame: &mut Frame, lines: &[&str]) {
    let screen = frame.area();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    let height = lines.len() as u16;
    let area = Rect::new(
        screen.x + screen.width.saturating_sub(width) / 2,
        screen.y + screen.height.saturating_sub(height) / 2,
        width,
        height,
    )
    .intersection(screen);

    let style = Style::default().fg(Color::Rgb(255, 100, 100));
    let text: Vec<Line> = lines
        .iter()
        .map(|l| Line::from(Span::styled(l.to_string(), style)))
        .collect();
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}
