//! Header: title, move counter, and the win banner.

use pairs_core::GameState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, game: &GameState) {
    let mut spans = vec![
        Span::styled("pairs", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  |  "),
        Span::raw(format!("Moves: {}", game.moves)),
    ];

    if game.is_won() {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            format!("Solved in {} moves! Press r for a new round", game.moves),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
