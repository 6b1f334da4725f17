//! Feature list: the static configuration mapped into stacked blocks.

use pairs_content::FEATURES;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for feature in &FEATURES {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", feature.icon)),
            Span::styled(feature.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(feature.description));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Why pairs"));
    frame.render_widget(paragraph, area);
}
