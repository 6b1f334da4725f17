//! Footer displaying key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::raw("[Arrows/hjkl] Move | "),
        Span::raw("[Enter/Space] Flip | "),
        Span::raw("[r] New round | "),
        Span::raw("[q] Quit"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
