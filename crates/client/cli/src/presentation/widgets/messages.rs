//! Message panel showing recent game events.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List, ListItem},
};

use crate::messages::MessageLog;

pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog) {
    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = messages.recent(visible).map(ListItem::new).collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Log"));
    frame.render_widget(list, area);
}
