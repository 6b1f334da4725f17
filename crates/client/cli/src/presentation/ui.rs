//! Frame layout and panel composition.

use anyhow::Result;
use pairs_core::GameState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::messages::MessageLog;
use crate::presentation::{terminal::Tui, widgets};
use crate::state::AppState;

pub const MESSAGE_PANEL_HEIGHT: u16 = 5;

pub fn render(
    terminal: &mut Tui,
    game: &GameState,
    app_state: &AppState,
    messages: &MessageLog,
) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, game, app_state, messages))?;
    Ok(())
}

fn render_frame(frame: &mut Frame, game: &GameState, app_state: &AppState, messages: &MessageLog) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(MESSAGE_PANEL_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.area());

    widgets::header::render(frame, rows[0], game);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    widgets::board::render(frame, columns[0], game, app_state);
    widgets::features::render(frame, columns[1]);

    widgets::messages::render(frame, rows[2], messages);
    widgets::footer::render(frame, rows[3]);
}
