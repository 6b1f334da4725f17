//! The card grid.
//!
//! Face-down cards render `?`, pending and matched cards their face.
//! The cursor is drawn as a highlighted border.

use pairs_core::{CardPhase, GameState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppState, BOARD_COLUMNS};

const CARD_WIDTH: u16 = 7;
const CARD_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, game: &GameState, app_state: &AppState) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let deck_len = game.deck.len();
    if deck_len == 0 {
        return;
    }
    let row_count = deck_len.div_ceil(BOARD_COLUMNS);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); row_count])
        .split(inner);

    for row in 0..row_count {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(CARD_WIDTH); BOARD_COLUMNS])
            .split(rows[row]);

        for column in 0..BOARD_COLUMNS {
            let index = row * BOARD_COLUMNS + column;
            if index >= deck_len {
                break;
            }
            render_card(frame, cells[column], game, app_state, index);
        }
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    game: &GameState,
    app_state: &AppState,
    index: usize,
) {
    let face = game
        .deck
        .face(index)
        .map(|face| face.to_string())
        .unwrap_or_default();

    let (text, style) = match game.phase(index) {
        CardPhase::FaceDown => ("?".to_string(), Style::default().fg(Color::DarkGray)),
        CardPhase::Pending => (face, Style::default().add_modifier(Modifier::BOLD)),
        CardPhase::Matched => (face, Style::default().fg(Color::Green)),
    };

    let border_style = if index == app_state.cursor {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let card = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(card, area);
}
