//! Stateless UI rendering.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictactoe_engine::{Player, Position, Session, Square, Variant};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Title of the reset confirmation dialog.
pub const CONFIRM_TITLE: &str = "are you sure you want to reset?";

/// Shown under the status when the board is full and nobody has won.
pub const STALLED_HINT: &str = "no moves left, press r to reset";

/// Renders the whole screen for `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let session = app.session();

    let chunks = Layout::vertical([
        Constraint::Length(2),               // Title
        Constraint::Length(CELL_HEIGHT * 3), // Board
        Constraint::Length(2),               // Status
        Constraint::Length(1),               // Primary action
        Constraint::Length(1),               // Help
        Constraint::Min(0),
    ])
    .split(frame.area());

    let title = Paragraph::new(format!(
        "Tic Tac Toe ({})",
        variant_name(session.game().variant())
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], session, app.cursor());

    let mut status_lines = vec![Line::from(session.status_label())];
    if session.game().is_stalled() {
        status_lines.push(Line::from(Span::styled(
            STALLED_HINT,
            Style::default().fg(Color::DarkGray),
        )));
    }
    let status = Paragraph::new(status_lines)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(status, chunks[2]);

    let action_style = if session.reset_enabled() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let action = Paragraph::new(format!("[r] {}", session.primary_action_label()))
        .style(action_style)
        .alignment(Alignment::Center);
    frame.render_widget(action, chunks[3]);

    let help = Paragraph::new("arrows + enter or 1-9 to play, q to quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    if session.is_confirming() {
        draw_confirm_dialog(frame);
    }
}

fn variant_name(variant: Variant) -> &'static str {
    match variant {
        Variant::Standard => "standard",
        Variant::Vanishing => "vanishing moves",
    }
}

fn draw_board(frame: &mut Frame, area: Rect, session: &Session, cursor: Position) {
    let board_area = center_rect(area, CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let rows = Layout::vertical([Constraint::Length(CELL_HEIGHT); 3]).split(board_area);

    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::horizontal([Constraint::Length(CELL_WIDTH); 3]).split(*row_area);
        for (c, cell_area) in cols.iter().enumerate() {
            if let Some(pos) = Position::from_row_col(r, c) {
                draw_cell(frame, *cell_area, session, cursor, pos);
            }
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, session: &Session, cursor: Position, pos: Position) {
    let game = session.game();
    let on_winning_line = session.highlighted().is_some_and(|line| line.contains(pos));
    let expiring = game.next_eviction() == Some(pos);

    let border_style = if on_winning_line {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if pos == cursor && !session.is_confirming() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut mark_style = match game.board().get(pos) {
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Square::Empty => Style::default(),
    };
    if expiring {
        mark_style = mark_style.add_modifier(Modifier::DIM | Modifier::CROSSED_OUT);
    }
    if on_winning_line {
        mark_style = mark_style.bg(Color::Blue).fg(Color::White);
    }

    let symbol = match game.board().get(pos) {
        Square::Occupied(player) => player.to_string(),
        Square::Empty => String::new(),
    };

    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let cell = Paragraph::new(Line::from(Span::styled(symbol, mark_style)))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(cell, area);
}

fn draw_confirm_dialog(frame: &mut Frame) {
    let area = center_rect(frame.area(), 36, 4);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(CONFIRM_TITLE)
        .border_style(Style::default().fg(Color::Yellow));
    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from("[y] yes    [n] no"),
    ])
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(body, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::vertical([
        Constraint::Length(area.height.saturating_sub(height) / 2),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Length(area.width.saturating_sub(width) / 2),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .split(vert[1])[1]
}
