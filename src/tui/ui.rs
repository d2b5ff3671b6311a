//! Stateless UI rendering for the game and its move list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timeline_tictactoe::{Player, Position, Square};

use super::app::{App, Focus};

const HELP: &str =
    "arrows move · enter/space select · 1-9 play · tab switch panel · s sort · r reset · home start · q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and move list
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Timeline Games - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(46), Constraint::Min(30)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_side_panel(frame, body[1], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(help, chunks[2]);
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, area, app, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (column, area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(row * 3 + column) {
            draw_cell(frame, area, app, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let game = app.game();
    let winning = game.winning_line().is_some_and(|line| line.contains(&pos));

    let (symbol, base_style) = match game.board().get(pos) {
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    // The win highlight takes precedence; the cursor then shows as underline.
    let cursor = app.focus() == Focus::Board && pos == app.cursor();
    let style = match (winning, cursor) {
        (true, true) => base_style
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::UNDERLINED | Modifier::BOLD),
        (true, false) => base_style.bg(Color::Green).fg(Color::Black),
        (false, true) => base_style.bg(Color::White).fg(Color::Black),
        (false, false) => base_style,
    };

    let paragraph = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::raw("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_side_panel(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Length(1), // Move list header
            Constraint::Min(3),    // Move list
        ])
        .split(area);

    let game = app.game();
    let status_color = if game.is_finished() {
        Color::Green
    } else {
        Color::Yellow
    };
    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[0]);

    let header = Paragraph::new(format!(
        "Moves  (step {}/{})  Sort {}",
        game.step(),
        game.history().len() - 1,
        app.sort().indicator()
    ))
    .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(header, chunks[1]);

    draw_move_list(frame, chunks[2], app);
}

fn draw_move_list(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .moves()
        .iter()
        .map(|item| {
            let style = if item.active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>2}. ", item.step),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(item.to_string(), style),
            ]))
        })
        .collect();

    let focused = app.focus() == Focus::Moves;
    let list = List::new(items)
        .block(panel("History", focused))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
