//! Application state and key handling.

use super::input::move_cursor;
use crossterm::event::KeyCode;
use timeline_tictactoe::{GameState, MoveListItem, PlayOutcome, Position, SortOrder, move_list};
use tracing::{debug, info, instrument, warn};

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor; Enter plays.
    #[default]
    Board,
    /// Arrows move the move-list selection; Enter jumps.
    Moves,
}

impl Focus {
    /// The other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
///
/// The game state is the only thing `reset` clears; the sort order,
/// cursor and focus survive it.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    sort: SortOrder,
    cursor: Position,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the given move list order.
    pub fn new(sort: SortOrder) -> Self {
        Self {
            game: GameState::new(),
            sort,
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Current move list order.
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Square under the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index of the selected row in [`moves`](Self::moves).
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Move list rows in display order.
    pub fn moves(&self) -> Vec<MoveListItem> {
        move_list(&self.game, self.sort)
    }

    /// Status line shown above the move list.
    pub fn status_message(&self) -> String {
        self.game.status().to_string()
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.select_active();
            }
            KeyCode::Char('s') => self.toggle_sort(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Home => self.jump_to(0),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Keys 1-9 map to squares 0-8, matching the board labels.
                if let Some(pos) = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(Position::from_index)
                {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::Moves => {
                    if let Some(item) = self.moves().get(self.selected).copied() {
                        self.jump_to(item.step);
                    }
                }
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::Moves => self.move_selection(key),
            },
            _ => {}
        }
    }

    /// Plays at `pos`; ignored clicks only log.
    fn play(&mut self, pos: Position) {
        match self.game.play_at(pos) {
            PlayOutcome::Placed(mv) => {
                debug!(%mv, "Move applied");
                self.select_active();
            }
            PlayOutcome::Ignored(reason) => debug!(%reason, "Click ignored"),
        }
    }

    fn jump_to(&mut self, step: usize) {
        if let Err(e) = self.game.jump_to(step) {
            warn!(error = %e, "Jump failed");
        }
        self.select_active();
    }

    /// Flips the move list order, keeping the same move selected.
    pub fn toggle_sort(&mut self) {
        let len = self.moves().len();
        self.sort = self.sort.toggle();
        if len > 0 {
            self.selected = len - 1 - self.selected.min(len - 1);
        }
        debug!(sort = %self.sort, "Sort toggled");
    }

    /// Restarts the game, keeping the sort order.
    pub fn reset(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.selected = 0;
    }

    fn move_selection(&mut self, key: KeyCode) {
        let len = self.moves().len();
        if len == 0 {
            return;
        }
        self.selected = match key {
            KeyCode::Up | KeyCode::Left => self.selected.saturating_sub(1),
            _ => (self.selected + 1).min(len - 1),
        };
    }

    /// Points the selection at the row of the step on display.
    fn select_active(&mut self) {
        self.selected = self
            .moves()
            .iter()
            .position(|item| item.active)
            .unwrap_or(0);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(SortOrder::default())
    }
}
