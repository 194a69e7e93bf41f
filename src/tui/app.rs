//! Terminal dashboard state: the controller plus roster cursor

use super::input::Action;
use crate::dashboard::{DashboardController, PieceTheme};

/// State behind one terminal dashboard session
pub struct App {
    pub controller: DashboardController,
    /// Highlighted roster row
    pub cursor: usize,
    pub theme: PieceTheme,
}

impl App {
    pub fn new(controller: DashboardController, theme: PieceTheme) -> Self {
        Self {
            controller,
            cursor: 0,
            theme,
        }
    }

    /// Apply an action. Returns false when the dashboard should exit.
    pub fn handle(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return false,
            Action::PreviousMove => {
                self.controller.previous_move();
            }
            Action::NextMove => {
                self.controller.next_move();
            }
            Action::GoLive => self.controller.go_live(),
            Action::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            Action::CursorDown => {
                let cards = self.controller.roster().len();
                if self.cursor + 1 < cards {
                    self.cursor += 1;
                }
            }
            Action::SelectCursor => {
                self.controller.select_card(self.cursor);
            }
            Action::SelectIndex(index) => {
                if self.controller.select_card(index) {
                    self.cursor = index;
                }
            }
        }
        true
    }
}
