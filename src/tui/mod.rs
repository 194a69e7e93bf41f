//! Terminal dashboard.
//!
//! Owns the screen for the duration of `spmon watch`: applies snapshots from
//! the poller to the [`DashboardController`], maps key presses to actions, and
//! redraws when something changed.

mod app;
mod draw;
mod input;

pub use app::App;
pub use draw::draw;
pub use input::{map_key, Action, KEY_HELP};

use crate::status::StatusSnapshot;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Restores the terminal when dropped, including on early return.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Switch to raw mode and the alternate screen.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the dashboard until the user quits, the token is cancelled, or the
/// snapshot channel closes.
///
/// Cancels the token on exit so the poller stops too.
pub async fn run(
    mut app: App,
    mut rx: mpsc::Receiver<StatusSnapshot>,
    cancel_token: CancellationToken,
) -> io::Result<App> {
    let mut guard = TerminalGuard::enter()?;
    let mut events = EventStream::new();
    let mut dirty = true;

    loop {
        if dirty {
            guard.terminal().draw(|frame| draw(frame, &app))?;
            dirty = false;
        }

        tokio::select! {
            _ = cancel_token.cancelled() => {
                tracing::info!("Dashboard cancelled");
                break;
            }
            snapshot = rx.recv() => match snapshot {
                Some(snapshot) => {
                    app.controller.sync(Some(&snapshot));
                    dirty = true;
                }
                None => {
                    tracing::info!("Snapshot channel closed");
                    break;
                }
            },
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = map_key(key) {
                        tracing::debug!(?action, "Key action");
                        if !app.handle(action) {
                            break;
                        }
                        dirty = true;
                    }
                }
                Some(Ok(Event::Resize(_, _))) => dirty = true,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::error!(error = %e, "Terminal event error");
                    cancel_token.cancel();
                    return Err(e);
                }
                None => break,
            },
        }
    }

    cancel_token.cancel();
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{DashboardController, PieceTheme};
    use crate::status::WorkerStats;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_empty_dashboard() {
        let app = App::new(DashboardController::default(), PieceTheme::Letters);
        let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();

        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("LIVE"));
        assert!(text.contains("waiting for server"));
        assert!(text.contains("Win Prob"));
    }

    #[test]
    fn test_draw_searching_worker() {
        let mut controller = DashboardController::default();
        let snapshot = StatusSnapshot {
            buffer_count: Some(4096),
            workers: [(
                "0".to_string(),
                WorkerStats {
                    status: "Thinking".to_string(),
                    fen: Some("start".to_string()),
                    history_fens: Some(vec!["start".to_string()]),
                    turn: Some("White".to_string()),
                    value: Some(0.2),
                    ..Default::default()
                },
            )]
            .into_iter()
            .collect(),
        };
        controller.sync(Some(&snapshot));
        let app = App::new(controller, PieceTheme::Letters);
        let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();

        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("ACTOR_00"));
        assert!(text.contains("4096"));
        assert!(text.contains("60.0%"));
    }

    #[test]
    fn test_draw_survives_tiny_terminal() {
        let app = App::new(DashboardController::default(), PieceTheme::Unicode);
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}
