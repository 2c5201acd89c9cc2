//! Interactive scorecard editor.
//!
//! One input event is fully processed (state mutation, write-through
//! persistence, aggregate recompute, render model rebuild) before the next
//! event is read. The session ends when the editor reaches `Mode::Quit`.
pub mod editor;
pub mod grid;
pub mod keys;
pub mod navigation;
pub mod view;


pub use editor::{Editor, Mode};
pub use keys::{key_to_action, Action};
pub use navigation::{step, Cursor, Direction};

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::scorecard::ScorecardState;
use crate::store::Store;

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Run the editor for one scorecard until the user quits.
pub async fn run(
    store: &dyn Store,
    scorecard: ScorecardState,
    config: &Config,
) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = session(&mut terminal, store, scorecard, config).await;

    // Always restore the terminal, even when the session errored.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn session(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &dyn Store,
    scorecard: ScorecardState,
    config: &Config,
) -> anyhow::Result<()> {
    let mut editor = Editor::new(scorecard);
    tracing::info!("editing scorecard '{}'", editor.scorecard.game_id());

    loop {
        let model = grid::build(
            &editor.scorecard,
            editor.cursor,
            editor.notice.as_deref(),
            &config.unset_marker,
        );
        terminal.draw(|frame| view::draw(frame, &model, &config.theme))?;

        if !event::poll(EVENT_POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if let Some(action) = key_to_action(key) {
                editor.apply(action, store).await;
            }
        }
        if editor.mode == Mode::Quit {
            return Ok(());
        }
    }
}
