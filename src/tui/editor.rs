//! Edit controller for the interactive scorecard
//!
//! A small state machine: the session is `Navigating` until the quit key
//! sends it to `Quit`. Every accepted edit mutates the in-memory scorecard
//! first and is then written through to the store before the next input is
//! processed. A failed write-through keeps the in-memory edit (optimistic
//! policy), surfaces a notice in the status line, and leaves the session
//! navigating.
use tracing::{debug, warn};

use crate::scorecard::{ScorecardState, PAR_RANGE, STROKE_RANGE};
use crate::store::{Store, StoreError};

use super::keys::Action;
use super::navigation::{self, Cursor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigating,
    Quit,
}

pub struct Editor {
    pub scorecard: ScorecardState,
    pub cursor: Cursor,
    pub mode: Mode,
    /// Non-fatal message for the status line (e.g. a failed save).
    pub notice: Option<String>,
}

impl Editor {
    pub fn new(scorecard: ScorecardState) -> Self {
        Editor {
            scorecard,
            cursor: Cursor::default(),
            mode: Mode::Navigating,
            notice: None,
        }
    }

    /// Process one input action to completion (mutation + write-through).
    pub async fn apply(&mut self, action: Action, store: &dyn Store) {
        if self.mode == Mode::Quit {
            return;
        }
        match action {
            Action::Quit => {
                debug!("editor session quit");
                self.mode = Mode::Quit;
            }
            Action::Move(direction) => {
                self.cursor =
                    navigation::step(self.cursor, direction, self.scorecard.num_players());
            }
            Action::Digit(value) => self.edit(value, store).await,
        }
    }

    async fn edit(&mut self, value: i32, store: &dyn Store) {
        let hole = self.cursor.hole();
        let game = self.scorecard.game();

        let result = match self.cursor.player() {
            // Par column: only 3-6 are valid; anything else is silently ignored.
            None => {
                if !PAR_RANGE.contains(&value) {
                    debug!("ignored par edit {} on hole {}", value, hole);
                    return;
                }
                if let Err(e) = self.scorecard.set_par(hole, value) {
                    warn!("rejected par edit: {}", e);
                    return;
                }
                store.upsert_par(game, hole, value).await
            }
            // Player column: 1-8 are valid.
            Some(idx) => {
                if !STROKE_RANGE.contains(&value) {
                    debug!("ignored stroke edit {} on hole {}", value, hole);
                    return;
                }
                if let Err(e) = self.scorecard.set_stroke(idx, hole, value) {
                    warn!("rejected stroke edit: {}", e);
                    return;
                }
                let player = self.scorecard.players()[idx].id;
                store.upsert_stroke(game, player, hole, value).await
            }
        };

        self.record_write(result);
    }

    fn record_write(&mut self, result: Result<(), StoreError>) {
        match result {
            Ok(()) => {
                self.notice = None;
            }
            Err(e) => {
                // The edit stays on screen; only the save failed.
                warn!("write-through failed: {}", e);
                self.notice = Some(format!("Save failed: {} (edit kept on screen)", e));
            }
        }
    }
}
