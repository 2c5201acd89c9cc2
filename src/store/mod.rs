//! Persistence for scorecards, abstracted over the real Postgres store and
//! the in-memory implementation used by tests.
pub mod memory;
pub mod postgres;

pub use memory::MemStore;
pub use postgres::PgStore;

use std::fmt;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::scorecard::ScorecardState;

/// One row of the games listing, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub id: Uuid,
    pub game_id: String,
    pub course_name: String,
    pub game_date: NaiveDate,
}

#[derive(Debug)]
pub enum StoreError {
    /// No scorecard exists for the given game id.
    NotFound(String),
    /// The backing store rejected or failed an operation.
    Persistence(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(game_id) => {
                write!(f, "no scorecard found for '{}'", game_id)
            }
            StoreError::Persistence(msg) => write!(f, "storage error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<tokio_postgres::Error> for StoreError {
    fn from(e: tokio_postgres::Error) -> Self {
        StoreError::Persistence(e.to_string())
    }
}

/// Scorecard persistence operations.
///
/// Upserts are idempotent overwrites: the store keys pars by (game, hole)
/// and strokes by (game, player, hole), so re-recording a cell replaces the
/// previous value. Callers are expected to pass pre-validated values; the
/// Postgres schema re-checks ranges with CHECK constraints.
#[async_trait]
pub trait Store: Send + Sync {
    /// All games, newest first.
    async fn list_games(&self) -> Result<Vec<GameSummary>, StoreError>;

    /// The most recently created game, if any.
    async fn latest_game(&self) -> Result<Option<GameSummary>, StoreError>;

    /// Create a game plus its 1-4 players. The human-readable game id is
    /// derived from course and date and suffixed with " #n" until unique.
    async fn create_game(
        &self,
        course: &str,
        date: NaiveDate,
        player_names: &[String],
    ) -> Result<GameSummary, StoreError>;

    /// Load the full scorecard for a game by its human-readable id.
    async fn load_scorecard(&self, game_id: &str) -> Result<ScorecardState, StoreError>;

    /// Write one par cell through to storage.
    async fn upsert_par(&self, game: Uuid, hole: usize, par: i32) -> Result<(), StoreError>;

    /// Write one stroke cell through to storage.
    async fn upsert_stroke(
        &self,
        game: Uuid,
        player: Uuid,
        hole: usize,
        strokes: i32,
    ) -> Result<(), StoreError>;
}

/// Base display id for a game: "<course> - mm/dd/yyyy".
pub(crate) fn base_game_id(course: &str, date: NaiveDate) -> String {
    format!("{} - {}", course, date.format("%m/%d/%Y"))
}
