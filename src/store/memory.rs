//! In-memory store
//!
//! Backs tests and offline experimentation the same way the Postgres store
//! backs real sessions. `fail_writes` flips every subsequent write into a
//! persistence error so write-through failure handling can be exercised.
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::scorecard::{Player, ScorecardState};

use super::{base_game_id, GameSummary, Store, StoreError};

struct GameRecord {
    summary: GameSummary,
    players: Vec<Player>,
    pars: HashMap<usize, i32>,
    strokes: HashMap<(Uuid, usize), i32>,
}

#[derive(Default)]
struct Inner {
    // Creation order; listings read newest first.
    games: Vec<GameRecord>,
    fail_writes: bool,
}

#[derive(Default)]
pub struct MemStore {
    inner: Mutex<Inner>,
}

impl MemStore {
    pub fn new() -> Self {
        MemStore::default()
    }

    /// Make every subsequent write fail with a persistence error.
    pub fn fail_writes(&self, fail: bool) {
        self.inner.lock().unwrap().fail_writes = fail;
    }

    fn check_writable(inner: &Inner) -> Result<(), StoreError> {
        if inner.fail_writes {
            Err(StoreError::Persistence("injected write failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Store for MemStore {
    async fn list_games(&self) -> Result<Vec<GameSummary>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .games
            .iter()
            .rev()
            .map(|g| g.summary.clone())
            .collect())
    }

    async fn latest_game(&self) -> Result<Option<GameSummary>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.games.last().map(|g| g.summary.clone()))
    }

    async fn create_game(
        &self,
        course: &str,
        date: NaiveDate,
        player_names: &[String],
    ) -> Result<GameSummary, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_writable(&inner)?;

        let base = base_game_id(course, date);
        let mut game_id = base.clone();
        let mut suffix = 1;
        while inner.games.iter().any(|g| g.summary.game_id == game_id) {
            suffix += 1;
            game_id = format!("{} #{}", base, suffix);
        }

        let summary = GameSummary {
            id: Uuid::new_v4(),
            game_id,
            course_name: course.to_string(),
            game_date: date,
        };
        let players = player_names
            .iter()
            .map(|name| Player {
                id: Uuid::new_v4(),
                name: name.clone(),
            })
            .collect();
        inner.games.push(GameRecord {
            summary: summary.clone(),
            players,
            pars: HashMap::new(),
            strokes: HashMap::new(),
        });
        Ok(summary)
    }

    async fn load_scorecard(&self, game_id: &str) -> Result<ScorecardState, StoreError> {
        let inner = self.inner.lock().unwrap();
        let game = inner
            .games
            .iter()
            .find(|g| g.summary.game_id == game_id)
            .ok_or_else(|| StoreError::NotFound(game_id.to_string()))?;

        let mut card = ScorecardState::new(game.summary.id, game_id, game.players.clone());
        for (&hole, &par) in &game.pars {
            card.set_par(hole, par)
                .map_err(|e| StoreError::Persistence(e.to_string()))?;
        }
        for (&(player_id, hole), &strokes) in &game.strokes {
            let idx = game
                .players
                .iter()
                .position(|p| p.id == player_id)
                .ok_or_else(|| {
                    StoreError::Persistence(format!("score references unknown player {}", player_id))
                })?;
            card.set_stroke(idx, hole, strokes)
                .map_err(|e| StoreError::Persistence(e.to_string()))?;
        }
        Ok(card)
    }

    async fn upsert_par(&self, game: Uuid, hole: usize, par: i32) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_writable(&inner)?;
        let record = inner
            .games
            .iter_mut()
            .find(|g| g.summary.id == game)
            .ok_or_else(|| StoreError::NotFound(game.to_string()))?;
        record.pars.insert(hole, par);
        Ok(())
    }

    async fn upsert_stroke(
        &self,
        game: Uuid,
        player: Uuid,
        hole: usize,
        strokes: i32,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check_writable(&inner)?;
        let record = inner
            .games
            .iter_mut()
            .find(|g| g.summary.id == game)
            .ok_or_else(|| StoreError::NotFound(game.to_string()))?;
        record.strokes.insert((player, hole), strokes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_load_round_trip() {
        let store = MemStore::new();
        let summary = store
            .create_game("Pebble Beach", date(), &["Alice".to_string(), "Bob".to_string()])
            .await
            .unwrap();
        assert_eq!(summary.game_id, "Pebble Beach - 08/27/2026");

        let card = store.load_scorecard(&summary.game_id).await.unwrap();
        assert_eq!(card.num_players(), 2);
        assert_eq!(card.players()[0].name, "Alice");
        assert_eq!(card.players()[1].name, "Bob");
    }

    #[tokio::test]
    async fn test_game_id_collision_gets_suffix() {
        let store = MemStore::new();
        let first = store
            .create_game("Links", date(), &["A".to_string()])
            .await
            .unwrap();
        let second = store
            .create_game("Links", date(), &["B".to_string()])
            .await
            .unwrap();
        let third = store
            .create_game("Links", date(), &["C".to_string()])
            .await
            .unwrap();
        assert_eq!(first.game_id, "Links - 08/27/2026");
        assert_eq!(second.game_id, "Links - 08/27/2026 #2");
        assert_eq!(third.game_id, "Links - 08/27/2026 #3");
    }

    #[tokio::test]
    async fn test_load_unknown_game_is_not_found() {
        let store = MemStore::new();
        let err = store.load_scorecard("nope").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_upserts_persist_and_overwrite() {
        let store = MemStore::new();
        let summary = store
            .create_game("Links", date(), &["Alice".to_string()])
            .await
            .unwrap();
        let card = store.load_scorecard(&summary.game_id).await.unwrap();
        let player = card.players()[0].id;

        store.upsert_par(summary.id, 1, 4).await.unwrap();
        store.upsert_stroke(summary.id, player, 1, 5).await.unwrap();
        store.upsert_stroke(summary.id, player, 1, 3).await.unwrap();

        let card = store.load_scorecard(&summary.game_id).await.unwrap();
        assert_eq!(card.par(1), Some(4));
        assert_eq!(card.stroke(0, 1), Some(3));
    }

    #[tokio::test]
    async fn test_list_and_latest_are_newest_first() {
        let store = MemStore::new();
        store.create_game("Old", date(), &["A".to_string()]).await.unwrap();
        let newest = store
            .create_game("New", date(), &["B".to_string()])
            .await
            .unwrap();

        let games = store.list_games().await.unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].game_id, newest.game_id);
        assert_eq!(
            store.latest_game().await.unwrap().unwrap().game_id,
            newest.game_id
        );
    }

    #[tokio::test]
    async fn test_fail_writes_injects_persistence_errors() {
        let store = MemStore::new();
        let summary = store
            .create_game("Links", date(), &["A".to_string()])
            .await
            .unwrap();
        store.fail_writes(true);
        let err = store.upsert_par(summary.id, 1, 4).await.unwrap_err();
        assert!(matches!(err, StoreError::Persistence(_)));

        // Reads still work, and nothing was written.
        let card = store.load_scorecard(&summary.game_id).await.unwrap();
        assert_eq!(card.par(1), None);
    }
}
