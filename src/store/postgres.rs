//! PostgreSQL-backed store
//!
//! Holds a single connection for the life of the process; the connection
//! driver runs on a spawned task. The schema is bootstrapped at connect
//! time with CREATE TABLE IF NOT EXISTS, so a fresh database works out of
//! the box.
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use tokio_postgres::{Client, NoTls};
use uuid::Uuid;

use crate::scorecard::{Player, ScorecardState};

use super::{base_game_id, GameSummary, Store, StoreError};

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS games (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    game_id TEXT UNIQUE NOT NULL,
    course_name TEXT NOT NULL,
    game_date DATE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS players (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    game_id UUID NOT NULL REFERENCES games(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    position INT NOT NULL,
    UNIQUE (game_id, position)
);

CREATE TABLE IF NOT EXISTS hole_pars (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    game_id UUID NOT NULL REFERENCES games(id) ON DELETE CASCADE,
    hole_number INT NOT NULL CHECK (hole_number BETWEEN 1 AND 18),
    par INT NOT NULL CHECK (par BETWEEN 3 AND 6),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    UNIQUE (game_id, hole_number)
);

CREATE TABLE IF NOT EXISTS scores (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    game_id UUID NOT NULL REFERENCES games(id) ON DELETE CASCADE,
    player_id UUID NOT NULL REFERENCES players(id) ON DELETE CASCADE,
    hole_number INT NOT NULL CHECK (hole_number BETWEEN 1 AND 18),
    strokes INT NOT NULL CHECK (strokes BETWEEN 1 AND 8),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    UNIQUE (game_id, player_id, hole_number)
);
";

pub struct PgStore {
    client: Mutex<Client>,
}

impl PgStore {
    /// Connect with a libpq-style connection string, e.g.
    /// "host=localhost user=postgres dbname=golf", and bootstrap the schema.
    pub async fn connect(conn_str: &str) -> Result<Self, StoreError> {
        let (client, connection) = tokio_postgres::connect(conn_str, NoTls).await?;
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("postgres connection error: {}", e);
            }
        });
        client.batch_execute(SCHEMA_SQL).await?;
        Ok(PgStore {
            client: Mutex::new(client),
        })
    }
}

fn row_to_summary(row: &tokio_postgres::Row) -> GameSummary {
    GameSummary {
        id: row.get(0),
        game_id: row.get(1),
        course_name: row.get(2),
        game_date: row.get(3),
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_games(&self) -> Result<Vec<GameSummary>, StoreError> {
        let client = self.client.lock().await;
        let rows = client
            .query(
                "SELECT id, game_id, course_name, game_date FROM games ORDER BY created_at DESC",
                &[],
            )
            .await?;
        Ok(rows.iter().map(row_to_summary).collect())
    }

    async fn latest_game(&self) -> Result<Option<GameSummary>, StoreError> {
        let client = self.client.lock().await;
        let row = client
            .query_opt(
                "SELECT id, game_id, course_name, game_date FROM games \
                 ORDER BY created_at DESC LIMIT 1",
                &[],
            )
            .await?;
        Ok(row.as_ref().map(row_to_summary))
    }

    async fn create_game(
        &self,
        course: &str,
        date: NaiveDate,
        player_names: &[String],
    ) -> Result<GameSummary, StoreError> {
        let mut client = self.client.lock().await;
        let tx = client.transaction().await?;

        // Derive a unique display id: "<course> - mm/dd/yyyy", then " #2", " #3", ...
        let base = base_game_id(course, date);
        let mut game_id = base.clone();
        let mut suffix = 1;
        loop {
            let taken = tx
                .query_opt("SELECT 1 FROM games WHERE game_id = $1", &[&game_id])
                .await?;
            if taken.is_none() {
                break;
            }
            suffix += 1;
            game_id = format!("{} #{}", base, suffix);
        }

        let row = tx
            .query_one(
                "INSERT INTO games (game_id, course_name, game_date) \
                 VALUES ($1, $2, $3) RETURNING id",
                &[&game_id, &course, &date],
            )
            .await?;
        let id: Uuid = row.get(0);

        for (position, name) in player_names.iter().enumerate() {
            tx.execute(
                "INSERT INTO players (game_id, name, position) VALUES ($1, $2, $3)",
                &[&id, name, &(position as i32)],
            )
            .await?;
        }

        tx.commit().await?;
        tracing::info!("created scorecard '{}'", game_id);
        Ok(GameSummary {
            id,
            game_id,
            course_name: course.to_string(),
            game_date: date,
        })
    }

    async fn load_scorecard(&self, game_id: &str) -> Result<ScorecardState, StoreError> {
        let client = self.client.lock().await;
        let game_row = client
            .query_opt("SELECT id FROM games WHERE game_id = $1", &[&game_id])
            .await?
            .ok_or_else(|| StoreError::NotFound(game_id.to_string()))?;
        let game: Uuid = game_row.get(0);

        let player_rows = client
            .query(
                "SELECT id, name FROM players WHERE game_id = $1 ORDER BY position",
                &[&game],
            )
            .await?;
        let players: Vec<Player> = player_rows
            .iter()
            .map(|row| Player {
                id: row.get(0),
                name: row.get(1),
            })
            .collect();

        let mut card = ScorecardState::new(game, game_id, players);

        let par_rows = client
            .query(
                "SELECT hole_number, par FROM hole_pars WHERE game_id = $1",
                &[&game],
            )
            .await?;
        for row in &par_rows {
            let hole: i32 = row.get(0);
            let par: i32 = row.get(1);
            card.set_par(hole as usize, par)
                .map_err(|e| StoreError::Persistence(e.to_string()))?;
        }

        let score_rows = client
            .query(
                "SELECT player_id, hole_number, strokes FROM scores WHERE game_id = $1",
                &[&game],
            )
            .await?;
        for row in &score_rows {
            let player_id: Uuid = row.get(0);
            let hole: i32 = row.get(1);
            let strokes: i32 = row.get(2);
            let idx = card
                .players()
                .iter()
                .position(|p| p.id == player_id)
                .ok_or_else(|| {
                    StoreError::Persistence(format!(
                        "score references unknown player {}",
                        player_id
                    ))
                })?;
            card.set_stroke(idx, hole as usize, strokes)
                .map_err(|e| StoreError::Persistence(e.to_string()))?;
        }

        Ok(card)
    }

    async fn upsert_par(&self, game: Uuid, hole: usize, par: i32) -> Result<(), StoreError> {
        let client = self.client.lock().await;
        client
            .execute(
                "INSERT INTO hole_pars (game_id, hole_number, par) \
                 VALUES ($1, $2, $3) \
                 ON CONFLICT (game_id, hole_number) \
                 DO UPDATE SET par = EXCLUDED.par, updated_at = NOW()",
                &[&game, &(hole as i32), &par],
            )
            .await?;
        Ok(())
    }

    async fn upsert_stroke(
        &self,
        game: Uuid,
        player: Uuid,
        hole: usize,
        strokes: i32,
    ) -> Result<(), StoreError> {
        let client = self.client.lock().await;
        client
            .execute(
                "INSERT INTO scores (game_id, player_id, hole_number, strokes) \
                 VALUES ($1, $2, $3, $4) \
                 ON CONFLICT (game_id, player_id, hole_number) \
                 DO UPDATE SET strokes = EXCLUDED.strokes, updated_at = NOW()",
                &[&game, &player, &(hole as i32), &strokes],
            )
            .await?;
        Ok(())
    }
}
