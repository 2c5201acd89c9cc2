use anyhow::{bail, Result};

use crate::commands::parse_date;
use crate::scorecard::MAX_PLAYERS;
use crate::store::Store;

pub async fn run(
    store: &dyn Store,
    course: String,
    date: Option<String>,
    players: Vec<String>,
) -> Result<()> {
    let course = course.trim().to_string();
    if course.is_empty() {
        bail!("Course name required");
    }
    if players.is_empty() || players.len() > MAX_PLAYERS {
        bail!(
            "A scorecard needs 1 to {} players, got {}",
            MAX_PLAYERS,
            players.len()
        );
    }
    let date = parse_date(date)?;

    let summary = store.create_game(&course, date, &players).await?;
    println!("Scorecard created: {}", summary.game_id);
    Ok(())
}
