use anyhow::{bail, Context, Result};

use crate::scorecard::{HOLES, STROKE_RANGE};
use crate::store::Store;

/// Record one score without the interactive editor. Follows the same
/// load/upsert path the editor uses.
pub async fn run(
    store: &dyn Store,
    game: String,
    player: String,
    hole: i32,
    strokes: i32,
) -> Result<()> {
    if !(1..=HOLES as i32).contains(&hole) {
        bail!("Hole must be between 1 and {}", HOLES);
    }
    if !STROKE_RANGE.contains(&strokes) {
        bail!(
            "Strokes must be between {} and {}",
            STROKE_RANGE.start(),
            STROKE_RANGE.end()
        );
    }

    let card = store
        .load_scorecard(&game)
        .await
        .with_context(|| format!("Failed to load scorecard '{}'", game))?;

    let found = card
        .players()
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(&player));
    let Some(found) = found else {
        let names: Vec<&str> = card.players().iter().map(|p| p.name.as_str()).collect();
        bail!(
            "No player '{}' on this scorecard (players: {})",
            player,
            names.join(", ")
        );
    };

    store
        .upsert_stroke(card.game(), found.id, hole as usize, strokes)
        .await?;
    println!("Recorded: {} hole {} -> {} strokes", found.name, hole, strokes);
    Ok(())
}
