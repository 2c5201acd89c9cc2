use anyhow::{Context, Result};

use crate::scorecard::ScorecardState;
use crate::store::Store;
use crate::totals::stroke_totals;

/// "Player -- N holes complete -- total" per player, creation order.
pub fn format_totals(card: &ScorecardState) -> String {
    let mut output = String::new();
    for (idx, player) in card.players().iter().enumerate() {
        let totals = stroke_totals(card, idx);
        output.push_str(&format!(
            "{} -- {} holes complete -- {}\n",
            player.name, totals.holes_completed, totals.total
        ));
    }
    output
}

pub async fn run(store: &dyn Store, game: String) -> Result<()> {
    let card = store
        .load_scorecard(&game)
        .await
        .with_context(|| format!("Failed to load scorecard '{}'", game))?;
    print!("{}", format_totals(&card));
    Ok(())
}
