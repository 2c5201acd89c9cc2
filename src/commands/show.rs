use anyhow::{Context, Result};

use crate::scorecard::{ScorecardState, HOLES};
use crate::store::Store;
use crate::totals::{par_totals, stroke_totals, Totals};

const LABEL_WIDTH: usize = 5;
const MIN_CELL_WIDTH: usize = 3;

fn cell(value: Option<i32>, marker: &str, width: usize) -> String {
    match value {
        Some(v) => format!("{:<width$}", v),
        None => format!("{:<width$}", marker),
    }
}

/// Static (non-interactive) scorecard table: Hole | Par | one column per
/// player, then Front/Back/Total rows.
pub fn format_scorecard(card: &ScorecardState, marker: &str) -> String {
    let mut widths = vec![MIN_CELL_WIDTH];
    for player in card.players() {
        widths.push(MIN_CELL_WIDTH.max(player.name.chars().count()));
    }

    let mut lines: Vec<String> = Vec::with_capacity(HOLES + 7);
    lines.push(card.game_id().to_string());

    let header_cells: Vec<String> = std::iter::once("Par".to_string())
        .chain(card.players().iter().map(|p| p.name.clone()))
        .zip(&widths)
        .map(|(name, &width)| format!("{:<width$}", name))
        .collect();
    let header = format!("{:>width$} | {}", "Hole", header_cells.join(" | "), width = LABEL_WIDTH);
    let separator = "-".repeat(header.trim_end().chars().count());
    lines.push(header);
    lines.push(separator.clone());

    for hole in 1..=HOLES {
        let mut cells = vec![cell(card.par(hole), marker, widths[0])];
        for (idx, &width) in widths.iter().enumerate().skip(1) {
            cells.push(cell(card.stroke(idx - 1, hole), marker, width));
        }
        lines.push(format!("{:>width$} | {}", hole, cells.join(" | "), width = LABEL_WIDTH));
    }
    lines.push(separator);

    let par = par_totals(card);
    let strokes: Vec<Totals> = (0..card.num_players())
        .map(|idx| stroke_totals(card, idx))
        .collect();
    for (label, pick) in [
        ("Front", (|t: &Totals| t.front9) as fn(&Totals) -> i32),
        ("Back", |t: &Totals| t.back9),
        ("Total", |t: &Totals| t.total),
    ] {
        let cells: Vec<String> = std::iter::once(pick(&par))
            .chain(strokes.iter().map(pick))
            .zip(&widths)
            .map(|(sum, &width)| format!("{:<width$}", sum))
            .collect();
        lines.push(format!("{:>width$} | {}", label, cells.join(" | "), width = LABEL_WIDTH));
    }

    let mut out = String::new();
    for line in lines {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub async fn run(store: &dyn Store, game: String) -> Result<()> {
    let card = store
        .load_scorecard(&game)
        .await
        .with_context(|| format!("Failed to load scorecard '{}'", game))?;
    print!("{}", format_scorecard(&card, "-"));
    Ok(())
}
