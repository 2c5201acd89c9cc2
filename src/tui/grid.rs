//! Display-agnostic render model for the scorecard grid
//!
//! Rebuilt from scratch after every state change: 18 value rows, a header,
//! and Front/Back/Total footer rows, each cell carrying its text (already
//! padded to its column width) and a style tag. The rendering surface only
//! has to lay the cells out and apply styles.
use unicode_width::UnicodeWidthStr;

use crate::scorecard::{ScorecardState, HOLES};
use crate::totals::{par_totals, stroke_totals, Totals};

use super::navigation::Cursor;

/// Width of the hole/label column ("Front" is the widest label).
const LABEL_WIDTH: usize = 5;
/// Minimum width of the par and player columns.
const MIN_CELL_WIDTH: usize = 3;

pub const KEY_HINT: &str =
    "Use arrow keys to move. Par column: 3-6. Player cells: 1-8. Press q to quit.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Normal,
    Cursor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub style: CellStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub label: String,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    pub title: String,
    pub header: GridRow,
    pub rows: Vec<GridRow>,
    pub footers: Vec<GridRow>,
    pub hint: String,
    pub notice: Option<String>,
}

impl GridModel {
    /// Total rendered width of one row, separators included.
    pub fn width(&self) -> usize {
        let cells: usize = self
            .header
            .cells
            .iter()
            .map(|c| UnicodeWidthStr::width(c.text.as_str()))
            .sum();
        LABEL_WIDTH + cells + 3 * self.header.cells.len()
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = UnicodeWidthStr::width(text);
    let mut out = String::from(text);
    for _ in len..width {
        out.push(' ');
    }
    out
}

fn value_text(value: Option<i32>, marker: &str, width: usize) -> String {
    match value {
        Some(v) => pad(&v.to_string(), width),
        None => pad(marker, width),
    }
}

/// Build the grid description for the current state.
pub fn build(
    card: &ScorecardState,
    cursor: Cursor,
    notice: Option<&str>,
    unset_marker: &str,
) -> GridModel {
    // Column widths: par column, then one column per player sized to the name.
    let mut widths = vec![MIN_CELL_WIDTH.max(UnicodeWidthStr::width("Par"))];
    for player in card.players() {
        widths.push(MIN_CELL_WIDTH.max(UnicodeWidthStr::width(player.name.as_str())));
    }

    let header = GridRow {
        label: format!("{:>width$}", "Hole", width = LABEL_WIDTH),
        cells: std::iter::once("Par".to_string())
            .chain(card.players().iter().map(|p| p.name.clone()))
            .zip(&widths)
            .map(|(text, &width)| Cell {
                text: pad(&text, width),
                style: CellStyle::Normal,
            })
            .collect(),
    };

    let rows = (1..=HOLES)
        .map(|hole| {
            let row = hole - 1;
            let mut cells = Vec::with_capacity(widths.len());
            cells.push(Cell {
                text: value_text(card.par(hole), unset_marker, widths[0]),
                style: style_at(cursor, row, 0),
            });
            for (idx, &width) in widths.iter().enumerate().skip(1) {
                cells.push(Cell {
                    text: value_text(card.stroke(idx - 1, hole), unset_marker, width),
                    style: style_at(cursor, row, idx),
                });
            }
            GridRow {
                label: format!("{:>width$}", hole, width = LABEL_WIDTH),
                cells,
            }
        })
        .collect();

    let par = par_totals(card);
    let strokes: Vec<Totals> = (0..card.num_players())
        .map(|idx| stroke_totals(card, idx))
        .collect();
    let footers = [
        ("Front", (|t: &Totals| t.front9) as fn(&Totals) -> i32),
        ("Back", |t: &Totals| t.back9),
        ("Total", |t: &Totals| t.total),
    ]
    .into_iter()
    .map(|(label, pick)| GridRow {
        label: format!("{:>width$}", label, width = LABEL_WIDTH),
        cells: std::iter::once(pick(&par))
            .chain(strokes.iter().map(pick))
            .zip(&widths)
            .map(|(sum, &width)| Cell {
                text: pad(&sum.to_string(), width),
                style: CellStyle::Normal,
            })
            .collect(),
    })
    .collect();

    GridModel {
        title: card.game_id().to_string(),
        header,
        rows,
        footers,
        hint: KEY_HINT.to_string(),
        notice: notice.map(|s| s.to_string()),
    }
}

fn style_at(cursor: Cursor, row: usize, col: usize) -> CellStyle {
    if cursor.row == row && cursor.col == col {
        CellStyle::Cursor
    } else {
        CellStyle::Normal
    }
}
