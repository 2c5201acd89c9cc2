//! Derived scorecard aggregates
//!
//! Front 9 covers holes 1-9, back 9 covers holes 10-18. Unset cells count
//! as zero; `holes_completed` tells how much of the round is recorded.
//! Totals are recomputed from scratch on demand (the grid is at most 18x5)
//! and never cached.
use crate::scorecard::{ScorecardState, HOLES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub front9: i32,
    pub back9: i32,
    pub total: i32,
    pub holes_completed: usize,
}

fn accumulate(values: impl Iterator<Item = Option<i32>>) -> Totals {
    let mut totals = Totals::default();
    for (idx, value) in values.enumerate() {
        if let Some(v) = value {
            if idx < HOLES / 2 {
                totals.front9 += v;
            } else {
                totals.back9 += v;
            }
            totals.holes_completed += 1;
        }
    }
    totals.total = totals.front9 + totals.back9;
    totals
}

/// Par totals over the whole card.
pub fn par_totals(card: &ScorecardState) -> Totals {
    accumulate((1..=HOLES).map(|hole| card.par(hole)))
}

/// Stroke totals for one player (index into `card.players()`).
pub fn stroke_totals(card: &ScorecardState, player: usize) -> Totals {
    accumulate((1..=HOLES).map(|hole| card.stroke(player, hole)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorecard::Player;
    use uuid::Uuid;

    fn card_with_players(n: usize) -> ScorecardState {
        let players = (0..n)
            .map(|i| Player {
                id: Uuid::new_v4(),
                name: format!("Player {}", i + 1),
            })
            .collect();
        ScorecardState::new(Uuid::new_v4(), "Test Course - 01/01/2026", players)
    }

    #[test]
    fn test_empty_card_totals_are_zero() {
        let card = card_with_players(2);
        assert_eq!(par_totals(&card), Totals::default());
        assert_eq!(stroke_totals(&card, 0), Totals::default());
    }

    #[test]
    fn test_front9_sums_holes_1_through_9() {
        let mut card = card_with_players(1);
        card.set_stroke(0, 1, 4).unwrap();
        card.set_stroke(0, 9, 5).unwrap();
        card.set_stroke(0, 10, 3).unwrap();
        let totals = stroke_totals(&card, 0);
        assert_eq!(totals.front9, 9);
        assert_eq!(totals.back9, 3);
    }

    #[test]
    fn test_total_is_front_plus_back() {
        let mut card = card_with_players(1);
        for hole in 1..=HOLES {
            card.set_stroke(0, hole, 4).unwrap();
        }
        let totals = stroke_totals(&card, 0);
        assert_eq!(totals.front9, 36);
        assert_eq!(totals.back9, 36);
        assert_eq!(totals.total, totals.front9 + totals.back9);
        assert_eq!(totals.holes_completed, 18);
    }

    #[test]
    fn test_unset_holes_count_as_zero() {
        let mut card = card_with_players(1);
        card.set_stroke(0, 4, 7).unwrap();
        let totals = stroke_totals(&card, 0);
        assert_eq!(totals.front9, 7);
        assert_eq!(totals.back9, 0);
        assert_eq!(totals.total, 7);
        assert_eq!(totals.holes_completed, 1);
    }

    #[test]
    fn test_par_totals_independent_of_strokes() {
        let mut card = card_with_players(2);
        card.set_par(1, 4).unwrap();
        card.set_par(12, 5).unwrap();
        card.set_stroke(0, 1, 8).unwrap();
        let totals = par_totals(&card);
        assert_eq!(totals.front9, 4);
        assert_eq!(totals.back9, 5);
        assert_eq!(totals.total, 9);
        assert_eq!(totals.holes_completed, 2);
    }

    #[test]
    fn test_players_tracked_separately() {
        let mut card = card_with_players(2);
        card.set_stroke(0, 1, 3).unwrap();
        card.set_stroke(1, 1, 6).unwrap();
        assert_eq!(stroke_totals(&card, 0).total, 3);
        assert_eq!(stroke_totals(&card, 1).total, 6);
    }
}
