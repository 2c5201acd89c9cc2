//! In-memory scorecard for a single round
//!
//! This is pure data: 18 holes, a par per hole, and a stroke count per
//! player per hole. All persistence lives behind `crate::store`; the TUI
//! editor mutates this state cell-by-cell and writes each edit through.
use std::fmt;
use std::ops::RangeInclusive;

use uuid::Uuid;

/// Every round is exactly 18 holes, regardless of how much is recorded.
pub const HOLES: usize = 18;

/// A scorecard covers 1 to 4 players.
pub const MAX_PLAYERS: usize = 4;

/// Valid par values for a hole.
pub const PAR_RANGE: RangeInclusive<i32> = 3..=6;

/// Valid stroke counts for a hole.
pub const STROKE_RANGE: RangeInclusive<i32> = 1..=8;

/// A player on a scorecard, in stable creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
}

/// A value rejected by a range check (par, strokes, or hole number).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfRangeError {
    pub field: &'static str,
    pub value: i32,
    pub min: i32,
    pub max: i32,
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} out of range ({}-{})",
            self.field, self.value, self.min, self.max
        )
    }
}

impl std::error::Error for OutOfRangeError {}

fn check_hole(hole: usize) -> Result<usize, OutOfRangeError> {
    if (1..=HOLES).contains(&hole) {
        Ok(hole - 1)
    } else {
        Err(OutOfRangeError {
            field: "hole",
            value: hole as i32,
            min: 1,
            max: HOLES as i32,
        })
    }
}

fn check_range(
    field: &'static str,
    value: i32,
    range: &RangeInclusive<i32>,
) -> Result<(), OutOfRangeError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(OutOfRangeError {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// One game's grid: pars per hole and strokes per player per hole.
///
/// Holes are numbered 1..=18 at this API boundary; unset cells are `None`.
/// Setters re-validate ranges even though the edit controller pre-validates.
#[derive(Debug, Clone)]
pub struct ScorecardState {
    game: Uuid,
    game_id: String,
    players: Vec<Player>,
    pars: [Option<i32>; HOLES],
    strokes: Vec<[Option<i32>; HOLES]>,
}

impl ScorecardState {
    pub fn new(game: Uuid, game_id: impl Into<String>, players: Vec<Player>) -> Self {
        debug_assert!(!players.is_empty() && players.len() <= MAX_PLAYERS);
        let strokes = vec![[None; HOLES]; players.len()];
        ScorecardState {
            game,
            game_id: game_id.into(),
            players,
            pars: [None; HOLES],
            strokes,
        }
    }

    /// Storage key of the game this scorecard belongs to.
    pub fn game(&self) -> Uuid {
        self.game
    }

    /// Human-readable game identifier, e.g. "Pebble Beach - 08/27/2026".
    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn par(&self, hole: usize) -> Option<i32> {
        check_hole(hole).ok().and_then(|i| self.pars[i])
    }

    pub fn set_par(&mut self, hole: usize, par: i32) -> Result<(), OutOfRangeError> {
        let idx = check_hole(hole)?;
        check_range("par", par, &PAR_RANGE)?;
        self.pars[idx] = Some(par);
        Ok(())
    }

    pub fn stroke(&self, player: usize, hole: usize) -> Option<i32> {
        let idx = check_hole(hole).ok()?;
        self.strokes.get(player).and_then(|holes| holes[idx])
    }

    pub fn set_stroke(
        &mut self,
        player: usize,
        hole: usize,
        strokes: i32,
    ) -> Result<(), OutOfRangeError> {
        let idx = check_hole(hole)?;
        check_range("strokes", strokes, &STROKE_RANGE)?;
        let holes = self
            .strokes
            .get_mut(player)
            .ok_or(OutOfRangeError {
                field: "player",
                value: player as i32,
                min: 0,
                max: MAX_PLAYERS as i32 - 1,
            })?;
        holes[idx] = Some(strokes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_player_card() -> ScorecardState {
        let players = vec![
            Player {
                id: Uuid::new_v4(),
                name: "Alice".to_string(),
            },
            Player {
                id: Uuid::new_v4(),
                name: "Bob".to_string(),
            },
        ];
        ScorecardState::new(Uuid::new_v4(), "Pebble Beach - 08/27/2026", players)
    }

    #[test]
    fn test_new_card_is_empty() {
        let card = two_player_card();
        for hole in 1..=HOLES {
            assert_eq!(card.par(hole), None);
            assert_eq!(card.stroke(0, hole), None);
            assert_eq!(card.stroke(1, hole), None);
        }
    }

    #[test]
    fn test_set_and_get_par() {
        let mut card = two_player_card();
        card.set_par(1, 4).unwrap();
        card.set_par(18, 3).unwrap();
        assert_eq!(card.par(1), Some(4));
        assert_eq!(card.par(18), Some(3));
        assert_eq!(card.par(2), None);
    }

    #[test]
    fn test_set_par_rejects_out_of_range() {
        let mut card = two_player_card();
        assert!(card.set_par(1, 2).is_err());
        assert!(card.set_par(1, 7).is_err());
        assert_eq!(card.par(1), None);
    }

    #[test]
    fn test_set_and_get_stroke() {
        let mut card = two_player_card();
        card.set_stroke(1, 4, 5).unwrap();
        assert_eq!(card.stroke(1, 4), Some(5));
        assert_eq!(card.stroke(0, 4), None);
    }

    #[test]
    fn test_set_stroke_rejects_out_of_range() {
        let mut card = two_player_card();
        assert!(card.set_stroke(0, 1, 0).is_err());
        assert!(card.set_stroke(0, 1, 9).is_err());
        assert_eq!(card.stroke(0, 1), None);
    }

    #[test]
    fn test_hole_out_of_range_rejected() {
        let mut card = two_player_card();
        assert!(card.set_par(0, 4).is_err());
        assert!(card.set_par(19, 4).is_err());
        assert!(card.set_stroke(0, 0, 4).is_err());
        assert!(card.set_stroke(0, 19, 4).is_err());
        assert_eq!(card.par(0), None);
        assert_eq!(card.par(19), None);
    }

    #[test]
    fn test_unknown_player_rejected() {
        let mut card = two_player_card();
        assert!(card.set_stroke(2, 1, 4).is_err());
        assert_eq!(card.stroke(2, 1), None);
    }

    #[test]
    fn test_edit_overwrites_not_duplicates() {
        let mut card = two_player_card();
        card.set_stroke(0, 7, 4).unwrap();
        card.set_stroke(0, 7, 6).unwrap();
        assert_eq!(card.stroke(0, 7), Some(6));
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut card = two_player_card();
        card.set_par(3, 5).unwrap();
        let once = card.clone();
        card.set_par(3, 5).unwrap();
        assert_eq!(card.par(3), once.par(3));
    }

    #[test]
    fn test_out_of_range_error_display() {
        let err = OutOfRangeError {
            field: "par",
            value: 9,
            min: 3,
            max: 6,
        };
        assert_eq!(err.to_string(), "par 9 out of range (3-6)");
    }
}
