use anyhow::Result;

use crate::store::{GameSummary, Store};

/// Numbered listing, newest first.
pub fn format_games(games: &[GameSummary]) -> String {
    if games.is_empty() {
        return "(No games yet)\n".to_string();
    }
    let mut output = String::new();
    for (idx, game) in games.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", idx + 1, game.game_id));
    }
    output
}

pub async fn run(store: &dyn Store) -> Result<()> {
    let games = store.list_games().await?;
    print!("{}", format_games(&games));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn summary(game_id: &str) -> GameSummary {
        GameSummary {
            id: Uuid::new_v4(),
            game_id: game_id.to_string(),
            course_name: "Links".to_string(),
            game_date: NaiveDate::from_ymd_opt(2026, 8, 27).unwrap(),
        }
    }

    #[test]
    fn test_format_games_empty() {
        assert_eq!(format_games(&[]), "(No games yet)\n");
    }

    #[test]
    fn test_format_games_numbered() {
        let games = vec![summary("Links - 08/27/2026 #2"), summary("Links - 08/27/2026")];
        let output = format_games(&games);
        assert_eq!(output, "1. Links - 08/27/2026 #2\n2. Links - 08/27/2026\n");
    }
}
