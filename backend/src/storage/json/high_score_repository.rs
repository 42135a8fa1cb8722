use anyhow::Result;
use shared::{GameKind, HighScoreEntry};

use crate::storage::json::connection::JsonConnection;
use crate::storage::traits::HighScoreStorage;

/// JSON-backed repository for game leaderboards. Each game stores its list
/// under its own key (`countingHighScores`, `colorHighScores`, ...).
#[derive(Clone)]
pub struct HighScoreRepository {
    connection: JsonConnection,
}

impl HighScoreRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl HighScoreStorage for HighScoreRepository {
    fn load_high_scores(&self, game: GameKind) -> Result<Vec<HighScoreEntry>> {
        Ok(self
            .connection
            .load_key(&game.storage_key())?
            .unwrap_or_default())
    }

    fn save_high_scores(&self, game: GameKind, scores: &[HighScoreEntry]) -> Result<()> {
        self.connection.save_key(&game.storage_key(), &scores)
    }

    fn clear_high_scores(&self) -> Result<()> {
        for game in GameKind::ALL {
            self.connection.delete_key(&game.storage_key())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn games_do_not_share_a_leaderboard() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let repository = HighScoreRepository::new(JsonConnection::new(temp_dir.path()));

        repository.save_high_scores(
            GameKind::Counting,
            &[HighScoreEntry {
                score: 42,
                date: "2025-06-01".to_string(),
            }],
        )?;

        assert_eq!(repository.load_high_scores(GameKind::Counting)?.len(), 1);
        assert!(repository.load_high_scores(GameKind::Memory)?.is_empty());
        Ok(())
    }
}
