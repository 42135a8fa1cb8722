//! # High Score Service
//!
//! Store over the per-game leaderboards. The only mutation is the atomic
//! update at game over: push, sort descending, keep the top three.

use anyhow::Result;
use shared::{GameKind, HighScoreEntry, HighScores};
use tracing::info;

use crate::domain::dates;
use crate::storage::traits::HighScoreStorage;

const LEADERBOARD_SIZE: usize = 3;

#[derive(Clone)]
pub struct HighScoreService<S: HighScoreStorage + Clone> {
    repository: S,
}

impl<S: HighScoreStorage + Clone> HighScoreService<S> {
    pub fn new(repository: S) -> Self {
        Self { repository }
    }

    pub fn high_scores(&self, game: GameKind) -> Result<Vec<HighScoreEntry>> {
        self.repository.load_high_scores(game)
    }

    /// All leaderboards together, for the export document.
    pub fn all_high_scores(&self) -> Result<HighScores> {
        let mut all = HighScores::default();
        for game in GameKind::ALL {
            *all.scores_mut(game) = self.repository.load_high_scores(game)?;
        }
        Ok(all)
    }

    /// Overwrite every leaderboard, e.g. when applying an import.
    pub fn replace_all(&self, scores: HighScores) -> Result<()> {
        for game in GameKind::ALL {
            self.repository.save_high_scores(game, scores.scores(game))?;
        }
        Ok(())
    }

    /// Remove every game's leaderboard.
    pub fn clear(&self) -> Result<()> {
        self.repository.clear_high_scores()
    }

    /// Record a finished game's score and return the updated leaderboard.
    pub fn record_score(&self, game: GameKind, score: u32) -> Result<Vec<HighScoreEntry>> {
        info!("Recording {} score: {}", game.name(), score);

        let mut scores = self.repository.load_high_scores(game)?;
        scores.push(HighScoreEntry {
            score,
            date: dates::today(),
        });
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        scores.truncate(LEADERBOARD_SIZE);

        self.repository.save_high_scores(game, &scores)?;
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::{HighScoreRepository, JsonConnection};
    use tempfile::TempDir;

    fn test_service() -> (HighScoreService<HighScoreRepository>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let repository = HighScoreRepository::new(JsonConnection::new(temp_dir.path()));
        (HighScoreService::new(repository), temp_dir)
    }

    #[test]
    fn keeps_the_top_three_in_order() {
        let (service, _dir) = test_service();
        for score in [50, 90, 10, 70] {
            service.record_score(GameKind::Counting, score).unwrap();
        }

        let scores = service.high_scores(GameKind::Counting).unwrap();
        let values: Vec<u32> = scores.iter().map(|s| s.score).collect();
        assert_eq!(values, vec![90, 70, 50]);
    }

    #[test]
    fn each_game_has_its_own_leaderboard() {
        let (service, _dir) = test_service();
        service.record_score(GameKind::Color, 25).unwrap();

        assert_eq!(service.high_scores(GameKind::Color).unwrap().len(), 1);
        assert!(service.high_scores(GameKind::Shapes).unwrap().is_empty());
    }

    #[test]
    fn all_high_scores_gathers_every_game() {
        let (service, _dir) = test_service();
        service.record_score(GameKind::Memory, 8).unwrap();
        service.record_score(GameKind::Shapes, 14).unwrap();

        let all = service.all_high_scores().unwrap();
        assert_eq!(all.memory.len(), 1);
        assert_eq!(all.shapes.len(), 1);
        assert!(all.counting.is_empty());
    }
}
