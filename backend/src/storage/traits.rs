//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use shared::{ForumData, GameKind, HealthData, HighScoreEntry, Milestone, Settings};

/// Trait defining the interface for health record storage
///
/// Loading always succeeds with the empty default when nothing has been
/// stored yet or the stored data cannot be read back.
pub trait HealthStorage: Send + Sync {
    /// Load all health records grouped by metric
    fn load_health_data(&self) -> Result<HealthData>;

    /// Overwrite the stored health records with the given state
    fn save_health_data(&self, data: &HealthData) -> Result<()>;

    /// Remove all stored health records
    fn clear_health_data(&self) -> Result<()>;
}

/// Trait defining the interface for milestone storage
pub trait MilestoneStorage: Send + Sync {
    /// Load all milestones
    fn load_milestones(&self) -> Result<Vec<Milestone>>;

    /// Overwrite the stored milestones with the given list
    fn save_milestones(&self, milestones: &[Milestone]) -> Result<()>;

    /// Remove all stored milestones
    fn clear_milestones(&self) -> Result<()>;
}

/// Trait defining the interface for forum storage
pub trait ForumStorage: Send + Sync {
    /// Load the whole forum (posts with their comments and replies)
    fn load_forum(&self) -> Result<ForumData>;

    /// Overwrite the stored forum with the given state
    fn save_forum(&self, forum: &ForumData) -> Result<()>;

    /// Remove all stored forum data
    fn clear_forum(&self) -> Result<()>;
}

/// Trait defining the interface for settings storage
pub trait SettingsStorage: Send + Sync {
    /// Load the settings record, or the defaults when none is stored
    fn load_settings(&self) -> Result<Settings>;

    /// Overwrite the stored settings
    fn save_settings(&self, settings: &Settings) -> Result<()>;

    /// Remove the stored settings
    fn clear_settings(&self) -> Result<()>;
}

/// Trait defining the interface for per-game high-score storage
///
/// Each game's leaderboard lives under its own key, so one game's update
/// never rewrites another game's scores.
pub trait HighScoreStorage: Send + Sync {
    /// Load the leaderboard for one game
    fn load_high_scores(&self, game: GameKind) -> Result<Vec<HighScoreEntry>>;

    /// Overwrite the leaderboard for one game
    fn save_high_scores(&self, game: GameKind, scores: &[HighScoreEntry]) -> Result<()>;

    /// Remove every game's leaderboard
    fn clear_high_scores(&self) -> Result<()>;
}
