//! JSON file storage backend.
//!
//! Each store key maps to one pretty-printed JSON file in the data
//! directory, mirroring the key-per-blob layout the data model was
//! designed around.

pub mod connection;
pub mod forum_repository;
pub mod health_repository;
pub mod high_score_repository;
pub mod milestone_repository;
pub mod settings_repository;

pub use connection::JsonConnection;
pub use forum_repository::ForumRepository;
pub use health_repository::HealthRepository;
pub use high_score_repository::HighScoreRepository;
pub use milestone_repository::MilestoneRepository;
pub use settings_repository::SettingsRepository;
