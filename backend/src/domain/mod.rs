//! # Domain Module
//!
//! Business logic for the growth journal. Services come in two kinds:
//!
//! - **Stores** own a collection, mutate it through commands, and persist
//!   the whole collection after every mutation (`HealthService`,
//!   `MilestoneService`, `ForumService`, `SettingsService`,
//!   `HighScoreService`).
//! - **Projections** are pure formatting layers that turn store data into
//!   view models and never touch storage (`RecordTableService`,
//!   `TimelineService`, `ThreadViewService`).
//!
//! `ExportService` spans both: it reads every store for export and
//! overwrites stores wholesale on import.

pub mod commands;
pub mod confirmation;
pub mod dates;
pub mod export_service;
pub mod forum_service;
pub mod health_service;
pub mod high_score_service;
pub mod ids;
pub mod milestone_service;
pub mod record_table;
pub mod settings_service;
pub mod summary;
pub mod thread_view;
pub mod timeline;

pub use commands::*;
pub use confirmation::*;
pub use export_service::{ExportService, ImportError};
pub use forum_service::ForumService;
pub use health_service::HealthService;
pub use high_score_service::HighScoreService;
pub use ids::IdGenerator;
pub use milestone_service::MilestoneService;
pub use record_table::RecordTableService;
pub use settings_service::SettingsService;
pub use thread_view::ThreadViewService;
pub use timeline::TimelineService;
