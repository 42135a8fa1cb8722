//! # Growth Journal Backend
//!
//! Contains all non-UI logic for the growth journal application.
//!
//! The crate follows a layered architecture:
//! ```text
//! UI Layer (not part of this crate)
//!     ↓
//! Domain Layer (stores, derived summaries, view projections)
//!     ↓
//! Storage Layer (JSON key-value persistence)
//! ```
//!
//! The UI owns an [`AppState`] of services and calls them on user events.
//! Stores persist every mutation; projections are pure and can be re-run
//! on any snapshot of store data.

pub mod domain;
pub mod storage;

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::domain::{
    ExportService, ForumService, HealthService, HighScoreService, IdGenerator, MilestoneService,
    RecordTableService, SettingsService, ThreadViewService, TimelineService,
};
use crate::storage::json::{
    ForumRepository, HealthRepository, HighScoreRepository, JsonConnection, MilestoneRepository,
    SettingsRepository,
};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub health_service: HealthService<HealthRepository>,
    pub milestone_service: MilestoneService<MilestoneRepository>,
    pub forum_service: ForumService<ForumRepository>,
    pub settings_service: SettingsService<SettingsRepository>,
    pub high_score_service: HighScoreService<HighScoreRepository>,
    pub record_table_service: RecordTableService,
    pub timeline_service: TimelineService,
    pub thread_view_service: ThreadViewService,
    pub export_service: ExportService<
        HealthRepository,
        MilestoneRepository,
        ForumRepository,
        SettingsRepository,
        HighScoreRepository,
    >,
}

/// Initialize the backend with all required services.
///
/// With no data directory given, data lives under
/// `~/Documents/Growth Journal`.
pub fn initialize_backend(data_dir: Option<PathBuf>) -> Result<AppState> {
    info!("Setting up storage");
    let connection = match data_dir {
        Some(dir) => JsonConnection::new(dir),
        None => JsonConnection::new_default()?,
    };

    info!("Setting up domain model");
    let ids = IdGenerator::new();
    let health_service = HealthService::new(HealthRepository::new(connection.clone()));
    let milestone_service =
        MilestoneService::new(MilestoneRepository::new(connection.clone()), ids.clone());
    let forum_service = ForumService::new(ForumRepository::new(connection.clone()), ids);
    let settings_service = SettingsService::new(SettingsRepository::new(connection.clone()));
    let high_score_service = HighScoreService::new(HighScoreRepository::new(connection));

    forum_service.ensure_seeded()?;

    let export_service = ExportService::new(
        health_service.clone(),
        milestone_service.clone(),
        forum_service.clone(),
        settings_service.clone(),
        high_score_service.clone(),
    );

    info!("Setting up application state");
    Ok(AppState {
        health_service,
        milestone_service,
        forum_service,
        settings_service,
        high_score_service,
        record_table_service: RecordTableService::new(),
        timeline_service: TimelineService::new(),
        thread_view_service: ThreadViewService::new(),
        export_service,
    })
}

/// Initialize tracing with an env-filter subscriber. Safe to call more
/// than once; later calls are ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}
