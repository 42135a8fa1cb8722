//! # Export Service
//!
//! Full-data JSON export/import, per-metric CSV export, and the clear-all
//! wipe. Import is shape-validated and atomic: every present section is
//! checked and decoded before any store is overwritten, so a rejected
//! document leaves all data exactly as it was.

use anyhow::Result;
use shared::{
    CsvExportResponse, ExportDataResponse, ExportDocument, HealthData, HighScores, ImportSummary,
    MetricType, Milestone, Settings,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::confirmation::ClearAllConfirmation;
use crate::domain::dates;
use crate::domain::forum_service::ForumService;
use crate::domain::health_service::HealthService;
use crate::domain::high_score_service::HighScoreService;
use crate::domain::milestone_service::MilestoneService;
use crate::domain::settings_service::SettingsService;
use crate::storage::traits::{
    ForumStorage, HealthStorage, HighScoreStorage, MilestoneStorage, SettingsStorage,
};

const EXPORT_FILENAME: &str = "growth-journal-data.json";

/// Why an import document was rejected.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("import file is not valid JSON: {0}")]
    Malformed(serde_json::Error),
    #[error("import file must contain a top-level JSON object")]
    NotAnObject,
    #[error("section '{section}' must be {expected}")]
    WrongShape {
        section: &'static str,
        expected: &'static str,
    },
    #[error("section '{section}' could not be read: {source}")]
    SectionDecode {
        section: &'static str,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Clone)]
pub struct ExportService<H, M, F, S, G>
where
    H: HealthStorage + Clone,
    M: MilestoneStorage + Clone,
    F: ForumStorage + Clone,
    S: SettingsStorage + Clone,
    G: HighScoreStorage + Clone,
{
    health_service: HealthService<H>,
    milestone_service: MilestoneService<M>,
    forum_service: ForumService<F>,
    settings_service: SettingsService<S>,
    high_score_service: HighScoreService<G>,
}

impl<H, M, F, S, G> ExportService<H, M, F, S, G>
where
    H: HealthStorage + Clone,
    M: MilestoneStorage + Clone,
    F: ForumStorage + Clone,
    S: SettingsStorage + Clone,
    G: HighScoreStorage + Clone,
{
    pub fn new(
        health_service: HealthService<H>,
        milestone_service: MilestoneService<M>,
        forum_service: ForumService<F>,
        settings_service: SettingsService<S>,
        high_score_service: HighScoreService<G>,
    ) -> Self {
        Self {
            health_service,
            milestone_service,
            forum_service,
            settings_service,
            high_score_service,
        }
    }

    /// Bundle every store into one pretty-printed JSON document.
    pub fn export_all(&self) -> Result<ExportDataResponse> {
        info!("Exporting all data");
        let document = ExportDocument {
            health_data: Some(self.health_service.health_data()?),
            milestones: Some(self.milestone_service.milestones()?),
            settings: Some(self.settings_service.get_settings()?),
            high_scores: Some(self.high_score_service.all_high_scores()?),
        };

        Ok(ExportDataResponse {
            json_content: serde_json::to_string_pretty(&document)?,
            filename: EXPORT_FILENAME.to_string(),
        })
    }

    /// One metric's records as CSV with a `Date,Time,Value,Notes` header,
    /// newest record first.
    pub fn export_metric_csv(&self, metric: MetricType) -> Result<CsvExportResponse> {
        let records = self
            .health_service
            .list_records(metric, Default::default())?;
        info!("Exporting {} {} records to CSV", records.len(), metric);

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["Date", "Time", "Value", "Notes"])?;
        for record in &records {
            let (date, time) = dates::to_date_time_parts(record.timestamp);
            writer.write_record([
                date.as_str(),
                time.as_str(),
                &record.value.to_string(),
                record.notes.as_deref().unwrap_or(""),
            ])?;
        }

        let csv_content = String::from_utf8(writer.into_inner()?)?;
        Ok(CsvExportResponse {
            csv_content,
            filename: format!("{}_data.csv", metric),
            record_count: records.len(),
        })
    }

    /// Validate and apply an exported document. Any present section
    /// overwrites its store wholesale; absent sections are untouched.
    pub fn import(&self, json_text: &str) -> Result<ImportSummary, ImportError> {
        let value: serde_json::Value =
            serde_json::from_str(json_text).map_err(ImportError::Malformed)?;
        let object = value.as_object().ok_or(ImportError::NotAnObject)?;

        check_shape(object, "healthData", "an object", serde_json::Value::is_object)?;
        check_shape(object, "milestones", "an array", serde_json::Value::is_array)?;
        check_shape(object, "settings", "an object", serde_json::Value::is_object)?;
        check_shape(object, "highScores", "an object", serde_json::Value::is_object)?;

        // Decode everything before touching any store.
        let health: Option<HealthData> = decode_section(object, "healthData")?;
        let milestones: Option<Vec<Milestone>> = decode_section(object, "milestones")?;
        let settings: Option<Settings> = decode_section(object, "settings")?;
        let high_scores: Option<HighScores> = decode_section(object, "highScores")?;

        let mut summary = ImportSummary::default();
        if let Some(health) = health {
            self.health_service.replace_all(health)?;
            summary.health_data_applied = true;
        }
        if let Some(milestones) = milestones {
            self.milestone_service.replace_all(milestones)?;
            summary.milestones_applied = true;
        }
        if let Some(settings) = settings {
            self.settings_service.update_settings(settings)?;
            summary.settings_applied = true;
        }
        if let Some(high_scores) = high_scores {
            self.high_score_service.replace_all(high_scores)?;
            summary.high_scores_applied = true;
        }

        info!("Import applied");
        summary.success_message = "Data imported successfully!".to_string();
        Ok(summary)
    }

    /// First step of the clear-all wipe: describe what would be destroyed.
    pub fn request_clear_all(&self) -> ClearAllConfirmation {
        ClearAllConfirmation::new()
    }

    /// Second step: remove every persisted key. Subsequent loads yield the
    /// empty defaults.
    pub fn confirm_clear_all(&self, _confirmation: ClearAllConfirmation) -> Result<String> {
        warn!("Clearing all stored data");
        self.health_service.clear()?;
        self.milestone_service.clear()?;
        self.forum_service.clear()?;
        self.settings_service.clear()?;
        self.high_score_service.clear()?;
        Ok("All data cleared successfully!".to_string())
    }
}

fn check_shape(
    object: &serde_json::Map<String, serde_json::Value>,
    section: &'static str,
    expected: &'static str,
    check: impl Fn(&serde_json::Value) -> bool,
) -> Result<(), ImportError> {
    match object.get(section) {
        Some(value) if !check(value) => Err(ImportError::WrongShape { section, expected }),
        _ => Ok(()),
    }
}

fn decode_section<T: serde::de::DeserializeOwned>(
    object: &serde_json::Map<String, serde_json::Value>,
    section: &'static str,
) -> Result<Option<T>, ImportError> {
    object
        .get(section)
        .map(|value| {
            serde_json::from_value(value.clone())
                .map_err(|source| ImportError::SectionDecode { section, source })
        })
        .transpose()
}
