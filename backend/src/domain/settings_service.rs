//! # Settings Service
//!
//! Store over the single settings record. Loads fall back to defaults;
//! updates overwrite the whole record.

use anyhow::Result;
use shared::Settings;
use tracing::info;

use crate::storage::traits::SettingsStorage;

#[derive(Clone)]
pub struct SettingsService<S: SettingsStorage + Clone> {
    repository: S,
}

impl<S: SettingsStorage + Clone> SettingsService<S> {
    pub fn new(repository: S) -> Self {
        Self { repository }
    }

    pub fn get_settings(&self) -> Result<Settings> {
        self.repository.load_settings()
    }

    pub fn update_settings(&self, settings: Settings) -> Result<()> {
        info!("Updating settings");
        self.repository.save_settings(&settings)
    }

    /// Remove the stored settings, reverting loads to the defaults.
    pub fn clear(&self) -> Result<()> {
        self.repository.clear_settings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::{JsonConnection, SettingsRepository};
    use shared::FontSize;
    use tempfile::TempDir;

    #[test]
    fn fresh_store_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service =
            SettingsService::new(SettingsRepository::new(JsonConnection::new(temp_dir.path())));

        let settings = service.get_settings().unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!settings.dark_mode);
        assert_eq!(settings.font_size, FontSize::Medium);
    }

    #[test]
    fn update_overwrites_the_whole_record() {
        let temp_dir = TempDir::new().unwrap();
        let service =
            SettingsService::new(SettingsRepository::new(JsonConnection::new(temp_dir.path())));

        service
            .update_settings(Settings {
                dark_mode: true,
                font_size: FontSize::Large,
                health_reminders: false,
                milestone_alerts: true,
            })
            .unwrap();

        let settings = service.get_settings().unwrap();
        assert!(settings.dark_mode);
        assert_eq!(settings.font_size, FontSize::Large);
        assert!(!settings.health_reminders);
    }
}
