use anyhow::Result;
use shared::Settings;

use crate::storage::json::connection::JsonConnection;
use crate::storage::traits::SettingsStorage;

const SETTINGS_KEY: &str = "appSettings";

/// JSON-backed repository for the settings singleton, stored under the
/// `appSettings` key.
#[derive(Clone)]
pub struct SettingsRepository {
    connection: JsonConnection,
}

impl SettingsRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl SettingsStorage for SettingsRepository {
    fn load_settings(&self) -> Result<Settings> {
        Ok(self.connection.load_key(SETTINGS_KEY)?.unwrap_or_default())
    }

    fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.connection.save_key(SETTINGS_KEY, settings)
    }

    fn clear_settings(&self) -> Result<()> {
        self.connection.delete_key(SETTINGS_KEY)
    }
}
