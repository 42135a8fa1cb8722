use anyhow::Result;
use shared::HealthData;

use crate::storage::json::connection::JsonConnection;
use crate::storage::traits::HealthStorage;

const HEALTH_DATA_KEY: &str = "healthData";

/// JSON-backed repository for health records, stored as one document
/// grouped by metric under the `healthData` key.
#[derive(Clone)]
pub struct HealthRepository {
    connection: JsonConnection,
}

impl HealthRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl HealthStorage for HealthRepository {
    fn load_health_data(&self) -> Result<HealthData> {
        Ok(self
            .connection
            .load_key(HEALTH_DATA_KEY)?
            .unwrap_or_default())
    }

    fn save_health_data(&self, data: &HealthData) -> Result<()> {
        self.connection.save_key(HEALTH_DATA_KEY, data)
    }

    fn clear_health_data(&self) -> Result<()> {
        self.connection.delete_key(HEALTH_DATA_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MetricRecord;
    use tempfile::TempDir;

    #[test]
    fn empty_store_loads_as_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let repository = HealthRepository::new(JsonConnection::new(temp_dir.path()));

        let data = repository.load_health_data()?;
        assert!(data.weight.is_empty());
        assert!(data.height.is_empty());
        assert!(data.temperature.is_empty());
        Ok(())
    }

    #[test]
    fn saved_records_survive_a_reload() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let repository = HealthRepository::new(JsonConnection::new(temp_dir.path()));

        let mut data = HealthData::default();
        data.weight.push(MetricRecord {
            value: 12.4,
            timestamp: 1_700_000_000_000,
            notes: None,
        });
        repository.save_health_data(&data)?;

        let reloaded = repository.load_health_data()?;
        assert_eq!(reloaded, data);
        Ok(())
    }

    #[test]
    fn corrupted_file_loads_as_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(temp_dir.path().join("healthData.json"), "[1, 2,")?;
        let repository = HealthRepository::new(JsonConnection::new(temp_dir.path()));

        let data = repository.load_health_data()?;
        assert_eq!(data, HealthData::default());
        Ok(())
    }
}
