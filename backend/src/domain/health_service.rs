//! # Health Service
//!
//! Store over the per-metric measurement lists. Every mutation loads the
//! current state, applies the change, restores the descending-by-timestamp
//! order, and persists the whole collection before returning.

use anyhow::Result;
use shared::{HealthData, MetricRecord, MetricType};
use tracing::{info, warn};

use crate::domain::commands::{AddRecordCommand, AddRecordResponse, RecordFilter, RecordPatch};
use crate::domain::confirmation::DeleteRecordConfirmation;
use crate::domain::dates;
use crate::storage::traits::HealthStorage;

#[derive(Clone)]
pub struct HealthService<S: HealthStorage + Clone> {
    repository: S,
}

impl<S: HealthStorage + Clone> HealthService<S> {
    pub fn new(repository: S) -> Self {
        Self { repository }
    }

    /// Current state of every metric's record list.
    pub fn health_data(&self) -> Result<HealthData> {
        self.repository.load_health_data()
    }

    /// Overwrite all health records, e.g. when applying an import.
    pub fn replace_all(&self, mut data: HealthData) -> Result<()> {
        for metric in MetricType::ALL {
            sort_descending(data.records_mut(metric));
        }
        self.repository.save_health_data(&data)
    }

    /// Add one measurement. Duplicate timestamps are allowed; the list is
    /// re-sorted so the newest record stays first.
    pub fn add_record(&self, command: AddRecordCommand) -> Result<AddRecordResponse> {
        info!(
            "Adding {} record: {} {}",
            command.metric,
            command.value,
            command.metric.unit()
        );

        let record = MetricRecord {
            value: command.value,
            timestamp: command.timestamp,
            notes: command.notes,
        };

        let mut data = self.repository.load_health_data()?;
        let records = data.records_mut(command.metric);
        records.push(record.clone());
        sort_descending(records);
        self.repository.save_health_data(&data)?;

        Ok(AddRecordResponse {
            success_message: format!("{} record added successfully!", command.metric),
            record,
        })
    }

    /// Patch the first record with the given timestamp. An unknown
    /// timestamp is a no-op.
    pub fn update_record(
        &self,
        metric: MetricType,
        timestamp: i64,
        patch: RecordPatch,
    ) -> Result<()> {
        let mut data = self.repository.load_health_data()?;
        let records = data.records_mut(metric);

        let Some(record) = records.iter_mut().find(|r| r.timestamp == timestamp) else {
            warn!(
                "No {} record found with timestamp {}; nothing updated",
                metric, timestamp
            );
            return Ok(());
        };

        if let Some(value) = patch.value {
            record.value = value;
        }
        if let Some(new_timestamp) = patch.timestamp {
            record.timestamp = new_timestamp;
        }
        if let Some(notes) = patch.notes {
            record.notes = if notes.is_empty() { None } else { Some(notes) };
        }

        sort_descending(records);
        self.repository.save_health_data(&data)?;
        info!("Updated {} record (timestamp {})", metric, timestamp);
        Ok(())
    }

    /// First step of deletion: report how many records the key matches.
    pub fn request_delete_record(
        &self,
        metric: MetricType,
        timestamp: i64,
    ) -> Result<DeleteRecordConfirmation> {
        let data = self.repository.load_health_data()?;
        let matches = data
            .records(metric)
            .iter()
            .filter(|r| r.timestamp == timestamp)
            .count();
        Ok(DeleteRecordConfirmation::new(metric, timestamp, matches))
    }

    /// Second step of deletion: remove every record matching the confirmed
    /// key. Returns the number of records removed.
    pub fn confirm_delete_record(&self, confirmation: DeleteRecordConfirmation) -> Result<usize> {
        let mut data = self.repository.load_health_data()?;
        let records = data.records_mut(confirmation.metric());

        let before = records.len();
        records.retain(|r| r.timestamp != confirmation.timestamp());
        let deleted = before - records.len();

        self.repository.save_health_data(&data)?;
        info!(
            "Deleted {} {} record(s) with timestamp {}",
            deleted,
            confirmation.metric(),
            confirmation.timestamp()
        );
        Ok(deleted)
    }

    /// Derived view: records for one metric, newest first, optionally
    /// limited to a recent window. Never mutates the store.
    pub fn list_records(&self, metric: MetricType, filter: RecordFilter) -> Result<Vec<MetricRecord>> {
        let data = self.repository.load_health_data()?;
        let mut records = data.records(metric).clone();
        sort_descending(&mut records);

        if let Some(days) = filter.within_days {
            let cutoff = dates::now_ms() - i64::from(days) * 86_400_000;
            records.retain(|r| r.timestamp >= cutoff);
        }

        Ok(records)
    }

    /// Remove every stored health record.
    pub fn clear(&self) -> Result<()> {
        self.repository.clear_health_data()
    }

    /// Most recent record for a metric.
    pub fn latest_record(&self, metric: MetricType) -> Result<Option<MetricRecord>> {
        let data = self.repository.load_health_data()?;
        let mut records = data.records(metric).clone();
        sort_descending(&mut records);
        Ok(records.into_iter().next())
    }
}

fn sort_descending(records: &mut [MetricRecord]) {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::{HealthRepository, JsonConnection};
    use tempfile::TempDir;

    fn test_service() -> (HealthService<HealthRepository>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let repository = HealthRepository::new(JsonConnection::new(temp_dir.path()));
        (HealthService::new(repository), temp_dir)
    }

    fn add(service: &HealthService<HealthRepository>, value: f64, timestamp: i64) {
        service
            .add_record(AddRecordCommand {
                metric: MetricType::Weight,
                value,
                timestamp,
                notes: None,
            })
            .unwrap();
    }

    #[test]
    fn records_stay_sorted_newest_first() {
        let (service, _dir) = test_service();
        add(&service, 10.0, 2_000);
        add(&service, 11.0, 1_000);
        add(&service, 12.0, 3_000);

        let records = service
            .list_records(MetricType::Weight, RecordFilter::default())
            .unwrap();
        let timestamps: Vec<i64> = records.iter().map(|r| r.timestamp).collect();
        assert_eq!(timestamps, vec![3_000, 2_000, 1_000]);
    }

    #[test]
    fn update_patches_exactly_one_record() {
        let (service, _dir) = test_service();
        add(&service, 10.0, 1_000);
        add(&service, 11.0, 2_000);

        service
            .update_record(
                MetricType::Weight,
                1_000,
                RecordPatch {
                    value: Some(10.5),
                    ..Default::default()
                },
            )
            .unwrap();

        let records = service
            .list_records(MetricType::Weight, RecordFilter::default())
            .unwrap();
        assert_eq!(records[0].value, 11.0);
        assert_eq!(records[1].value, 10.5);
        assert_eq!(records[1].timestamp, 1_000);
    }

    #[test]
    fn update_with_unknown_timestamp_is_a_no_op() {
        let (service, _dir) = test_service();
        add(&service, 10.0, 1_000);

        service
            .update_record(
                MetricType::Weight,
                9_999,
                RecordPatch {
                    value: Some(99.0),
                    ..Default::default()
                },
            )
            .unwrap();

        let records = service
            .list_records(MetricType::Weight, RecordFilter::default())
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value, 10.0);
    }

    #[test]
    fn delete_removes_every_match() {
        let (service, _dir) = test_service();
        add(&service, 10.0, 1_000);
        add(&service, 10.5, 1_000);
        add(&service, 11.0, 2_000);

        let confirmation = service
            .request_delete_record(MetricType::Weight, 1_000)
            .unwrap();
        assert_eq!(confirmation.matches(), 2);

        let deleted = service.confirm_delete_record(confirmation).unwrap();
        assert_eq!(deleted, 2);

        let records = service
            .list_records(MetricType::Weight, RecordFilter::default())
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].timestamp, 2_000);
    }

    #[test]
    fn nothing_is_deleted_without_the_confirm_step() {
        let (service, _dir) = test_service();
        add(&service, 10.0, 1_000);

        let _confirmation = service
            .request_delete_record(MetricType::Weight, 1_000)
            .unwrap();

        let records = service
            .list_records(MetricType::Weight, RecordFilter::default())
            .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn metrics_do_not_share_records() {
        let (service, _dir) = test_service();
        add(&service, 10.0, 1_000);

        let heights = service
            .list_records(MetricType::Height, RecordFilter::default())
            .unwrap();
        assert!(heights.is_empty());
    }
}
