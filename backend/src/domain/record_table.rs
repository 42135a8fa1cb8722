//! # Record Table Service
//!
//! Pure projection of metric records into display rows, chart series, and
//! trend indicators. Deterministic and idempotent: the same records always
//! produce the same view models, and nothing here touches storage. Each row
//! carries the record's timestamp key so the UI can wire edit and delete
//! actions back to the store.

use shared::{ChartSeries, FormattedRecord, MetricRecord, MetricType, Trend, TrendIndicator};

use crate::domain::dates;

#[derive(Clone)]
pub struct RecordTableService;

impl RecordTableService {
    pub fn new() -> Self {
        Self
    }

    /// Display rows for a record list, in the order given (newest first
    /// when the caller passes store order).
    pub fn format_records(
        &self,
        metric: MetricType,
        records: &[MetricRecord],
    ) -> Vec<FormattedRecord> {
        records
            .iter()
            .map(|record| FormattedRecord {
                timestamp: record.timestamp,
                formatted_value: format_value(metric, record.value),
                formatted_date: dates::format_date_time(record.timestamp),
                notes: record.notes.clone(),
            })
            .collect()
    }

    /// Chart series for a record list. Points run oldest to newest so the
    /// line reads left to right, regardless of the input order.
    pub fn chart_series(&self, metric: MetricType, records: &[MetricRecord]) -> ChartSeries {
        let mut chronological: Vec<&MetricRecord> = records.iter().collect();
        chronological.sort_by_key(|r| r.timestamp);

        ChartSeries {
            metric,
            labels: chronological
                .iter()
                .map(|r| dates::format_date(r.timestamp))
                .collect(),
            points: chronological.iter().map(|r| r.value).collect(),
            color: metric_color(metric).to_string(),
        }
    }

    /// Trend formatted for the summary strip, e.g. "0.4 kg" going up.
    pub fn trend_indicator(&self, metric: MetricType, trend: &Trend) -> TrendIndicator {
        TrendIndicator {
            formatted_delta: format!("{:.1} {}", trend.delta.abs(), metric.unit()),
            direction: trend.direction,
        }
    }
}

impl Default for RecordTableService {
    fn default() -> Self {
        Self::new()
    }
}

fn format_value(metric: MetricType, value: f64) -> String {
    format!("{:.1} {}", value, metric.unit())
}

fn metric_color(metric: MetricType) -> &'static str {
    match metric {
        MetricType::Weight => "#4CAF50",
        MetricType::Height => "#2196F3",
        MetricType::Temperature => "#FFC107",
    }
}
