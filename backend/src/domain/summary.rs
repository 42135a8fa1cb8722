//! Derived summaries computed from store data. Pure functions: same input,
//! same output, no storage access.

use shared::{
    BmiCategory, BmiReading, DevelopmentCard, DevelopmentSummary, MetricRecord, Milestone,
    MilestoneKind, TemperatureStatus, Trend, TrendDirection,
};

/// Nominal milestone count per area for the progress bars.
const MILESTONES_PER_AREA: f64 = 20.0;

/// Latest-minus-previous change for a metric. Records are expected newest
/// first. `None` with fewer than two records.
pub fn trend(records: &[MetricRecord]) -> Option<Trend> {
    let latest = records.first()?;
    let previous = records.get(1)?;
    let delta = latest.value - previous.value;

    let direction = if delta > 0.0 {
        TrendDirection::Up
    } else if delta < 0.0 {
        TrendDirection::Down
    } else {
        TrendDirection::Flat
    };

    Some(Trend { delta, direction })
}

/// BMI from the latest weight (kg) and latest height (cm). The two records
/// need not share a timestamp. `None` when either list is empty or the
/// height is zero.
pub fn bmi(weight_records: &[MetricRecord], height_records: &[MetricRecord]) -> Option<BmiReading> {
    let weight = weight_records.first()?.value;
    let height_m = height_records.first()?.value / 100.0;
    if height_m <= 0.0 {
        return None;
    }

    let bmi = weight / (height_m * height_m);
    let category = if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };

    Some(BmiReading { bmi, category })
}

/// Classify a temperature in °C.
pub fn temperature_status(celsius: f64) -> TemperatureStatus {
    if celsius > 37.5 {
        TemperatureStatus::Danger
    } else if celsius > 37.0 {
        TemperatureStatus::Warning
    } else {
        TemperatureStatus::Normal
    }
}

/// Per-kind milestone counts with progress toward the nominal per-area
/// total, capped at 100 percent.
pub fn development_progress(milestones: &[Milestone]) -> DevelopmentSummary {
    let cards = MilestoneKind::ALL
        .iter()
        .map(|&kind| {
            let count = milestones.iter().filter(|m| m.kind == kind).count();
            let percent = (count as f64 / MILESTONES_PER_AREA * 100.0).min(100.0);
            DevelopmentCard {
                kind,
                count,
                percent,
            }
        })
        .collect();
    DevelopmentSummary { cards }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(value: f64, timestamp: i64) -> MetricRecord {
        MetricRecord {
            value,
            timestamp,
            notes: None,
        }
    }

    fn milestone(kind: MilestoneKind) -> Milestone {
        Milestone {
            id: 1,
            kind,
            title: String::new(),
            date: "2025-01-01".to_string(),
            description: String::new(),
            photo: None,
            timestamp: 0,
        }
    }

    #[test]
    fn trend_is_latest_minus_previous() {
        let records = vec![record(12.4, 2_000), record(12.0, 1_000)];
        let trend = trend(&records).unwrap();
        assert!((trend.delta - 0.4).abs() < 1e-9);
        assert_eq!(trend.direction, TrendDirection::Up);
    }

    #[test]
    fn trend_needs_two_records() {
        assert!(trend(&[]).is_none());
        assert!(trend(&[record(12.0, 1_000)]).is_none());
    }

    #[test]
    fn bmi_uses_latest_weight_and_height() {
        let weights = vec![record(70.0, 2_000)];
        let heights = vec![record(175.0, 1_000)];
        let reading = bmi(&weights, &heights).unwrap();
        assert!((reading.bmi - 22.857).abs() < 0.001);
        assert_eq!(reading.category, BmiCategory::NormalWeight);
    }

    #[test]
    fn bmi_categories_follow_the_thresholds() {
        let heights = vec![record(100.0, 0)];
        let category = |weight: f64| bmi(&[record(weight, 0)], &heights).unwrap().category;

        assert_eq!(category(18.0), BmiCategory::Underweight);
        assert_eq!(category(18.5), BmiCategory::NormalWeight);
        assert_eq!(category(25.0), BmiCategory::Overweight);
        assert_eq!(category(30.0), BmiCategory::Obese);
    }

    #[test]
    fn bmi_is_none_without_both_metrics() {
        assert!(bmi(&[record(70.0, 0)], &[]).is_none());
        assert!(bmi(&[], &[record(175.0, 0)]).is_none());
    }

    #[test]
    fn temperature_thresholds() {
        assert_eq!(temperature_status(38.0), TemperatureStatus::Danger);
        assert_eq!(temperature_status(37.2), TemperatureStatus::Warning);
        assert_eq!(temperature_status(37.0), TemperatureStatus::Normal);
        assert_eq!(temperature_status(36.5), TemperatureStatus::Normal);
    }

    #[test]
    fn development_progress_counts_per_kind_and_caps_at_100() {
        let mut milestones: Vec<Milestone> =
            (0..25).map(|_| milestone(MilestoneKind::Physical)).collect();
        milestones.push(milestone(MilestoneKind::Language));

        let summary = development_progress(&milestones);
        let physical = summary
            .cards
            .iter()
            .find(|c| c.kind == MilestoneKind::Physical)
            .unwrap();
        assert_eq!(physical.count, 25);
        assert_eq!(physical.percent, 100.0);

        let language = summary
            .cards
            .iter()
            .find(|c| c.kind == MilestoneKind::Language)
            .unwrap();
        assert_eq!(language.count, 1);
        assert!((language.percent - 5.0).abs() < 1e-9);

        let social = summary
            .cards
            .iter()
            .find(|c| c.kind == MilestoneKind::Social)
            .unwrap();
        assert_eq!(social.count, 0);
        assert_eq!(social.percent, 0.0);
    }
}
