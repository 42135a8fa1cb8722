use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the tracked vital signs. Each metric keeps its own record list
/// and its own unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricType {
    Weight,
    Height,
    Temperature,
}

impl MetricType {
    pub const ALL: [MetricType; 3] = [
        MetricType::Weight,
        MetricType::Height,
        MetricType::Temperature,
    ];

    /// Display unit for this metric.
    pub fn unit(&self) -> &'static str {
        match self {
            MetricType::Weight => "kg",
            MetricType::Height => "cm",
            MetricType::Temperature => "°C",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricType::Weight => write!(f, "Weight"),
            MetricType::Height => write!(f, "Height"),
            MetricType::Temperature => write!(f, "Temperature"),
        }
    }
}

/// A single measurement. Records are keyed by their timestamp within a
/// metric's list; the list is kept sorted descending by timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Measured value in the metric's unit (kg, cm, °C)
    pub value: f64,
    /// Measurement time as epoch milliseconds
    pub timestamp: i64,
    /// Free-form note entered with the measurement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// All health records, grouped by metric. This is the exact shape persisted
/// under the `healthData` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthData {
    #[serde(rename = "Weight", default)]
    pub weight: Vec<MetricRecord>,
    #[serde(rename = "Height", default)]
    pub height: Vec<MetricRecord>,
    #[serde(rename = "Temperature", default)]
    pub temperature: Vec<MetricRecord>,
}

impl HealthData {
    pub fn records(&self, metric: MetricType) -> &Vec<MetricRecord> {
        match metric {
            MetricType::Weight => &self.weight,
            MetricType::Height => &self.height,
            MetricType::Temperature => &self.temperature,
        }
    }

    pub fn records_mut(&mut self, metric: MetricType) -> &mut Vec<MetricRecord> {
        match metric {
            MetricType::Weight => &mut self.weight,
            MetricType::Height => &mut self.height,
            MetricType::Temperature => &mut self.temperature,
        }
    }
}

/// Developmental area a milestone belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneKind {
    Physical,
    Cognitive,
    Social,
    Language,
}

impl MilestoneKind {
    pub const ALL: [MilestoneKind; 4] = [
        MilestoneKind::Physical,
        MilestoneKind::Cognitive,
        MilestoneKind::Social,
        MilestoneKind::Language,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MilestoneKind::Physical => "Physical",
            MilestoneKind::Cognitive => "Cognitive",
            MilestoneKind::Social => "Social",
            MilestoneKind::Language => "Language",
        }
    }
}

impl fmt::Display for MilestoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MilestoneKind::Physical => write!(f, "physical"),
            MilestoneKind::Cognitive => write!(f, "cognitive"),
            MilestoneKind::Social => write!(f, "social"),
            MilestoneKind::Language => write!(f, "language"),
        }
    }
}

/// A dated developmental achievement. `id` is the uniqueness key for edit
/// and delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: MilestoneKind,
    pub title: String,
    /// Achievement date as YYYY-MM-DD
    pub date: String,
    pub description: String,
    /// Optional photo reference (URL or path)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Achievement date as epoch milliseconds, derived from `date`
    pub timestamp: i64,
}

/// A discussion post. Posts exclusively own their comments, and comments
/// exclusively own their replies; there are no cross-references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub timestamp: i64,
    pub likes: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub timestamp: i64,
    pub likes: u32,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub timestamp: i64,
    pub likes: u32,
}

/// Persisted shape of the whole forum, under the `forumData` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForumData {
    #[serde(default)]
    pub posts: Vec<ForumPost>,
}

/// UI text scale options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

/// Application settings. A single flat record, loaded at startup and
/// overwritten wholesale on any change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "darkMode")]
    pub dark_mode: bool,
    #[serde(rename = "fontSize")]
    pub font_size: FontSize,
    #[serde(rename = "healthReminders")]
    pub health_reminders: bool,
    #[serde(rename = "milestoneAlerts")]
    pub milestone_alerts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_size: FontSize::Medium,
            health_reminders: true,
            milestone_alerts: true,
        }
    }
}

/// Games that keep a high-score list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Counting,
    Color,
    Memory,
    Shapes,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [
        GameKind::Counting,
        GameKind::Color,
        GameKind::Memory,
        GameKind::Shapes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GameKind::Counting => "counting",
            GameKind::Color => "color",
            GameKind::Memory => "memory",
            GameKind::Shapes => "shapes",
        }
    }

    /// Storage key for this game's leaderboard, e.g. `countingHighScores`.
    pub fn storage_key(&self) -> String {
        format!("{}HighScores", self.name())
    }
}

/// One leaderboard entry. Each game keeps at most three, ordered by score
/// descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
    pub date: String,
}

/// High-score lists for every game, as bundled in the export document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HighScores {
    #[serde(default)]
    pub counting: Vec<HighScoreEntry>,
    #[serde(default)]
    pub color: Vec<HighScoreEntry>,
    #[serde(default)]
    pub memory: Vec<HighScoreEntry>,
    #[serde(default)]
    pub shapes: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn scores(&self, game: GameKind) -> &Vec<HighScoreEntry> {
        match game {
            GameKind::Counting => &self.counting,
            GameKind::Color => &self.color,
            GameKind::Memory => &self.memory,
            GameKind::Shapes => &self.shapes,
        }
    }

    pub fn scores_mut(&mut self, game: GameKind) -> &mut Vec<HighScoreEntry> {
        match game {
            GameKind::Counting => &mut self.counting,
            GameKind::Color => &mut self.color,
            GameKind::Memory => &mut self.memory,
            GameKind::Shapes => &mut self.shapes,
        }
    }
}

/// Direction of the latest change in a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Latest-minus-previous change for a metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub delta: f64,
    pub direction: TrendDirection,
}

/// BMI classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// BMI computed from the latest weight and height records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Classification of the latest temperature reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureStatus {
    Normal,
    Warning,
    Danger,
}

/// Per-kind milestone tally for the development summary cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentCard {
    pub kind: MilestoneKind,
    pub count: usize,
    /// Progress toward a nominal 20 milestones per area, capped at 100.
    pub percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentSummary {
    pub cards: Vec<DevelopmentCard>,
}

/// A metric record formatted for list display. `timestamp` is the raw key
/// the edit/delete hooks pass back into the mutation operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedRecord {
    pub timestamp: i64,
    pub formatted_value: String,
    pub formatted_date: String,
    pub notes: Option<String>,
}

/// Data series for a metric's line chart, oldest point first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub metric: MetricType,
    pub labels: Vec<String>,
    pub points: Vec<f64>,
    /// Line color as a CSS hex string
    pub color: String,
}

/// Trend formatted for the summary strip, e.g. "0.4 kg" with an arrow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendIndicator {
    pub formatted_delta: String,
    pub direction: TrendDirection,
}

/// A milestone formatted for the timeline. `id` is the key the edit/delete
/// hooks pass back into the mutation operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: i64,
    pub kind: MilestoneKind,
    pub kind_label: String,
    pub formatted_date: String,
    pub title: String,
    pub description: String,
    pub photo: Option<String>,
}

/// A forum post projected for display, with relative ages resolved against
/// the caller-supplied clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostView {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub content: String,
    pub relative_age: String,
    pub likes: u32,
    pub comment_count: usize,
    pub comments: Vec<CommentView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentView {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub relative_age: String,
    pub likes: u32,
    pub replies: Vec<ReplyView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyView {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub relative_age: String,
    pub likes: u32,
}

/// The single document produced by export and accepted by import. Partial
/// documents (any subset of the four sections) are valid for import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    #[serde(rename = "healthData", default, skip_serializing_if = "Option::is_none")]
    pub health_data: Option<HealthData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestones: Option<Vec<Milestone>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    #[serde(rename = "highScores", default, skip_serializing_if = "Option::is_none")]
    pub high_scores: Option<HighScores>,
}

/// Result of a full-data export: the serialized document plus a suggested
/// download filename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDataResponse {
    pub json_content: String,
    pub filename: String,
}

/// Result of a per-metric CSV export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvExportResponse {
    pub csv_content: String,
    pub filename: String,
    pub record_count: usize,
}

/// Which sections of an imported document were applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub health_data_applied: bool,
    pub milestones_applied: bool,
    pub settings_applied: bool,
    pub high_scores_applied: bool,
    pub success_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_data_round_trips_with_original_key_names() {
        let mut data = HealthData::default();
        data.weight.push(MetricRecord {
            value: 70.0,
            timestamp: 1_700_000_000_000,
            notes: Some("after breakfast".to_string()),
        });

        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"Weight\""));
        assert!(json.contains("\"Temperature\""));

        let back: HealthData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn settings_serialize_to_camel_case() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains("\"darkMode\":false"));
        assert!(json.contains("\"fontSize\":\"medium\""));
        assert!(json.contains("\"healthReminders\":true"));
        assert!(json.contains("\"milestoneAlerts\":true"));
    }

    #[test]
    fn milestone_kind_uses_lowercase_tags() {
        let milestone = Milestone {
            id: 1,
            kind: MilestoneKind::Cognitive,
            title: "First puzzle".to_string(),
            date: "2025-03-01".to_string(),
            description: "Finished a 12-piece puzzle alone".to_string(),
            photo: None,
            timestamp: 1_740_787_200_000,
        };
        let json = serde_json::to_string(&milestone).unwrap();
        assert!(json.contains("\"type\":\"cognitive\""));
    }

    #[test]
    fn game_storage_keys_match_original_names() {
        assert_eq!(GameKind::Counting.storage_key(), "countingHighScores");
        assert_eq!(GameKind::Shapes.storage_key(), "shapesHighScores");
    }

    #[test]
    fn partial_export_document_parses() {
        let doc: ExportDocument =
            serde_json::from_str(r#"{"milestones": []}"#).unwrap();
        assert!(doc.health_data.is_none());
        assert_eq!(doc.milestones, Some(vec![]));
    }
}
