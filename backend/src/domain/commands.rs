//! Command and query types for the domain services.
//!
//! Mutations are expressed as command structs so every field a store needs
//! arrives in one value, and queries as filter structs so derived views are
//! explicit about what they select.

use shared::{MetricRecord, MetricType, Milestone, MilestoneKind, ForumPost};

/// Add one measurement to a metric's record list.
#[derive(Debug, Clone)]
pub struct AddRecordCommand {
    pub metric: MetricType,
    pub value: f64,
    /// Measurement time as epoch milliseconds
    pub timestamp: i64,
    pub notes: Option<String>,
}

/// Field-level patch for an existing record. `None` leaves the field as it
/// was.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub value: Option<f64>,
    pub timestamp: Option<i64>,
    pub notes: Option<String>,
}

/// Selects records for a derived list view.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Keep only records at most this many days old
    pub within_days: Option<u32>,
}

/// Response for a record mutation, carrying the stored record back.
#[derive(Debug, Clone)]
pub struct AddRecordResponse {
    pub record: MetricRecord,
    pub success_message: String,
}

/// Add one milestone. Id and timestamp are assigned by the service.
#[derive(Debug, Clone)]
pub struct AddMilestoneCommand {
    pub kind: MilestoneKind,
    pub title: String,
    /// Achievement date as YYYY-MM-DD
    pub date: String,
    pub description: String,
    pub photo: Option<String>,
}

/// Replace every user-editable field of an existing milestone.
#[derive(Debug, Clone)]
pub struct UpdateMilestoneCommand {
    pub id: i64,
    pub kind: MilestoneKind,
    pub title: String,
    pub date: String,
    pub description: String,
    pub photo: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AddMilestoneResponse {
    pub milestone: Milestone,
    pub success_message: String,
}

/// Sort order for the milestone timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MilestoneSort {
    #[default]
    NewestFirst,
    OldestFirst,
}

/// Selects and orders milestones for the timeline view.
#[derive(Debug, Clone, Default)]
pub struct TimelineQuery {
    /// Keep only milestones of this kind
    pub kind: Option<MilestoneKind>,
    pub sort: MilestoneSort,
}

/// Create a new discussion post.
#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Add a comment to an existing post.
#[derive(Debug, Clone)]
pub struct AddCommentCommand {
    pub post_id: i64,
    pub author: String,
    pub content: String,
}

/// Add a reply to an existing comment.
#[derive(Debug, Clone)]
pub struct AddReplyCommand {
    pub post_id: i64,
    pub comment_id: i64,
    pub author: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct CreatePostResponse {
    pub post: ForumPost,
    pub success_message: String,
}

/// Selects posts for the forum list view.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    /// Case-insensitive text match on title, content, or comment content
    pub search: Option<String>,
}
