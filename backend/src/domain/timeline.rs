//! # Timeline Service
//!
//! Pure projection of milestones into timeline entries and the development
//! summary cards. Entries carry the milestone id so the UI can wire edit
//! and delete actions back to the store.

use shared::{DevelopmentSummary, Milestone, TimelineEntry};

use crate::domain::{dates, summary};

#[derive(Clone)]
pub struct TimelineService;

impl TimelineService {
    pub fn new() -> Self {
        Self
    }

    /// Timeline entries in the order given (the caller picks the sort via
    /// its milestone query).
    pub fn timeline(&self, milestones: &[Milestone]) -> Vec<TimelineEntry> {
        milestones
            .iter()
            .map(|milestone| TimelineEntry {
                id: milestone.id,
                kind: milestone.kind,
                kind_label: milestone.kind.label().to_string(),
                formatted_date: dates::format_date(milestone.timestamp),
                title: milestone.title.clone(),
                description: milestone.description.clone(),
                photo: milestone.photo.clone(),
            })
            .collect()
    }

    /// Per-kind progress cards for the summary strip.
    pub fn development_summary(&self, milestones: &[Milestone]) -> DevelopmentSummary {
        summary::development_progress(milestones)
    }
}

impl Default for TimelineService {
    fn default() -> Self {
        Self::new()
    }
}
