//! # Milestone Service
//!
//! Store over the milestone list. Ids come from the shared generator;
//! the achievement timestamp is derived from the milestone's date.

use anyhow::Result;
use shared::{Milestone, MilestoneKind};
use tracing::{info, warn};

use crate::domain::commands::{
    AddMilestoneCommand, AddMilestoneResponse, MilestoneSort, TimelineQuery,
    UpdateMilestoneCommand,
};
use crate::domain::confirmation::DeleteMilestoneConfirmation;
use crate::domain::dates;
use crate::domain::ids::IdGenerator;
use crate::storage::traits::MilestoneStorage;

#[derive(Clone)]
pub struct MilestoneService<S: MilestoneStorage + Clone> {
    repository: S,
    ids: IdGenerator,
}

impl<S: MilestoneStorage + Clone> MilestoneService<S> {
    pub fn new(repository: S, ids: IdGenerator) -> Self {
        Self { repository, ids }
    }

    pub fn milestones(&self) -> Result<Vec<Milestone>> {
        self.repository.load_milestones()
    }

    /// Overwrite all milestones, e.g. when applying an import.
    pub fn replace_all(&self, milestones: Vec<Milestone>) -> Result<()> {
        self.repository.save_milestones(&milestones)
    }

    /// Remove every stored milestone.
    pub fn clear(&self) -> Result<()> {
        self.repository.clear_milestones()
    }

    pub fn add_milestone(&self, command: AddMilestoneCommand) -> Result<AddMilestoneResponse> {
        let milestone = Milestone {
            id: self.ids.next_id(),
            kind: command.kind,
            timestamp: dates::parse_date(&command.date)?,
            title: command.title,
            date: command.date,
            description: command.description,
            photo: command.photo,
        };
        info!("Adding milestone: {}", milestone.title);

        let mut milestones = self.repository.load_milestones()?;
        milestones.push(milestone.clone());
        self.repository.save_milestones(&milestones)?;

        Ok(AddMilestoneResponse {
            success_message: "Milestone added successfully!".to_string(),
            milestone,
        })
    }

    /// Replace every editable field of the milestone with the given id.
    /// An unknown id is a no-op.
    pub fn update_milestone(&self, command: UpdateMilestoneCommand) -> Result<()> {
        let mut milestones = self.repository.load_milestones()?;

        let Some(milestone) = milestones.iter_mut().find(|m| m.id == command.id) else {
            warn!("No milestone found with id {}; nothing updated", command.id);
            return Ok(());
        };

        milestone.kind = command.kind;
        milestone.timestamp = dates::parse_date(&command.date)?;
        milestone.title = command.title;
        milestone.date = command.date;
        milestone.description = command.description;
        milestone.photo = command.photo;

        self.repository.save_milestones(&milestones)?;
        info!("Updated milestone {}", command.id);
        Ok(())
    }

    pub fn request_delete_milestone(&self, id: i64) -> Result<DeleteMilestoneConfirmation> {
        let milestones = self.repository.load_milestones()?;
        let title = milestones
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.title.as_str())
            .unwrap_or("(unknown)");
        Ok(DeleteMilestoneConfirmation::new(id, title))
    }

    /// Returns true when a milestone was actually removed.
    pub fn confirm_delete_milestone(
        &self,
        confirmation: DeleteMilestoneConfirmation,
    ) -> Result<bool> {
        let mut milestones = self.repository.load_milestones()?;
        let before = milestones.len();
        milestones.retain(|m| m.id != confirmation.id());
        let deleted = milestones.len() < before;

        self.repository.save_milestones(&milestones)?;
        if deleted {
            info!("Deleted milestone {}", confirmation.id());
        } else {
            warn!("No milestone found with id {}", confirmation.id());
        }
        Ok(deleted)
    }

    /// Derived view: milestones filtered by kind and ordered by date.
    pub fn list_milestones(&self, query: TimelineQuery) -> Result<Vec<Milestone>> {
        let mut milestones = self.repository.load_milestones()?;

        if let Some(kind) = query.kind {
            milestones.retain(|m| m.kind == kind);
        }

        match query.sort {
            MilestoneSort::NewestFirst => {
                milestones.sort_by(|a, b| b.timestamp.cmp(&a.timestamp))
            }
            MilestoneSort::OldestFirst => {
                milestones.sort_by(|a, b| a.timestamp.cmp(&b.timestamp))
            }
        }

        Ok(milestones)
    }

    /// Per-kind milestone count, for the development summary.
    pub fn count_by_kind(&self, kind: MilestoneKind) -> Result<usize> {
        Ok(self
            .repository
            .load_milestones()?
            .iter()
            .filter(|m| m.kind == kind)
            .count())
    }
}
