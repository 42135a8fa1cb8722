use anyhow::Result;
use shared::Milestone;

use crate::storage::json::connection::JsonConnection;
use crate::storage::traits::MilestoneStorage;

const MILESTONES_KEY: &str = "milestones";

/// JSON-backed repository for milestones, stored as a single list under
/// the `milestones` key.
#[derive(Clone)]
pub struct MilestoneRepository {
    connection: JsonConnection,
}

impl MilestoneRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl MilestoneStorage for MilestoneRepository {
    fn load_milestones(&self) -> Result<Vec<Milestone>> {
        Ok(self
            .connection
            .load_key(MILESTONES_KEY)?
            .unwrap_or_default())
    }

    fn save_milestones(&self, milestones: &[Milestone]) -> Result<()> {
        self.connection.save_key(MILESTONES_KEY, &milestones)
    }

    fn clear_milestones(&self) -> Result<()> {
        self.connection.delete_key(MILESTONES_KEY)
    }
}
