use anyhow::Result;
use shared::ForumData;

use crate::storage::json::connection::JsonConnection;
use crate::storage::traits::ForumStorage;

const FORUM_DATA_KEY: &str = "forumData";

/// JSON-backed repository for the forum, stored as one document under the
/// `forumData` key. Every mutation rewrites the whole document.
#[derive(Clone)]
pub struct ForumRepository {
    connection: JsonConnection,
}

impl ForumRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl ForumStorage for ForumRepository {
    fn load_forum(&self) -> Result<ForumData> {
        Ok(self
            .connection
            .load_key(FORUM_DATA_KEY)?
            .unwrap_or_default())
    }

    fn save_forum(&self, forum: &ForumData) -> Result<()> {
        self.connection.save_key(FORUM_DATA_KEY, forum)
    }

    fn clear_forum(&self) -> Result<()> {
        self.connection.delete_key(FORUM_DATA_KEY)
    }
}
