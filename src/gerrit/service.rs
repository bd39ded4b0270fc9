use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{Change, ReviewIdentities};

#[async_trait]
pub trait ReviewService: Send + Sync {
    /// Open or merged changes owned by any of `identities` since `since`.
    async fn get_open_changes_by_person(
        &self,
        identities: &ReviewIdentities,
        since: DateTime<Utc>,
    ) -> Result<Vec<Change>>;
}
