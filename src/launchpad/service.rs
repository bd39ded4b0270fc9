use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::LaunchpadBug;

#[async_trait]
pub trait LaunchpadService: Send + Sync {
    /// Bugs reported by `person` and touched since `since`.
    async fn get_bugs_by_person(
        &self,
        person: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<LaunchpadBug>>;
}
