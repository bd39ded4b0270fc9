use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::BugzillaBug;

#[async_trait]
pub trait BugzillaService: Send + Sync {
    /// Bugs in the configured product reported by `person` and changed since
    /// `since`.
    async fn get_rhos_bugs(&self, person: &str, since: DateTime<Utc>) -> Result<Vec<BugzillaBug>>;
}
