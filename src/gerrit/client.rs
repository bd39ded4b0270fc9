use chrono::{DateTime, Utc};
use reqwest::Client;

use crate::error::Result;
use crate::gerrit::paginator::Paginator;
use crate::models::Change;

const PAGE_SIZE: u32 = 100;

/// One Gerrit server.
pub struct GerritClient {
    client: Client,
    name: String,
    base_url: String,
}

impl GerritClient {
    pub fn new(client: Client, name: impl Into<String>, base_url: &str) -> Self {
        Self {
            client,
            name: name.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn get_open_changes_by_owner(
        &self,
        owner: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<Change>> {
        let url = format!("{}/changes/", self.base_url);
        let query = owner_query(owner, since);
        tracing::info!("Fetching {} reviews for: {}", self.name, owner);

        Paginator::new(&self.client)
            .fetch_all(&url, &query, PAGE_SIZE)
            .await
    }
}

fn owner_query(owner: &str, since: DateTime<Utc>) -> String {
    format!(
        "owner:{} after:{} (status:open OR status:merged)",
        owner,
        since.format("%Y-%m-%d")
    )
}
