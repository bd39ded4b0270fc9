use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{header, Client};
use serde::Deserialize;
use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::launchpad::service::LaunchpadService;
use crate::models::LaunchpadBug;

pub struct LaunchpadClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct TaskCollection {
    #[serde(default)]
    entries: Vec<BugTask>,
    next_collection_link: Option<String>,
}

#[derive(Deserialize)]
struct BugTask {
    bug_link: String,
    title: String,
    web_link: String,
    owner_link: String,
    date_created: DateTime<Utc>,
    date_last_updated: Option<DateTime<Utc>>,
}

impl From<BugTask> for LaunchpadBug {
    fn from(task: BugTask) -> Self {
        LaunchpadBug {
            author: person_name(&task.owner_link).to_string(),
            updated: task.date_last_updated.unwrap_or(task.date_created),
            link: task.web_link,
            title: task.title,
        }
    }
}

/// One entry per bug; a bug filed against several projects or series comes
/// back as several tasks and only its first task is kept.
fn distinct_bugs(
    tasks: impl IntoIterator<Item = BugTask>,
    seen: &mut HashSet<String>,
) -> Vec<LaunchpadBug> {
    tasks
        .into_iter()
        .filter(|task| seen.insert(task.bug_link.clone()))
        .map(LaunchpadBug::from)
        .collect()
}

/// `https://api.launchpad.net/1.0/~alice` -> `alice`
fn person_name(link: &str) -> &str {
    let tail = link.rsplit('/').next().unwrap_or(link);
    tail.strip_prefix('~').unwrap_or(tail)
}

impl LaunchpadClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("statusreport/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_page(&self, request: reqwest::RequestBuilder) -> Result<TaskCollection> {
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::LaunchpadApi(format!(
                "searchTasks failed: {} - {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl LaunchpadService for LaunchpadClient {
    async fn get_bugs_by_person(
        &self,
        person: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<LaunchpadBug>> {
        let person_url = format!("{}/~{}", self.base_url, person);
        tracing::info!("Fetching Launchpad bugs reported by: {}", person);

        let first = self.client.get(&person_url).query(&[
            ("ws.op", "searchTasks".to_string()),
            ("bug_reporter", person_url.clone()),
            ("modified_since", since.to_rfc3339()),
        ]);

        let mut bugs = Vec::new();
        let mut seen = HashSet::new();
        let mut page = self.fetch_page(first).await?;

        loop {
            bugs.extend(distinct_bugs(page.entries, &mut seen));

            let Some(next) = page.next_collection_link else {
                break;
            };
            tracing::debug!("Fetching: {}", next);
            page = self.fetch_page(self.client.get(&next)).await?;
        }

        Ok(bugs)
    }
}
