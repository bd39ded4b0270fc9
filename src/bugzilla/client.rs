use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{header, Client};
use serde::Deserialize;

use crate::bugzilla::service::BugzillaService;
use crate::config::BugzillaConfig;
use crate::error::{Error, Result};
use crate::models::BugzillaBug;

const INCLUDE_FIELDS: &str = "id,status,creator,assigned_to,last_change_time,summary";

pub struct BugzillaClient {
    client: Client,
    base_url: String,
    product: String,
}

#[derive(Deserialize)]
struct BugSearch {
    bugs: Vec<RestBug>,
}

#[derive(Deserialize)]
struct RestBug {
    id: u64,
    status: String,
    creator: String,
    assigned_to: String,
    last_change_time: DateTime<Utc>,
    summary: String,
}

impl BugzillaClient {
    pub fn new(config: &BugzillaConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("statusreport/0.1"),
        );
        if let Some(api_key) = &config.api_key {
            headers.insert("x-bugzilla-api-key", header::HeaderValue::from_str(api_key)?);
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            product: config.product.clone(),
        })
    }

    fn bug_url(&self, id: u64) -> String {
        format!("{}/show_bug.cgi?id={}", self.base_url, id)
    }

    fn to_bug(&self, bug: RestBug) -> BugzillaBug {
        BugzillaBug {
            url: self.bug_url(bug.id),
            id: bug.id,
            status: bug.status,
            creator: bug.creator,
            assigned_to: bug.assigned_to,
            last_change_time: bug.last_change_time,
            summary: bug.summary,
        }
    }
}

#[async_trait]
impl BugzillaService for BugzillaClient {
    async fn get_rhos_bugs(&self, person: &str, since: DateTime<Utc>) -> Result<Vec<BugzillaBug>> {
        let url = format!("{}/rest/bug", self.base_url);
        tracing::info!("Fetching Bugzilla bugs reported by: {}", person);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("creator", person.to_string()),
                ("product", self.product.clone()),
                ("last_change_time", since.format("%Y-%m-%dT%H:%M:%SZ").to_string()),
                ("include_fields", INCLUDE_FIELDS.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::BugzillaApi(format!(
                "Bug search for {} failed: {} - {}",
                person, status, body
            )));
        }

        let search: BugSearch = response.json().await?;
        Ok(search.bugs.into_iter().map(|b| self.to_bug(b)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BugzillaClient {
        BugzillaClient::new(&BugzillaConfig {
            url: "https://bugzilla.example.com/".to_string(),
            product: "Red Hat OpenStack".to_string(),
            api_key: None,
        })
        .unwrap()
    }

    #[test]
    fn test_bug_url_from_id() {
        assert_eq!(
            client().bug_url(1326000),
            "https://bugzilla.example.com/show_bug.cgi?id=1326000"
        );
    }

    #[test]
    fn test_search_response_to_bugs() {
        let json = r#"{"bugs": [{
            "id": 1326000,
            "status": "NEW",
            "creator": "alice@example.com",
            "assigned_to": "bob@example.com",
            "last_change_time": "2016-04-12T13:50:11Z",
            "summary": "nova-compute fails to start"
        }]}"#;
        let search: BugSearch = serde_json::from_str(json).unwrap();
        let client = client();
        let bugs: Vec<_> = search.bugs.into_iter().map(|b| client.to_bug(b)).collect();

        assert_eq!(bugs.len(), 1);
        assert_eq!(bugs[0].assigned_to, "bob@example.com");
        assert!(bugs[0].url.ends_with("id=1326000"));
    }
}
