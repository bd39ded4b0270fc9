use reqwest::Client;

use crate::error::{Error, Result};
use crate::models::Change;

/// Prefix Gerrit puts in front of every JSON body.
const XSSI_PREFIX: &str = ")]}'";

pub struct Paginator<'a> {
    client: &'a Client,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Runs `query` against `changes_url`, following `_more_changes` with the
    /// `S` offset until the server reports no more results.
    pub async fn fetch_all(
        &self,
        changes_url: &str,
        query: &str,
        per_page: u32,
    ) -> Result<Vec<Change>> {
        let mut all_changes = Vec::new();
        let mut start = 0usize;

        loop {
            tracing::debug!("Fetching: {} q={} S={}", changes_url, query, start);
            let response = self
                .client
                .get(changes_url)
                .query(&[("q", query)])
                .query(&[("n", per_page as usize), ("S", start)])
                .send()
                .await?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(Error::GerritApi(format!(
                    "Query '{}' on {} failed: {} - {}",
                    query, changes_url, status, body
                )));
            }

            let body = response.text().await?;
            let changes = parse_changes(&body)?;
            let count = changes.len();
            let has_more = changes.last().map(|c| c.more_changes).unwrap_or(false);
            all_changes.extend(changes);

            if !has_more || count == 0 {
                break;
            }

            start += count;
        }

        Ok(all_changes)
    }
}

pub fn parse_changes(body: &str) -> Result<Vec<Change>> {
    let json = body.trim_start().strip_prefix(XSSI_PREFIX).unwrap_or(body);
    serde_json::from_str(json)
        .map_err(|e| Error::ParseError(format!("Invalid Gerrit change list: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_changes_strips_prefix() {
        let body = ")]}'\n[{\"project\":\"openstack/nova\",\"subject\":\"Fix\",\"_number\":1,\"status\":\"NEW\",\"created\":\"2016-04-01 09:00:00.000000000\",\"updated\":\"2016-04-02 09:00:00.000000000\"}]";
        let changes = parse_changes(body).unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].project, "openstack/nova");
        assert!(!changes[0].more_changes);
    }

    #[test]
    fn test_parse_changes_without_prefix() {
        assert!(parse_changes("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_changes_rejects_html() {
        let err = parse_changes("<html>login required</html>").unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));
    }
}
