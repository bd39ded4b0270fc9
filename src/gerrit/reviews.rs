use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{header, Client};

use crate::config::GerritUrls;
use crate::error::Result;
use crate::gerrit::client::GerritClient;
use crate::gerrit::service::ReviewService;
use crate::models::{Change, ReviewIdentities};

/// The four Gerrit servers a team member may push to.
pub struct GerritReviews {
    openstack: GerritClient,
    gerrithub: GerritClient,
    codeng: GerritClient,
    rdoproject: GerritClient,
}

impl GerritReviews {
    pub fn new(urls: &GerritUrls) -> Result<Self> {
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
            openstack: GerritClient::new(client.clone(), "openstack", &urls.openstack),
            gerrithub: GerritClient::new(client.clone(), "gerrithub", &urls.gerrithub),
            codeng: GerritClient::new(client.clone(), "codeng", &urls.codeng),
            rdoproject: GerritClient::new(client, "rdoproject", &urls.rdoproject),
        })
    }

    fn instances<'a>(
        &'a self,
        identities: &'a ReviewIdentities,
    ) -> [(&'a GerritClient, Option<&'a str>); 4] {
        [
            (&self.openstack, identities.openstack.as_deref()),
            (&self.gerrithub, identities.gerrithub.as_deref()),
            (&self.codeng, identities.codeng.as_deref()),
            (&self.rdoproject, identities.rdoproject.as_deref()),
        ]
    }
}

#[async_trait]
impl ReviewService for GerritReviews {
    async fn get_open_changes_by_person(
        &self,
        identities: &ReviewIdentities,
        since: DateTime<Utc>,
    ) -> Result<Vec<Change>> {
        let mut changes = Vec::new();

        for (gerrit, owner) in self.instances(identities) {
            let Some(owner) = owner else {
                tracing::debug!("No {} account, skipping", gerrit.name());
                continue;
            };
            let found = gerrit.get_open_changes_by_owner(owner, since).await?;
            tracing::debug!("{} changes on {} for {}", found.len(), gerrit.name(), owner);
            changes.extend(found);
        }

        Ok(changes)
    }
}
