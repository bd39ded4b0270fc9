use serde::Deserialize;
use std::collections::BTreeMap;

use super::review::ReviewIdentities;
use crate::error::{Error, Result};

/// Per-service account names of one team member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Identities {
    #[serde(default)]
    pub trello: Option<String>,
    #[serde(default)]
    pub openstack: Option<String>,
    #[serde(default)]
    pub gerrithub: Option<String>,
    #[serde(default)]
    pub codeng: Option<String>,
    #[serde(default)]
    pub rdoproject: Option<String>,
    #[serde(default)]
    pub launchpad: Option<String>,
    #[serde(default)]
    pub bugzilla: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub key: String,
    pub identities: Identities,
}

impl TeamMember {
    pub fn review_identities(&self) -> ReviewIdentities {
        ReviewIdentities {
            openstack: self.identities.openstack.clone(),
            gerrithub: self.identities.gerrithub.clone(),
            codeng: self.identities.codeng.clone(),
            rdoproject: self.identities.rdoproject.clone(),
        }
    }
}

/// The roster, ordered by member key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    members: Vec<TeamMember>,
}

impl Team {
    pub fn from_json(raw: &str) -> Result<Self> {
        let roster: BTreeMap<String, Identities> = serde_json::from_str(raw)
            .map_err(|e| Error::Config(format!("TEAM is not a valid roster: {}", e)))?;

        if roster.is_empty() {
            return Err(Error::Config("TEAM roster is empty".to_string()));
        }

        let members = roster
            .into_iter()
            .map(|(key, identities)| TeamMember { key, identities })
            .collect();

        Ok(Self { members })
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn get(&self, key: &str) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.key == key)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
