use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Change {
    pub project: String,
    pub subject: String,
    #[serde(rename = "_number")]
    pub number: u64,
    pub status: String,
    #[serde(deserialize_with = "gerrit_timestamp::deserialize")]
    pub created: DateTime<Utc>,
    #[serde(deserialize_with = "gerrit_timestamp::deserialize")]
    pub updated: DateTime<Utc>,
    /// Set by Gerrit on the last change of a truncated page.
    #[serde(rename = "_more_changes", default)]
    pub more_changes: bool,
}

/// Accounts of one person on each Gerrit instance we query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReviewIdentities {
    pub openstack: Option<String>,
    pub gerrithub: Option<String>,
    pub codeng: Option<String>,
    pub rdoproject: Option<String>,
}

impl ReviewIdentities {
    /// The identity reported in summaries: openstack first, then whichever
    /// account is present.
    pub fn primary(&self) -> Option<&str> {
        self.openstack
            .as_deref()
            .or(self.gerrithub.as_deref())
            .or(self.codeng.as_deref())
            .or(self.rdoproject.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.primary().is_none()
    }
}

/// Gerrit encodes timestamps as `2016-04-12 13:50:11.000000000`, always UTC.
pub mod gerrit_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

    pub fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        NaiveDateTime::parse_from_str(raw, FORMAT).map(|naive| naive.and_utc())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }
}
