use chrono::{DateTime, Utc};

/// A bug reported on Launchpad.
#[derive(Debug, Clone)]
pub struct LaunchpadBug {
    pub author: String,
    pub updated: DateTime<Utc>,
    pub link: String,
    pub title: String,
}

/// A bug reported on Bugzilla.
#[derive(Debug, Clone)]
pub struct BugzillaBug {
    pub id: u64,
    pub status: String,
    pub creator: String,
    pub assigned_to: String,
    pub last_change_time: DateTime<Utc>,
    pub url: String,
    pub summary: String,
}
