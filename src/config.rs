use crate::error::{Error, Result};
use crate::models::Team;
use std::env;

pub const DEFAULT_OPENSTACK_GERRIT_URL: &str = "https://review.opendev.org";
pub const DEFAULT_GERRITHUB_URL: &str = "https://review.gerrithub.io";
pub const DEFAULT_CODENG_GERRIT_URL: &str = "https://code.engineering.redhat.com/gerrit";
pub const DEFAULT_RDOPROJECT_GERRIT_URL: &str = "https://review.rdoproject.org/r";
pub const DEFAULT_LAUNCHPAD_API_URL: &str = "https://api.launchpad.net/1.0";
pub const DEFAULT_BUGZILLA_URL: &str = "https://bugzilla.redhat.com";
pub const DEFAULT_BUGZILLA_PRODUCT: &str = "Red Hat OpenStack";
pub const DEFAULT_LOOKBACK_WEEKS: u32 = 2;

#[derive(Debug, Clone)]
pub struct Config {
    pub team: Team,
    pub board_to_check_id: String,
    pub trello: Option<TrelloCredentials>,
    pub lookback_weeks: u32,
    pub gerrit: GerritUrls,
    pub launchpad_api_url: String,
    pub bugzilla: BugzillaConfig,
}

#[derive(Debug, Clone)]
pub struct TrelloCredentials {
    pub api_key: String,
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct GerritUrls {
    pub openstack: String,
    pub gerrithub: String,
    pub codeng: String,
    pub rdoproject: String,
}

#[derive(Debug, Clone)]
pub struct BugzillaConfig {
    pub url: String,
    pub product: String,
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any variable source. `from_env` wraps
    /// this around the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_team = lookup("TEAM")
            .ok_or_else(|| Error::Config("TEAM environment variable not set".to_string()))?;
        let team = Team::from_json(&raw_team)?;

        let board_to_check_id = lookup("BOARD_TO_CHECK_ID")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                Error::Config("BOARD_TO_CHECK_ID environment variable not set".to_string())
            })?;

        let token = lookup("trello_token").or_else(|| lookup("TRELLO_TOKEN"));
        let trello = match (lookup("TRELLO_API_KEY"), token) {
            (Some(api_key), Some(token)) => Some(TrelloCredentials { api_key, token }),
            _ => None,
        };

        let lookback_weeks = match lookup("LOOKBACK_WEEKS") {
            Some(v) => v.trim().parse().map_err(|_| {
                Error::Config(format!("LOOKBACK_WEEKS must be a non-negative integer, got '{}'", v))
            })?,
            None => DEFAULT_LOOKBACK_WEEKS,
        };

        let gerrit = GerritUrls {
            openstack: lookup("OPENSTACK_GERRIT_URL")
                .unwrap_or_else(|| DEFAULT_OPENSTACK_GERRIT_URL.to_string()),
            gerrithub: lookup("GERRITHUB_URL")
                .unwrap_or_else(|| DEFAULT_GERRITHUB_URL.to_string()),
            codeng: lookup("CODENG_GERRIT_URL")
                .unwrap_or_else(|| DEFAULT_CODENG_GERRIT_URL.to_string()),
            rdoproject: lookup("RDOPROJECT_GERRIT_URL")
                .unwrap_or_else(|| DEFAULT_RDOPROJECT_GERRIT_URL.to_string()),
        };

        let launchpad_api_url = lookup("LAUNCHPAD_API_URL")
            .unwrap_or_else(|| DEFAULT_LAUNCHPAD_API_URL.to_string());

        let bugzilla = BugzillaConfig {
            url: lookup("BUGZILLA_URL").unwrap_or_else(|| DEFAULT_BUGZILLA_URL.to_string()),
            product: lookup("BUGZILLA_PRODUCT")
                .unwrap_or_else(|| DEFAULT_BUGZILLA_PRODUCT.to_string()),
            api_key: lookup("BUGZILLA_API_KEY"),
        };

        Ok(Self {
            team,
            board_to_check_id,
            trello,
            lookback_weeks,
            gerrit,
            launchpad_api_url,
            bugzilla,
        })
    }

    /// Signed week offset handed to the report operations.
    pub fn start_date(&self) -> i64 {
        -(self.lookback_weeks as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    const TEAM: &str = r#"{"alice": {"trello": "alice12", "openstack": "alice"}}"#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let env = vars(&[("TEAM", TEAM), ("BOARD_TO_CHECK_ID", "board1")]);
        let config = Config::from_lookup(|k| env.get(k).cloned()).unwrap();

        assert_eq!(config.board_to_check_id, "board1");
        assert_eq!(config.team.len(), 1);
        assert!(config.trello.is_none());
        assert_eq!(config.lookback_weeks, 2);
        assert_eq!(config.start_date(), -2);
        assert_eq!(config.gerrit.openstack, DEFAULT_OPENSTACK_GERRIT_URL);
        assert_eq!(config.bugzilla.product, DEFAULT_BUGZILLA_PRODUCT);
    }

    #[test]
    fn test_trello_needs_key_and_token() {
        let env = vars(&[
            ("TEAM", TEAM),
            ("BOARD_TO_CHECK_ID", "board1"),
            ("trello_token", "tok"),
        ]);
        let config = Config::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert!(config.trello.is_none());

        let env = vars(&[
            ("TEAM", TEAM),
            ("BOARD_TO_CHECK_ID", "board1"),
            ("trello_token", "tok"),
            ("TRELLO_API_KEY", "key"),
        ]);
        let config = Config::from_lookup(|k| env.get(k).cloned()).unwrap();
        let creds = config.trello.unwrap();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.token, "tok");
    }

    #[test]
    fn test_missing_team_fails() {
        let env = vars(&[("BOARD_TO_CHECK_ID", "board1")]);
        let err = Config::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("TEAM"));
    }

    #[test]
    fn test_malformed_team_fails_at_load() {
        let env = vars(&[("TEAM", "{'alice': 'x'"), ("BOARD_TO_CHECK_ID", "board1")]);
        assert!(matches!(
            Config::from_lookup(|k| env.get(k).cloned()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_missing_board_fails() {
        let env = vars(&[("TEAM", TEAM)]);
        let err = Config::from_lookup(|k| env.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("BOARD_TO_CHECK_ID"));
    }

    #[test]
    fn test_bad_lookback_fails() {
        let env = vars(&[
            ("TEAM", TEAM),
            ("BOARD_TO_CHECK_ID", "board1"),
            ("LOOKBACK_WEEKS", "soon"),
        ]);
        assert!(Config::from_lookup(|k| env.get(k).cloned()).is_err());
    }
}
