pub mod config;
pub mod error;
pub mod models;
pub mod trello;
pub mod gerrit;
pub mod launchpad;
pub mod bugzilla;
pub mod report;

pub use config::Config;
pub use error::{Error, Result};
pub use trello::{BoardService, TrelloClient};
pub use gerrit::{GerritReviews, ReviewService};
pub use launchpad::{LaunchpadClient, LaunchpadService};
pub use bugzilla::{BugzillaClient, BugzillaService};
pub use report::{Report, Services, TeamReport};
