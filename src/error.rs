use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Trello API error: {0}")]
    TrelloApi(String),

    #[error("Gerrit API error: {0}")]
    GerritApi(String),

    #[error("Launchpad API error: {0}")]
    LaunchpadApi(String),

    #[error("Bugzilla API error: {0}")]
    BugzillaApi(String),

    #[error("No list '{name}' on board {board}")]
    ListNotFound { board: String, name: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;
