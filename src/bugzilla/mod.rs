pub mod client;
pub mod service;

pub use client::BugzillaClient;
pub use service::BugzillaService;
