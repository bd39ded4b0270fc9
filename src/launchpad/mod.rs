pub mod client;
pub mod service;

pub use client::LaunchpadClient;
pub use service::LaunchpadService;
