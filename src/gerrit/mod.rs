pub mod client;
pub mod paginator;
pub mod reviews;
pub mod service;

pub use client::GerritClient;
pub use paginator::Paginator;
pub use reviews::GerritReviews;
pub use service::ReviewService;
