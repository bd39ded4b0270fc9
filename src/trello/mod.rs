pub mod client;
pub mod service;

pub use client::TrelloClient;
pub use service::BoardService;
