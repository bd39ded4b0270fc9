pub mod format;
pub mod generator;
pub mod team;

pub use generator::{Report, Services, IN_PROGRESS_LIST};
pub use team::TeamReport;
