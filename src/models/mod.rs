pub mod card;
pub mod review;
pub mod bug;
pub mod team;
pub mod summary;

pub use card::*;
pub use review::*;
pub use bug::*;
pub use team::*;
pub use summary::*;
