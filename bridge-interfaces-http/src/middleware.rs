pub mod auth;
pub mod payload;

pub use auth::*;
pub use payload::*;
