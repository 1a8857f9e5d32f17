pub mod debug_handlers;
pub mod health_handlers;
pub mod log_handlers;
pub mod ops_handlers;
pub mod role_handlers;

pub use debug_handlers::*;
pub use health_handlers::*;
pub use log_handlers::*;
pub use ops_handlers::*;
pub use role_handlers::*;
