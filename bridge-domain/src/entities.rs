pub mod config;
pub mod event;
pub mod guild;
pub mod identity;
pub mod notification;
pub mod role_lookup;
pub mod upstream;

pub use config::*;
pub use event::*;
pub use guild::*;
pub use identity::*;
pub use notification::*;
pub use role_lookup::*;
pub use upstream::*;
