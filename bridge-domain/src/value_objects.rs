pub mod config_key;
pub mod event_kind;
pub mod link_source;
pub mod notification_format;

pub use config_key::*;
pub use event_kind::*;
pub use link_source::*;
pub use notification_format::*;
