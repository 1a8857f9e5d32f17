pub mod link_extractors;
pub mod renderer;

pub use link_extractors::*;
pub use renderer::*;
