pub mod diagnostics_queries;
pub mod role_queries;
