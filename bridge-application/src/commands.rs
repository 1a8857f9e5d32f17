pub mod log_commands;
