pub mod config_error;
pub mod parse_error;
