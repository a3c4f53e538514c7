pub mod paths;

pub use paths::{default_log_path, format_path_with_tilde};
