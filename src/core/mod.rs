//! Core utilities shared across the application:
//! - `cache`: file system locations and read/write helpers
//! - `http`: request headers for snapshot hosts

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{
    cache_base_dir, default_database_path, snapshot_cache_path, try_read_to_string, write_string,
};
pub use http::{maybe_api_key_header_map, API_KEY_ENV_VAR};
