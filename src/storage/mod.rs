//! Configuration storage.
//!
//! Settings are read from a JSON file; see [`config`].

pub mod config;

pub use config::{config_path, load_config, load_config_from, parse_config, CoverConfig};
