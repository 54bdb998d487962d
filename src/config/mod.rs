//! Configuration loading and management for the Tip Pool Engine.
//!
//! This module provides functionality to load the venue's pay policy from a
//! YAML file. Without a file, [`PayPolicy::default`] carries the house rules.
//!
//! # Example
//!
//! ```no_run
//! use tip_pool_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy for: {}", config.venue().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, POLICY_FILE_NAME};
pub use types::{PayPolicy, PolicyConfig, VenueMetadata};
