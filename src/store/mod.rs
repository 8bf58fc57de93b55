// src/store/mod.rs

//! Durable storage for the active configuration and its single backup slot.

pub mod default;
pub mod files;

pub use default::default_config;
pub use files::{ConfigStore, ACTIVE_FILE, BACKUP_FILE};
