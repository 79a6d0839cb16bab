//! Fast Clipboard - A minimal networked clipboard
//!
//! POST content to receive an identifier, GET it back until the entry expires.
//! All persistence is delegated to an expiring key-value store.

pub mod api;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

#[cfg(test)]
mod property_tests;

pub use api::AppState;
pub use clipboard::ClipboardService;
pub use config::Config;
pub use error::ClipboardError;
pub use tasks::spawn_cleanup_task;
