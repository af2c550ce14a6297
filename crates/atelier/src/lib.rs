//! Atelier design-asset manager core
//!
//! Typed asset stores over a pluggable key-value storage service, a share
//! codec for URL-embedded payloads, and the shell controller that ties the
//! six asset kinds together.
//!
//! ## Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use atelier::data::storage::DiskStorage;
//! use atelier::shell::ShellController;
//!
//! let storage = Arc::new(DiskStorage::new().unwrap());
//! let shell = ShellController::new(storage, "https://atelier.local");
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod share;
pub mod shell;
