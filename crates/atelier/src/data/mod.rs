//! Data persistence
//!
//! Asset types, the generic per-kind store, the storage service, and the
//! theme preference.

pub mod assets;
pub mod storage;
pub mod store;
pub mod theme;
pub mod types;

// Re-export common types
pub use assets::{Color, Component, Gradient, Icon, Logo, LogoFormat, Typography};
pub use storage::{DiskStorage, MemoryStorage, Storage};
pub use store::AssetStore;
pub use theme::Theme;
pub use types::{Asset, AssetKind, AssetPayload};
