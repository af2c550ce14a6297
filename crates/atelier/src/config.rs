//! Configuration constants for Atelier

/// Application metadata
pub mod app {
    /// Application name (used for the config directory, etc.)
    pub const NAME: &str = "atelier";
}

/// Share link configuration
pub mod share {
    /// Query parameter carrying a full-collection payload
    pub const DATA_PARAM: &str = "data";

    /// Query parameter carrying a single shared asset
    pub const ASSET_PARAM: &str = "asset";

    /// Origin used for generated share links when none is configured
    pub const DEFAULT_ORIGIN: &str = "https://atelier.local";
}
