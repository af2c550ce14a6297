//! Sharing
//!
//! URL-embedded share payloads for one asset or the full collection, plus
//! downloadable per-asset JSON artifacts.

pub mod codec;
pub mod export;
pub mod url;

pub use codec::{decode_asset, decode_bundle, encode_all, encode_asset, ShareBundle, SharedAsset};
pub use url::{query_param, strip_param};
