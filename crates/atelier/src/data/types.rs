//! Common data types for asset persistence
//!
//! The generic asset record shape shared by all six kinds, the payload
//! descriptor trait that specializes the generic store per kind, and
//! identifier generation.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// =============================================================================
// AssetKind - the six partitions
// =============================================================================

/// The six asset kinds, one persisted partition each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Typography,
    Color,
    Gradient,
    Logo,
    Icon,
    Component,
}

impl AssetKind {
    pub const ALL: [AssetKind; 6] = [
        AssetKind::Typography,
        AssetKind::Color,
        AssetKind::Gradient,
        AssetKind::Logo,
        AssetKind::Icon,
        AssetKind::Component,
    ];

    /// Partition key, also the field name in a full-collection share payload
    pub fn key(&self) -> &'static str {
        match self {
            AssetKind::Typography => "typography",
            AssetKind::Color => "colors",
            AssetKind::Gradient => "gradients",
            AssetKind::Logo => "logos",
            AssetKind::Icon => "icons",
            AssetKind::Component => "components",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Typography => "Typography",
            AssetKind::Color => "Colors",
            AssetKind::Gradient => "Gradients",
            AssetKind::Logo => "Logos",
            AssetKind::Icon => "Icons",
            AssetKind::Component => "Components",
        }
    }
}

// =============================================================================
// AssetPayload - per-kind descriptor for the generic store
// =============================================================================

/// Descriptor trait specializing `AssetStore` per asset kind
///
/// Implementors declare their partition, whether kind-specific required
/// content is present (checked by `add` alongside the name), and which text
/// fields participate in substring search.
pub trait AssetPayload: Serialize + DeserializeOwned + Clone {
    const KIND: AssetKind;

    /// Whether the kind's required content field is non-empty
    ///
    /// Kinds without a required content field (typography, colors, gradients)
    /// keep the default.
    fn has_required_content(&self) -> bool {
        true
    }

    /// Kind-specific text fields matched by `filter` (in addition to the name)
    fn search_fields(&self) -> Vec<&str> {
        Vec::new()
    }

    /// One-line description for list displays; empty when the name says it all
    fn summary(&self) -> String {
        String::new()
    }
}

// =============================================================================
// Asset - the common record shape
// =============================================================================

/// One named design record of a specific kind
///
/// Payload fields are flattened next to `id` and `name` on the wire, matching
/// the persisted and shared JSON format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset<P> {
    /// Unique identifier, assigned at creation and immutable afterwards
    pub id: String,
    /// Display name (not required to be unique)
    pub name: String,
    #[serde(flatten)]
    pub payload: P,
}

impl<P: AssetPayload> Asset<P> {
    pub fn new(id: impl Into<String>, name: impl Into<String>, payload: P) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            payload,
        }
    }

    /// Whether the query matches this record (case-insensitive substring
    /// against the name and the payload's search fields)
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        if self.name.to_lowercase().contains(&query) {
            return true;
        }
        self.payload
            .search_fields()
            .iter()
            .any(|f| f.to_lowercase().contains(&query))
    }
}

// =============================================================================
// IdSequence - timestamp-derived identifiers
// =============================================================================

/// Issues timestamp-derived identifiers (milliseconds since the Unix epoch)
///
/// Not collision-free across instances; within one instance the value is
/// bumped past the last issued id when the clock has not advanced, so ids are
/// strictly increasing under single-threaded creation.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next identifier
    pub fn next_id(&mut self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;

        self.last = if now > self.last { now } else { self.last + 1 };
        self.last.to_string()
    }
}
