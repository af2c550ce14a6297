//! Generic per-kind asset store
//!
//! One `AssetStore<P>` instance owns one persisted partition. All six kinds
//! share this implementation; the payload type supplies the partition key,
//! the required-content check, and the search fields.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::warn;

use crate::data::storage::{self, Storage};
use crate::data::types::{Asset, AssetPayload, IdSequence};
use crate::error::Result;

/// Manages one kind's assets in memory, persisting the whole partition on
/// every mutation
///
/// Insertion order is preserved. Every mutation is a read-modify-write of the
/// full partition; the last writer for a partition wins.
pub struct AssetStore<P: AssetPayload> {
    storage: Arc<dyn Storage>,
    assets: Vec<Asset<P>>,
    ids: IdSequence,
    /// Whether bulk-selection mode is active
    bulk_mode: bool,
    /// Ids currently selected in bulk mode
    selected: HashSet<String>,
}

impl<P: AssetPayload> AssetStore<P> {
    /// Load the store from its partition
    ///
    /// Absent or unparsable data is treated as an empty partition; a parse
    /// failure is logged, not surfaced.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let assets = read_partition(storage.as_ref());
        Self {
            storage,
            assets,
            ids: IdSequence::new(),
            bulk_mode: false,
            selected: HashSet::new(),
        }
    }

    /// Re-read the partition from storage, discarding the in-memory sequence
    ///
    /// Selection state is kept; ids that no longer exist are dropped from it.
    pub fn reload(&mut self) {
        self.assets = read_partition(self.storage.as_ref());
        let ids: HashSet<&str> = self.assets.iter().map(|a| a.id.as_str()).collect();
        self.selected.retain(|id| ids.contains(id.as_str()));
    }

    /// All assets, in insertion order
    pub fn assets(&self) -> &[Asset<P>] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Get an asset by id
    pub fn get(&self, id: &str) -> Option<&Asset<P>> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// Add a new asset
    ///
    /// Validates that the name (trimmed) is non-empty and that the kind's
    /// required content is present. On validation failure the call is a no-op
    /// and returns `Ok(None)` rather than an error. On success the record gets a
    /// fresh id, is appended, and the partition is persisted.
    pub fn add(&mut self, name: &str, payload: P) -> Result<Option<&Asset<P>>> {
        if name.trim().is_empty() || !payload.has_required_content() {
            return Ok(None);
        }

        let id = self.ids.next_id();
        self.assets.push(Asset::new(id, name, payload));
        self.persist()?;
        Ok(self.assets.last())
    }

    /// Delete the asset with the matching id
    ///
    /// Returns whether a record was removed. Unknown ids are a no-op and do
    /// not touch storage.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.assets.len();
        self.assets.retain(|a| a.id != id);
        if self.assets.len() == before {
            return Ok(false);
        }

        self.selected.remove(id);
        self.persist()?;
        Ok(true)
    }

    /// Delete every asset whose id is in the set; clears the selection
    pub fn delete_many(&mut self, ids: &HashSet<String>) -> Result<usize> {
        let before = self.assets.len();
        self.assets.retain(|a| !ids.contains(&a.id));
        let removed = before - self.assets.len();

        self.selected.clear();
        if removed > 0 {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Replace the whole partition and persist it
    ///
    /// This is the only mutation path besides add/delete; share import uses
    /// it to overwrite a partition with incoming records.
    pub fn replace_all(&mut self, assets: Vec<Asset<P>>) -> Result<()> {
        self.assets = assets;
        self.selected.clear();
        self.persist()
    }

    /// Case-insensitive substring filter over the name and the kind's search
    /// fields
    ///
    /// Returns a derived view preserving relative order; an empty query
    /// returns the full sequence.
    pub fn filter(&self, query: &str) -> Vec<&Asset<P>> {
        if query.is_empty() {
            return self.assets.iter().collect();
        }
        self.assets.iter().filter(|a| a.matches(query)).collect()
    }

    // =========================================================================
    // Bulk selection
    // =========================================================================

    pub fn bulk_mode(&self) -> bool {
        self.bulk_mode
    }

    /// Enable or disable bulk-selection mode; disabling clears the selection
    pub fn set_bulk_mode(&mut self, enabled: bool) {
        self.bulk_mode = enabled;
        if !enabled {
            self.selected.clear();
        }
    }

    pub fn selected(&self) -> &HashSet<String> {
        &self.selected
    }

    /// Toggle one id in or out of the selection
    pub fn toggle_selected(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Toggle between selecting the whole current filtered view and clearing
    /// the selection
    pub fn select_all(&mut self, query: &str) {
        let visible: HashSet<String> =
            self.filter(query).iter().map(|a| a.id.clone()).collect();
        if self.selected == visible {
            self.selected.clear();
        } else {
            self.selected = visible;
        }
    }

    /// Delete every selected asset; clears the selection
    pub fn delete_selected(&mut self) -> Result<usize> {
        let ids = std::mem::take(&mut self.selected);
        self.delete_many(&ids)
    }

    fn persist(&self) -> Result<()> {
        storage::save_json(self.storage.as_ref(), P::KIND.key(), &self.assets)
    }
}

/// Read a partition, treating absent or unparsable data as empty
fn read_partition<P: AssetPayload>(storage: &dyn Storage) -> Vec<Asset<P>> {
    match storage::load_json::<Vec<Asset<P>>>(storage, P::KIND.key()) {
        Ok(Some(assets)) => assets,
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!("Ignoring unreadable '{}' partition: {}", P::KIND.key(), e);
            Vec::new()
        }
    }
}
