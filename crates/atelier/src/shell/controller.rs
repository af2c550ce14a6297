//! Shell controller
//!
//! Composes the six asset stores behind the tab selector, applies an
//! incoming share payload on startup, and owns the light UI state (active
//! tab, theme flag, share-dialog visibility). All operations run to
//! completion synchronously.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::share::DATA_PARAM;
use crate::data::assets::{Color, Component, Gradient, Icon, Logo, Typography};
use crate::data::storage::Storage;
use crate::data::store::AssetStore;
use crate::data::theme::Theme;
use crate::error::Result;
use crate::share::codec::{self, ShareBundle};
use crate::share::url;

use super::state::{ShellCommand, ShellSnapshot, Tab};

pub struct ShellController {
    storage: Arc<dyn Storage>,
    /// Origin prepended to generated share links
    origin: String,

    pub typography: AssetStore<Typography>,
    pub colors: AssetStore<Color>,
    pub gradients: AssetStore<Gradient>,
    pub logos: AssetStore<Logo>,
    pub icons: AssetStore<Icon>,
    pub components: AssetStore<Component>,

    theme: Theme,
    active_tab: Tab,
    /// Share URL while the dialog is open
    share_dialog: Option<String>,
}

impl ShellController {
    /// Load all six stores and the theme preference from storage
    pub fn new(storage: Arc<dyn Storage>, origin: impl Into<String>) -> Self {
        Self {
            typography: AssetStore::load(storage.clone()),
            colors: AssetStore::load(storage.clone()),
            gradients: AssetStore::load(storage.clone()),
            logos: AssetStore::load(storage.clone()),
            icons: AssetStore::load(storage.clone()),
            components: AssetStore::load(storage.clone()),
            theme: Theme::load(storage.as_ref()),
            active_tab: Tab::default(),
            share_dialog: None,
            origin: origin.into(),
            storage,
        }
    }

    /// Handle a shell-level command
    pub fn handle_command(&mut self, cmd: ShellCommand) -> Result<()> {
        match cmd {
            ShellCommand::SelectTab(tab) => {
                self.active_tab = tab;
            }
            ShellCommand::ToggleTheme => {
                self.toggle_theme()?;
            }
            ShellCommand::ShareAll => {
                self.share_all()?;
            }
            ShellCommand::CloseShareDialog => {
                self.close_share_dialog();
            }
        }
        Ok(())
    }

    // =========================================================================
    // Startup import
    // =========================================================================

    /// Apply an incoming full-collection share payload, once, at startup
    ///
    /// When the location carries a `data` parameter: decode it and overwrite
    /// every partition present in the payload, then return the location with
    /// the parameter stripped. A malformed payload is logged and the import
    /// aborts silently (`None`). `Err` is reserved for persistence failures.
    pub fn startup_import(&mut self, location: &str) -> Result<Option<String>> {
        let Some(raw) = url::query_param(location, DATA_PARAM) else {
            return Ok(None);
        };

        let bundle = match codec::decode_bundle(raw) {
            Ok(bundle) => bundle,
            Err(e) => {
                warn!("Failed to import shared data: {}", e);
                return Ok(None);
            }
        };

        self.apply_bundle(bundle)?;
        info!("Imported shared collection");
        Ok(Some(url::strip_param(location, DATA_PARAM)))
    }

    /// Overwrite every partition present in the bundle (no merge)
    pub fn apply_bundle(&mut self, bundle: ShareBundle) -> Result<()> {
        if let Some(records) = bundle.typography {
            self.typography.replace_all(records)?;
        }
        if let Some(records) = bundle.colors {
            self.colors.replace_all(records)?;
        }
        if let Some(records) = bundle.gradients {
            self.gradients.replace_all(records)?;
        }
        if let Some(records) = bundle.logos {
            self.logos.replace_all(records)?;
        }
        if let Some(records) = bundle.icons {
            self.icons.replace_all(records)?;
        }
        if let Some(records) = bundle.components {
            self.components.replace_all(records)?;
        }
        Ok(())
    }

    // =========================================================================
    // Sharing
    // =========================================================================

    /// Encode every partition (freshly read from storage) into a share URL
    /// and open the share dialog with it
    pub fn share_all(&mut self) -> Result<String> {
        let bundle = self.collect_bundle();
        let share_url = codec::encode_all(&self.origin, &bundle)?;
        self.share_dialog = Some(share_url.clone());
        Ok(share_url)
    }

    /// Build a share URL for one asset
    pub fn share_asset<T: Serialize>(&self, id: &str, name: &str, data: &T) -> Result<String> {
        codec::encode_asset(&self.origin, id, name, data)
    }

    /// Snapshot all six partitions after re-reading them from storage
    ///
    /// Re-reading picks up writes made by other instances sharing the same
    /// storage since this controller loaded.
    fn collect_bundle(&mut self) -> ShareBundle {
        self.typography.reload();
        self.colors.reload();
        self.gradients.reload();
        self.logos.reload();
        self.icons.reload();
        self.components.reload();

        ShareBundle {
            typography: Some(self.typography.assets().to_vec()),
            colors: Some(self.colors.assets().to_vec()),
            gradients: Some(self.gradients.assets().to_vec()),
            logos: Some(self.logos.assets().to_vec()),
            icons: Some(self.icons.assets().to_vec()),
            components: Some(self.components.assets().to_vec()),
        }
    }

    /// Share URL while the dialog is open
    pub fn share_dialog(&self) -> Option<&str> {
        self.share_dialog.as_deref()
    }

    pub fn close_share_dialog(&mut self) {
        self.share_dialog = None;
    }

    // =========================================================================
    // Tabs and theme
    // =========================================================================

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip and persist the theme preference
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.set_theme(self.theme.toggled())?;
        Ok(self.theme)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        self.theme.save(self.storage.as_ref())
    }

    /// Read-only view for front ends
    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot {
            active_tab: self.active_tab,
            theme: self.theme,
            share_dialog: self.share_dialog.clone(),
            counts: [
                (Tab::Typography.kind(), self.typography.len()),
                (Tab::Colors.kind(), self.colors.len()),
                (Tab::Gradients.kind(), self.gradients.len()),
                (Tab::Logos.kind(), self.logos.len()),
                (Tab::Icons.kind(), self.icons.len()),
                (Tab::Components.kind(), self.components.len()),
            ],
        }
    }
}
