//! Shell state and commands
//!
//! `Tab` selects the visible asset kind; `ShellCommand` is the unified
//! command type handled by the controller; `ShellSnapshot` is the read-only
//! state a front end renders from.

use crate::data::theme::Theme;
use crate::data::types::AssetKind;

/// One tab per asset kind, mutually exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Typography,
    Colors,
    Gradients,
    Logos,
    Icons,
    Components,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Typography,
        Tab::Colors,
        Tab::Gradients,
        Tab::Logos,
        Tab::Icons,
        Tab::Components,
    ];

    /// The asset kind this tab shows
    pub fn kind(&self) -> AssetKind {
        match self {
            Tab::Typography => AssetKind::Typography,
            Tab::Colors => AssetKind::Color,
            Tab::Gradients => AssetKind::Gradient,
            Tab::Logos => AssetKind::Logo,
            Tab::Icons => AssetKind::Icon,
            Tab::Components => AssetKind::Component,
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind().label()
    }
}

/// Commands handled by the shell controller
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    SelectTab(Tab),
    ToggleTheme,
    /// Encode every partition and open the share dialog with the result
    ShareAll,
    CloseShareDialog,
}

/// Read-only view of the shell state for front ends
#[derive(Debug, Clone, PartialEq)]
pub struct ShellSnapshot {
    pub active_tab: Tab,
    pub theme: Theme,
    /// Share URL while the dialog is open
    pub share_dialog: Option<String>,
    /// Record count per kind, in tab order
    pub counts: [(AssetKind, usize); 6],
}
