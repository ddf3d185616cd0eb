//! Navigation bar
//!
//! Classification stays pure; `navigate` additionally remembers the last
//! active tab so the host can skip redundant highlight updates.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use navtab_routes::{ClassificationInput, TabDefinition, TabSet};

use crate::config::Config;
use crate::Result;

/// One entry of the highlight model handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    /// Primary path of the tab
    pub href: String,
    pub active: bool,
}

/// Result of a navigation event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavUpdate {
    pub items: Vec<NavItem>,
    /// Label of the active tab, if any
    pub active: Option<String>,
    /// Whether the active tab differs from the previous event
    pub changed: bool,
}

pub struct NavBar {
    tabs: Arc<TabSet>,
    /// Active label from the last `navigate` call
    last_active: Arc<RwLock<Option<String>>>,
}

impl NavBar {
    pub fn new(tabs: TabSet) -> Self {
        Self {
            tabs: Arc::new(tabs),
            last_active: Arc::new(RwLock::new(None)),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.tab_set()?))
    }

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    /// Active tab for `input`. Does not touch the last-active record.
    pub fn active_tab(&self, input: &ClassificationInput) -> Option<&TabDefinition> {
        self.tabs.classify(input)
    }

    /// Highlight model for `input`, one item per tab in declaration order
    pub fn items(&self, input: &ClassificationInput) -> Vec<NavItem> {
        let active = self.active_tab(input).map(|tab| tab.label());
        self.build_items(active)
    }

    /// Classify a navigation event and record its active tab
    pub fn navigate(&self, input: &ClassificationInput) -> NavUpdate {
        let active = self.active_tab(input).map(|tab| tab.label().to_string());
        let items = self.build_items(active.as_deref());

        let changed = {
            let mut last = self.last_active.write();
            let changed = *last != active;
            if changed {
                *last = active.clone();
            }
            changed
        };

        if changed {
            tracing::info!(
                path = %input.path(),
                active = ?active,
                "Active tab changed"
            );
        }

        NavUpdate {
            items,
            active,
            changed,
        }
    }

    /// Label recorded by the last `navigate` call
    pub fn last_active(&self) -> Option<String> {
        self.last_active.read().clone()
    }

    /// Forget the recorded active tab
    pub fn reset(&self) {
        *self.last_active.write() = None;
    }

    fn build_items(&self, active: Option<&str>) -> Vec<NavItem> {
        self.tabs
            .iter()
            .map(|tab| NavItem {
                label: tab.label().to_string(),
                href: tab.primary_path().to_string(),
                active: Some(tab.label()) == active,
            })
            .collect()
    }
}

impl Clone for NavBar {
    fn clone(&self) -> Self {
        Self {
            tabs: Arc::clone(&self.tabs),
            last_active: Arc::clone(&self.last_active),
        }
    }
}
