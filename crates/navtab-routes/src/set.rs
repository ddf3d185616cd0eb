//! Validated tab set
//!
//! Built once at startup and read-only afterwards. Share it behind an `Arc`;
//! classification takes `&self` only.

use serde::{Deserialize, Serialize};

use crate::classify::{classify, classify_with_reason, Classification};
use crate::error::RouteError;
use crate::input::ClassificationInput;
use crate::tab::{is_nested, is_segment_parent, TabDefinition};
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TabDefinition>", into = "Vec<TabDefinition>")]
pub struct TabSet {
    tabs: Vec<TabDefinition>,
}

/// A prefix of a later tab that an earlier tab already claims. Paths under
/// `prefix` resolve to `earlier` because declaration order wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixOverlap {
    pub earlier: String,
    pub later: String,
    /// Prefix declared by the later tab
    pub prefix: String,
    /// Prefix of the earlier tab that claims it
    pub shadowed_by: String,
}

impl TabSet {
    pub fn new(tabs: Vec<TabDefinition>) -> Result<Self> {
        Self::check(&tabs)?;

        let set = Self { tabs };

        for overlap in set.overlaps() {
            tracing::warn!(
                earlier = %overlap.earlier,
                later = %overlap.later,
                prefix = %overlap.prefix,
                shadowed_by = %overlap.shadowed_by,
                "Tab prefix shadowed by an earlier tab"
            );
        }

        tracing::debug!(tabs = set.tabs.len(), "Built tab set");

        Ok(set)
    }

    /// Validate `tabs` without building a set or logging overlaps
    pub fn check(tabs: &[TabDefinition]) -> Result<()> {
        for (i, tab) in tabs.iter().enumerate() {
            validate(tab)?;
            if tabs[..i].iter().any(|earlier| earlier.has_label(tab.label())) {
                return Err(RouteError::DuplicateLabel(tab.label().to_string()));
            }
        }
        Ok(())
    }

    pub fn classify(&self, input: &ClassificationInput) -> Option<&TabDefinition> {
        classify(&self.tabs, input)
    }

    pub fn classify_with_reason(&self, input: &ClassificationInput) -> Option<Classification<'_>> {
        classify_with_reason(&self.tabs, input)
    }

    /// Case-insensitive lookup by label
    pub fn get(&self, label: &str) -> Option<&TabDefinition> {
        self.tabs.iter().find(|tab| tab.has_label(label))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TabDefinition> {
        self.tabs.iter()
    }

    pub fn as_slice(&self) -> &[TabDefinition] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Prefixes that an earlier tab claims before the declaring tab is reached
    pub fn overlaps(&self) -> Vec<PrefixOverlap> {
        let mut found = Vec::new();

        for (i, later) in self.tabs.iter().enumerate() {
            for prefix in later.match_prefixes() {
                let claim = self.tabs[..i].iter().find_map(|earlier| {
                    earlier
                        .match_prefixes()
                        .iter()
                        .find(|p| claims(p, prefix))
                        .map(|p| (earlier, p))
                });

                if let Some((earlier, shadowed_by)) = claim {
                    found.push(PrefixOverlap {
                        earlier: earlier.label().to_string(),
                        later: later.label().to_string(),
                        prefix: prefix.clone(),
                        shadowed_by: shadowed_by.clone(),
                    });
                }
            }
        }

        found
    }
}

/// Whether paths under `prefix` would be matched by `earlier` first
fn claims(earlier: &str, prefix: &str) -> bool {
    earlier == prefix
        || is_segment_parent(earlier, prefix)
        || (is_nested(earlier) && prefix.starts_with(earlier))
}

fn validate(tab: &TabDefinition) -> Result<()> {
    if tab.label().trim().is_empty() {
        return Err(RouteError::EmptyLabel);
    }

    for prefix in tab.match_prefixes() {
        if !prefix.starts_with('/') {
            return Err(RouteError::InvalidPrefix {
                label: tab.label().to_string(),
                prefix: prefix.clone(),
            });
        }
    }

    Ok(())
}

impl TryFrom<Vec<TabDefinition>> for TabSet {
    type Error = RouteError;

    fn try_from(tabs: Vec<TabDefinition>) -> Result<Self> {
        Self::new(tabs)
    }
}

impl From<TabSet> for Vec<TabDefinition> {
    fn from(set: TabSet) -> Self {
        set.tabs
    }
}

impl<'a> IntoIterator for &'a TabSet {
    type Item = &'a TabDefinition;
    type IntoIter = std::slice::Iter<'a, TabDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.tabs.iter()
    }
}
