//! Tab definition
//!
//! A tab owns its primary path plus any number of extra prefixes. The primary
//! path is always the first entry of `match_prefixes`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawTabDefinition")]
pub struct TabDefinition {
    /// Display label, unique within a tab set
    label: String,
    /// Landing page of the tab
    primary_path: String,
    /// Paths owned by this tab, primary path first
    match_prefixes: Vec<String>,
}

/// Wire shape: `match_prefixes` may omit the primary path.
#[derive(Deserialize)]
struct RawTabDefinition {
    label: String,
    primary_path: String,
    #[serde(default)]
    match_prefixes: Vec<String>,
}

impl From<RawTabDefinition> for TabDefinition {
    fn from(raw: RawTabDefinition) -> Self {
        raw.match_prefixes
            .into_iter()
            .fold(TabDefinition::new(raw.label, raw.primary_path), |tab, prefix| {
                tab.with_prefix(prefix)
            })
    }
}

impl TabDefinition {
    pub fn new(label: impl Into<String>, primary_path: impl Into<String>) -> Self {
        let primary_path = primary_path.into();
        Self {
            label: label.into(),
            match_prefixes: vec![primary_path.clone()],
            primary_path,
        }
    }

    /// Add an owned prefix. Duplicates are ignored.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if !self.match_prefixes.contains(&prefix) {
            self.match_prefixes.push(prefix);
        }
        self
    }

    pub fn with_prefixes<I, S>(self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        prefixes
            .into_iter()
            .fold(self, |tab, prefix| tab.with_prefix(prefix))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn primary_path(&self) -> &str {
        &self.primary_path
    }

    pub fn match_prefixes(&self) -> &[String] {
        &self.match_prefixes
    }

    /// Case-insensitive label comparison, as used for overrides
    pub fn has_label(&self, label: &str) -> bool {
        self.label.to_lowercase() == label.to_lowercase()
    }

    /// The first prefix equal to `path`
    pub(crate) fn exact_prefix(&self, path: &str) -> Option<&str> {
        self.match_prefixes
            .iter()
            .map(String::as_str)
            .find(|prefix| *prefix == path)
    }

    /// The first prefix `path` falls under, with how it matched
    pub(crate) fn parent_prefix(&self, path: &str) -> Option<(&str, bool)> {
        self.match_prefixes.iter().find_map(|prefix| {
            if is_segment_parent(prefix, path) {
                Some((prefix.as_str(), false))
            } else if is_nested(prefix) && path.starts_with(prefix.as_str()) {
                Some((prefix.as_str(), true))
            } else {
                None
            }
        })
    }
}

/// `path` starts with `prefix/`
pub(crate) fn is_segment_parent(prefix: &str, path: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// A prefix with a `/` after its leading character, e.g. `/invest/funds`.
/// Nested prefixes also match as raw string prefixes.
pub(crate) fn is_nested(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    chars.next();
    chars.as_str().contains('/')
}
