//! Route to tab classification
//!
//! Priority order:
//! 1. Explicit override label → first tab with that label (case-insensitive)
//! 2. Exact match → first tab with a prefix equal to the path
//! 3. Prefix match → first tab with a prefix the path falls under
//!
//! Within each step declaration order decides, not prefix length. An override
//! naming no tab is ignored. No match at all is a normal `None`.

use serde::Serialize;

use crate::input::ClassificationInput;
use crate::tab::TabDefinition;

/// How the active tab was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Override label named the tab
    Override,
    /// Path equals one of the tab's prefixes
    Exact,
    /// Path continues a prefix with `/`
    Segment,
    /// Path starts with a nested prefix, no separator required
    Nested,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Override => "override",
            MatchKind::Exact => "exact",
            MatchKind::Segment => "segment",
            MatchKind::Nested => "nested",
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification<'a> {
    pub tab: &'a TabDefinition,
    pub matched_by: MatchKind,
    /// Prefix that matched; `None` for overrides
    pub prefix: Option<&'a str>,
}

/// Active tab for `input`, if any
pub fn classify<'a>(
    tabs: &'a [TabDefinition],
    input: &ClassificationInput,
) -> Option<&'a TabDefinition> {
    classify_with_reason(tabs, input).map(|c| c.tab)
}

/// Like [`classify`], also reporting which rule decided
pub fn classify_with_reason<'a>(
    tabs: &'a [TabDefinition],
    input: &ClassificationInput,
) -> Option<Classification<'a>> {
    let path = input.path();

    let found = by_override(tabs, input.override_label())
        .or_else(|| by_exact(tabs, path))
        .or_else(|| by_prefix(tabs, path));

    match &found {
        Some(c) => tracing::trace!(
            path = %path,
            tab = %c.tab.label(),
            matched_by = %c.matched_by,
            "Classified route"
        ),
        None => tracing::trace!(path = %path, "No active tab for route"),
    }

    found
}

fn by_override<'a>(tabs: &'a [TabDefinition], label: Option<&str>) -> Option<Classification<'a>> {
    let label = label?;
    tabs.iter()
        .find(|tab| tab.has_label(label))
        .map(|tab| Classification {
            tab,
            matched_by: MatchKind::Override,
            prefix: None,
        })
}

fn by_exact<'a>(tabs: &'a [TabDefinition], path: &str) -> Option<Classification<'a>> {
    tabs.iter().find_map(|tab| {
        tab.exact_prefix(path).map(|prefix| Classification {
            tab,
            matched_by: MatchKind::Exact,
            prefix: Some(prefix),
        })
    })
}

fn by_prefix<'a>(tabs: &'a [TabDefinition], path: &str) -> Option<Classification<'a>> {
    tabs.iter().find_map(|tab| {
        tab.parent_prefix(path).map(|(prefix, nested)| Classification {
            tab,
            matched_by: if nested {
                MatchKind::Nested
            } else {
                MatchKind::Segment
            },
            prefix: Some(prefix),
        })
    })
}
