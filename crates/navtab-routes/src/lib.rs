//! navtab route classification
//!
//! Decides which tab of the navigation bar owns the current location:
//! 1. Explicit override label (case-insensitive) → that tab
//! 2. Path equal to one of a tab's prefixes → that tab
//! 3. Path under one of a tab's prefixes → that tab
//! 4. Otherwise no tab is active
//!
//! Tabs are scanned in declaration order and the first match wins.

mod classify;
mod error;
mod input;
mod set;
mod tab;

pub use classify::{classify, classify_with_reason, Classification, MatchKind};
pub use error::RouteError;
pub use input::ClassificationInput;
pub use set::{PrefixOverlap, TabSet};
pub use tab::TabDefinition;

pub type Result<T> = std::result::Result<T, RouteError>;
