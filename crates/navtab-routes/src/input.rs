//! Classification input
//!
//! The host passes the current path explicitly on every navigation event,
//! optionally with a label that forces a tab.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::RouteError;
use crate::Result;

/// Base used to resolve relative locations such as `/pay?x=1`.
const LOCAL_BASE: &str = "http://localhost/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationInput {
    /// Path being viewed, e.g. `/stocks/AAPL`
    pub current_path: String,
    /// Label that takes priority over path matching when it names a known tab
    #[serde(default)]
    pub explicit_override: Option<String>,
}

impl ClassificationInput {
    /// Use `path` verbatim
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            current_path: path.into(),
            explicit_override: None,
        }
    }

    /// Build from a full or relative location, keeping only its path.
    ///
    /// Query strings and fragments are dropped and the path is percent-decoded:
    /// `https://app.example/stocks/AAPL?range=1y` → `/stocks/AAPL`,
    /// `/fonds/%C3%A9pargne` → `/fonds/épargne`.
    pub fn from_location(location: &str) -> Result<Self> {
        let location = location.trim();
        let base = Url::parse(LOCAL_BASE)
            .map_err(|e| RouteError::InvalidLocation(e.to_string()))?;
        let url = base
            .join(location)
            .map_err(|e| RouteError::InvalidLocation(format!("{}: {}", location, e)))?;

        let path = percent_decode_str(url.path())
            .decode_utf8()
            .map_err(|e| RouteError::InvalidLocation(format!("{}: {}", location, e)))?;

        Ok(Self::new(path))
    }

    pub fn with_override(mut self, label: impl Into<String>) -> Self {
        self.explicit_override = Some(label.into());
        self
    }

    /// Set or clear the override
    pub fn set_override(&mut self, label: Option<String>) {
        self.explicit_override = label;
    }

    pub fn path(&self) -> &str {
        &self.current_path
    }

    pub fn override_label(&self) -> Option<&str> {
        self.explicit_override.as_deref()
    }
}

impl From<&str> for ClassificationInput {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ClassificationInput {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_path_verbatim() {
        let input = ClassificationInput::new("/stocks/AAPL?range=1y");
        assert_eq!(input.path(), "/stocks/AAPL?range=1y");
        assert!(input.override_label().is_none());
    }

    #[test]
    fn test_from_absolute_location() {
        let input =
            ClassificationInput::from_location("https://app.example.com/stocks/AAPL?range=1y#top")
                .unwrap();
        assert_eq!(input.path(), "/stocks/AAPL");
    }

    #[test]
    fn test_from_relative_location() {
        let input = ClassificationInput::from_location("/payment/confirm?id=42").unwrap();
        assert_eq!(input.path(), "/payment/confirm");

        let input = ClassificationInput::from_location("").unwrap();
        assert_eq!(input.path(), "/");
    }

    #[test]
    fn test_from_location_decodes_path() {
        let input = ClassificationInput::from_location("/fonds/épargne").unwrap();
        assert_eq!(input.path(), "/fonds/épargne");

        let input = ClassificationInput::from_location("/fonds/%C3%A9pargne?x=1").unwrap();
        assert_eq!(input.path(), "/fonds/épargne");

        let input = ClassificationInput::from_location("/pay now").unwrap();
        assert_eq!(input.path(), "/pay now");

        let input = ClassificationInput::from_location("https://app.example/pay%20now").unwrap();
        assert_eq!(input.path(), "/pay now");
    }

    #[test]
    fn test_from_location_rejects_invalid_utf8() {
        let result = ClassificationInput::from_location("/pay/%FF");
        assert!(matches!(result, Err(RouteError::InvalidLocation(_))));
    }

    #[test]
    fn test_invalid_location() {
        let result = ClassificationInput::from_location("http://[::1");
        assert!(matches!(result, Err(RouteError::InvalidLocation(_))));
    }

    #[test]
    fn test_override() {
        let mut input = ClassificationInput::new("/home").with_override("invest");
        assert_eq!(input.override_label(), Some("invest"));

        input.set_override(None);
        assert!(input.override_label().is_none());
    }
}
