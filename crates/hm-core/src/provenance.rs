//! Provenance tagging for topic results.
//!
//! The topic repository never fails a list fetch; it substitutes static data
//! instead. `Sourced` keeps that substitution visible so callers can tell
//! live data from fallback data.

use serde::Serialize;

/// Where a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Fetched from the remote topic API
    Live,
    /// Substituted from the static fallback catalog
    Fallback,
}

impl Provenance {
    /// Lowercase name, as used in logs and metric labels
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value tagged with its provenance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sourced<T> {
    pub value: T,
    pub provenance: Provenance,
}

impl<T> Sourced<T> {
    /// Tag `value` as fetched from the API
    pub const fn live(value: T) -> Self {
        Self {
            value,
            provenance: Provenance::Live,
        }
    }

    /// Tag `value` as taken from the fallback catalog
    pub const fn fallback(value: T) -> Self {
        Self {
            value,
            provenance: Provenance::Fallback,
        }
    }

    /// Whether the value came from the API
    pub fn is_live(&self) -> bool {
        self.provenance == Provenance::Live
    }

    /// Whether the value came from the fallback catalog
    pub fn is_fallback(&self) -> bool {
        self.provenance == Provenance::Fallback
    }

    /// Drop the tag
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Transform the value, keeping the provenance
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            value: f(self.value),
            provenance: self.provenance,
        }
    }
}

impl<T> std::ops::Deref for Sourced<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preserves_provenance() {
        let sourced = Sourced::fallback(vec![1, 2, 3]).map(|v| v.len());
        assert!(sourced.is_fallback());
        assert_eq!(sourced.into_inner(), 3);
    }

    #[test]
    fn test_deref_and_display() {
        let sourced = Sourced::live("topics".to_string());
        assert_eq!(sourced.len(), 6);
        assert_eq!(sourced.provenance.to_string(), "live");
        assert_eq!(Provenance::Fallback.as_str(), "fallback");
    }
}
