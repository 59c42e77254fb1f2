//! Type-safe identifier wrapper for catalog entries.
//!
//! Entry ids are assigned by the upstream API and never change. The id is
//! the only lookup key and the only routing key (`/pokemon/{id}/`), so it
//! gets its own type instead of travelling around as a bare integer.

use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Numeric identifier of a catalog entry, as assigned by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EntryId(pub u32);

impl EntryId {
    /// Return the inner numeric value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }

    /// Render the id zero-padded to three digits with a leading `#`
    /// (`#001`, `#025`, `#1010`).
    pub fn padded(self) -> String {
        format!("#{:03}", self.0)
    }

    /// The id immediately before this one, if any.
    pub const fn previous(self) -> Option<Self> {
        match self.0.checked_sub(1) {
            Some(0) | None => None,
            Some(prev) => Some(Self(prev)),
        }
    }

    /// The id immediately after this one, if it does not exceed `max`.
    pub const fn next_within(self, max: u32) -> Option<Self> {
        if self.0 < max {
            match self.0.checked_add(1) {
                Some(next) => Some(Self(next)),
                None => None,
            }
        } else {
            None
        }
    }
}

impl core::fmt::Display for EntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u32> for EntryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<EntryId> for u32 {
    fn from(id: EntryId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_uses_three_digits_minimum() {
        assert_eq!(EntryId(1).padded(), "#001");
        assert_eq!(EntryId(25).padded(), "#025");
        assert_eq!(EntryId(150).padded(), "#150");
        assert_eq!(EntryId(1010).padded(), "#1010");
    }

    #[test]
    fn previous_stops_at_one() {
        assert_eq!(EntryId(2).previous(), Some(EntryId(1)));
        assert_eq!(EntryId(1).previous(), None);
        assert_eq!(EntryId(0).previous(), None);
    }

    #[test]
    fn next_respects_maximum() {
        assert_eq!(EntryId(1009).next_within(1010), Some(EntryId(1010)));
        assert_eq!(EntryId(1010).next_within(1010), None);
        assert_eq!(EntryId(10_001).next_within(1010), None);
    }

    #[test]
    fn parses_from_string() {
        assert_eq!("25".parse::<EntryId>().ok(), Some(EntryId(25)));
        assert_eq!(" 7 ".parse::<EntryId>().ok(), Some(EntryId(7)));
        assert!("pikachu".parse::<EntryId>().is_err());
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&EntryId(151)).unwrap_or_default();
        assert_eq!(json, "151");
    }
}
