use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The end boundary of a raw event record.
///
/// Datasets mark still-running events with the literal `"present"`. That
/// sentinel is carried as an explicit tagged state and resolved to a concrete
/// instant exactly once, when the dataset is loaded — downstream code only
/// ever sees numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EndBound {
    /// A known end instant (milliseconds since the Unix epoch).
    Fixed(f64),
    /// Still running; resolves to "now" at load time.
    Ongoing,
}

impl EndBound {
    pub fn resolve(self, now_ms: f64) -> f64 {
        match self {
            Self::Fixed(ms) => ms,
            Self::Ongoing => now_ms,
        }
    }
}

/// One timed occurrence within a lane, fully resolved and ready for layout.
///
/// Timestamps are `f64` milliseconds since the Unix epoch. Constructed once
/// at load time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Display label.
    pub name: String,
    /// Preferred label when horizontal space is limited.
    pub short_name: Option<String>,
    /// Start instant (ms since epoch).
    pub start: f64,
    /// End instant (ms since epoch), sentinel already resolved.
    pub end: f64,
    /// Lane-specific classification fields (`state`, `type`, …), used only
    /// for color selection.
    pub tags: BTreeMap<String, String>,
}

impl Event {
    pub fn new(name: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            name: name.into(),
            short_name: None,
            start,
            end,
            tags: BTreeMap::new(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Look up a classification attribute. `"name"` resolves to the display
    /// name so scales can key on it (e.g. a per-president color table).
    pub fn attribute(&self, key: &str) -> Option<&str> {
        if key == "name" {
            Some(&self.name)
        } else {
            self.tags.get(key).map(String::as_str)
        }
    }
}
