//! Dataset loading: one YAML file per lane, each an ordered sequence of
//! event records.
//!
//! Loading is all-or-nothing per file — an unreadable or unparsable file is
//! fatal, there is no partial-dataset mode. Individual records missing a
//! start or end are dropped silently (the files are hand-curated and partial
//! entries are expected mid-edit); drops are logged at debug level.
//!
//! The `"present"` end sentinel is resolved against a single "now" captured
//! once per load; a second load fully replaces the first and re-resolves.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::model::{EndBound, Event};
use crate::timefmt::{now_ms, parse_instant};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// One raw record as it appears in a lane file. Scalars stay untyped here so
/// a year written as `2001` and a date written as `2001-06-03` both load.
#[derive(Debug, Deserialize)]
struct EventRecord {
    #[serde(default)]
    name: Option<serde_yaml::Value>,
    #[serde(default, rename = "shortName", alias = "short_name")]
    short_name: Option<String>,
    #[serde(default)]
    start: Option<serde_yaml::Value>,
    #[serde(default)]
    end: Option<serde_yaml::Value>,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_yaml::Value>,
}

impl EventRecord {
    /// Resolve to an [`Event`], or `None` when either endpoint is missing or
    /// unparsable after sentinel resolution.
    fn resolve(self, now: f64) -> Option<Event> {
        let start = self.start.as_ref().and_then(scalar_text)?;
        let start = parse_instant(&start)?;

        let end_text = self.end.as_ref().and_then(scalar_text)?;
        let end = if end_text == "present" {
            EndBound::Ongoing
        } else {
            EndBound::Fixed(parse_instant(&end_text)?)
        };

        let name = self
            .name
            .as_ref()
            .and_then(scalar_text)
            .unwrap_or_default();
        let tags = self
            .extra
            .iter()
            .filter_map(|(key, value)| Some((key.clone(), scalar_text(value)?)))
            .collect();

        Some(Event {
            name,
            short_name: self.short_name,
            start,
            end: end.resolve(now),
            tags,
        })
    }
}

fn scalar_text(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse one lane's YAML source, resolving sentinels against `now`.
pub fn parse_lane(yaml: &str, now: f64) -> Result<Vec<Event>, LoadError> {
    let records: Vec<EventRecord> = serde_yaml::from_str(yaml)?;
    let total = records.len();
    let events: Vec<Event> = records.into_iter().filter_map(|r| r.resolve(now)).collect();
    if events.len() < total {
        debug!(dropped = total - events.len(), total, "dropped records without both endpoints");
    }
    Ok(events)
}

/// Load one lane file.
pub fn load_lane_file(path: &Path, now: f64) -> Result<Vec<Event>, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let events = parse_lane(&text, now)?;
    debug!(path = %path.display(), events = events.len(), "loaded lane");
    Ok(events)
}

/// A loaded dataset: named lanes in a fixed order. The order given here is
/// the vertical stacking order of the chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub lanes: Vec<(String, Vec<Event>)>,
}

impl Dataset {
    pub fn from_lanes(lanes: Vec<(String, Vec<Event>)>) -> Self {
        Self { lanes }
    }

    /// Load every `*.yml`/`*.yaml` file in a directory as a lane. Lane names
    /// come from the file stems ("life-decades.yml" → "Life Decades") and
    /// lanes are ordered by file name, so the order is deterministic.
    pub fn load_dir(dir: &Path) -> Result<Self, LoadError> {
        let now = now_ms();
        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| {
                matches!(
                    path.extension().and_then(|e| e.to_str()),
                    Some("yml" | "yaml")
                )
            })
            .collect();
        paths.sort();

        let mut lanes = Vec::with_capacity(paths.len());
        for path in paths {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(lane_name_from_stem)
                .unwrap_or_default();
            lanes.push((name, load_lane_file(&path, now)?));
        }
        Ok(Self { lanes })
    }

    pub fn push_lane(&mut self, name: impl Into<String>, events: Vec<Event>) {
        self.lanes.push((name.into(), events));
    }

    /// Earliest start and latest end across all lanes, if any events exist.
    pub fn extent(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (_, events) in &self.lanes {
            for event in events {
                min = min.min(event.start);
                max = max.max(event.end);
            }
        }
        (min < max || (min == max && min.is_finite())).then_some((min, max))
    }
}

/// "life-decades" → "Life Decades", "im" → "Im".
fn lane_name_from_stem(stem: &str) -> String {
    stem.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
