//! Interval packer: assigns each event a row within its lane such that
//! temporally-overlapping events never share a row, using the minimum
//! number of rows.
//!
//! Events are sorted by start and greedily assigned to the lowest-indexed
//! row whose last event has already ended (first-fit). With start-sorted
//! input this uses exactly as many rows as the maximum number of events
//! active at any instant.

use crate::model::{Band, Event};

/// Pack one lane's events into rows and emit band geometry.
///
/// Input order is arbitrary; output is sorted by start ascending, input
/// order preserved for ties. `padding` is a fixed inter-row pixel gap and
/// `max_row_height` the height of every band:
/// `y_offset(row) = row * (max_row_height + padding)`.
///
/// Callers must filter out events without both endpoints before invoking;
/// the packer assumes every input has a valid interval.
pub fn pack(events: &[Event], padding: f64, max_row_height: f64) -> Vec<Band> {
    let mut ordered: Vec<&Event> = events.iter().collect();
    // sort_by is stable, so ties keep input order.
    ordered.sort_by(|a, b| a.start.total_cmp(&b.start));

    // One entry per open row: the end time of the last band placed there.
    let mut row_ends: Vec<f64> = Vec::new();
    let mut bands = Vec::with_capacity(ordered.len());

    for event in ordered {
        // Touching endpoints do not overlap, so a row ending exactly at this
        // event's start is reusable.
        let row = match row_ends.iter().position(|&end| end <= event.start) {
            Some(row) => row,
            None => {
                row_ends.push(f64::NEG_INFINITY);
                row_ends.len() - 1
            }
        };
        row_ends[row] = event.end;

        bands.push(Band {
            name: event.name.clone(),
            short_name: event.short_name.clone(),
            start: event.start,
            end: event.end,
            tags: event.tags.clone(),
            row: row as u32,
            y_offset: row as f64 * (max_row_height + padding),
            height: max_row_height,
        });
    }

    bands
}

/// Number of rows a packed band list occupies.
pub fn rows_used(bands: &[Band]) -> u32 {
    bands.iter().map(|b| b.row + 1).max().unwrap_or(0)
}
