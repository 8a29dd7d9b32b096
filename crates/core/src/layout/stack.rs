//! Lane layout engine: packs each lane and stacks the lanes vertically in
//! the caller's order, threading the running offset through explicit return
//! values rather than shared counters.

use crate::layout::pack::{pack, rows_used};
use crate::model::{Event, Lane};

/// Vertical geometry knobs. Defaults match the classic chart: 24 px bands,
/// 3 px between rows, 2 px between lanes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Height of every band.
    pub row_height: f64,
    /// Fixed pixel gap between rows, independent of zoom.
    pub row_padding: f64,
    /// Fixed pixel gap between consecutive lanes.
    pub lane_padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_height: 24.0,
            row_padding: 3.0,
            lane_padding: 2.0,
        }
    }
}

/// Lay out lanes in the given order.
///
/// Per lane: pack the events into rows, compute the lane's vertical extent
/// from the row count, and assign a running vertical offset. The input order
/// is the only thing determining stacking order — no sorting happens here.
///
/// Deterministic: identical input yields identical geometry.
pub fn layout(lanes_in_order: &[(String, Vec<Event>)], config: &LayoutConfig) -> Vec<Lane> {
    let mut out = Vec::with_capacity(lanes_in_order.len());
    let mut offset = 0.0;

    for (name, events) in lanes_in_order {
        let bands = pack(events, config.row_padding, config.row_height);
        let rows = rows_used(&bands);
        let total_height = if rows == 0 {
            0.0
        } else {
            f64::from(rows) * (config.row_height + config.row_padding)
        };

        out.push(Lane {
            name: name.clone(),
            bands,
            vertical_offset: offset,
            total_height,
            rows,
        });

        offset += total_height + config.lane_padding;
    }

    out
}
