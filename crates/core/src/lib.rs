//! lanechart core: dataset loading, interval-packing lane layout, time
//! projection, and view transforms that emit render commands.
//!
//! ```text
//!   YAML files ─▶ Dataset ─▶ layout (interval packing) ─▶ Lane/Band geometry
//!                                                              │
//!   TimeProjection (pan/zoom) ───────▶ views ──▶ RenderCommand[] ─▶ TUI / SVG
//! ```
//!
//! Layout runs once per load; navigation re-projects immutable band times
//! every frame and never re-enters the packer.

pub mod chart;
pub mod color;
pub mod dataset;
pub mod generated;
pub mod layout;
pub mod model;
pub mod projection;
pub mod svg;
pub mod timefmt;
pub mod views;

pub use chart::{Chart, ChartError};
pub use color::{ChartStyle, ColorResolver, LaneStyle, OrdinalScale};
pub use dataset::{Dataset, LoadError};
pub use layout::{LayoutConfig, layout, pack};
pub use model::{Band, EndBound, Event, Lane};
pub use projection::{ProjectionError, TimeProjection};
