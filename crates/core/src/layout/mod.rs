pub mod pack;
pub mod stack;

pub use pack::{pack, rows_used};
pub use stack::{LayoutConfig, layout};
