pub mod band;
pub mod event;

pub use band::{Band, Lane};
pub use event::{EndBound, Event};
