pub mod axis;
pub mod bands;
pub mod cursor;
