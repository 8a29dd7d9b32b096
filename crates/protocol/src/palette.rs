//! Named colors used by the default chart style.
//!
//! These mirror the CSS color names the hand-curated datasets historically
//! used for their category scales. Custom styles are free to supply any
//! [`Color`](crate::Color) — this module is only the built-in vocabulary.

use crate::types::Color;

pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

/// The two alternating fallback fills for lanes without a category scale.
pub const LANE_GRAY_LIGHT: Color = Color::rgb(0xcc, 0xcc, 0xcc);
pub const LANE_GRAY_DARK: Color = Color::rgb(0x99, 0x99, 0x99);

pub const LIGHT_GREEN: Color = Color::rgb(0x90, 0xee, 0x90);
pub const ORANGE: Color = Color::rgb(0xff, 0xa5, 0x00);
pub const LIGHT_GRAY: Color = Color::rgb(0xd3, 0xd3, 0xd3);
pub const LIGHT_BLUE: Color = Color::rgb(0xad, 0xd8, 0xe6);
pub const LIGHT_YELLOW: Color = Color::rgb(0xff, 0xff, 0xe0);

/// Party red/blue used by the presidents scale.
pub const PARTY_RED: Color = Color::rgb(0xe9, 0x1d, 0x0e);
pub const PARTY_BLUE: Color = Color::rgb(0x23, 0x20, 0x66);
