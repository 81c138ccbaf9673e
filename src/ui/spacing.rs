//! Spacing scale shared by every view.
//!
//! Values are f32; cast with `as i8` for the margin APIs.

pub const SPACING_XS: f32 = 4.0;

pub const SPACING_SM: f32 = 8.0;

pub const SPACING_MD: f32 = 12.0;

pub const SPACING_LG: f32 = 16.0;

pub const SPACING_XL: f32 = 24.0;

/// Gap between report cards, both axes.
pub const GRID_GAP: f32 = 16.0;

pub const RADIUS_MD: u8 = 6;

pub const RADIUS_LG: u8 = 10;

/// Horizontal, vertical.
pub const BUTTON_PADDING: (f32, f32) = (12.0, 6.0);
