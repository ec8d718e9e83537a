//! Fixed-layout page geometry and the two report renderers.
//!
//! Every geometric constant of the printed output lives here by name so the
//! page arithmetic stays independently testable: canvas widths, row heights,
//! the condensed three-group split, and the logo coordinates.

pub mod condensed;
pub mod full;
pub mod widths;

use crate::canvas::LogoSpot;
use crate::palette::{ROOKIE_HIGHLIGHT, Rgb8};

/// Whitelisted columns of the full report, in print order
pub const FULL_COLUMNS: [&str; 12] = [
    "Rank",
    "ADP",
    "Player Name",
    "Team",
    "Pos",
    "Pos Rank",
    "Tier",
    "Proj",
    "Value",
    "Auction Value",
    "Risk Rank",
    "Rookie",
];

/// Columns shown by each condensed column group
pub const CONDENSED_COLUMNS: [&str; 5] = ["Rank", "ADP", "Player Name", "Team", "Pos"];

pub const FULL_ROW_LIMIT: usize = 250;
pub const CONDENSED_ROW_LIMIT: usize = 200;

/// Width targets the full-report column plan must sum to exactly
pub const FULL_TARGET_PORTRAIT: u32 = 190;
pub const FULL_TARGET_LANDSCAPE: u32 = 275;

pub const MIN_COL_WIDTH: u32 = 7;
pub const MAX_COL_WIDTH: u32 = 35;

/// Columns forced to MIN_COL_WIDTH regardless of content
pub const SMALL_COLUMNS: [&str; 5] = ["ADP", "Tier", "Pos", "Proj", "Value"];

/// Cell text is truncated to this many characters
pub const CELL_TEXT_MAX: usize = 20;

/// Bottom margin that triggers pagination in the full report
pub const PAGE_BREAK_MARGIN: f32 = 10.0;

pub const FULL_ROW_HEIGHT: f32 = 6.0;
pub const CONDENSED_ROW_HEIGHT: f32 = 4.0;

/// Fixed per-field widths of one condensed column group (mm)
pub const CONDENSED_COL_WIDTHS: [f32; 5] = [8.0, 7.0, 27.0, 8.0, 7.0];

/// Horizontal start offset of each condensed column group (mm)
pub const CONDENSED_GROUP_X: [f32; 3] = [10.0, 75.0, 140.0];

/// Contiguous row-partition sizes of the condensed report. Fixed constants,
/// never computed from the actual row count.
pub const CONDENSED_SPLIT: [usize; 3] = [67, 67, 66];

/// Logo placements (top-down page coordinates, mm)
pub const FULL_LOGO_SPOTS: [LogoSpot; 2] = [
    LogoSpot { x: 147.0, y: -2.0, width: 35.0 },
    LogoSpot { x: 27.0, y: -2.0, width: 35.0 },
];
pub const CONDENSED_LOGO_SPOTS: [LogoSpot; 2] = [
    LogoSpot { x: 152.0, y: -1.0, width: 35.0 },
    LogoSpot { x: 22.0, y: -1.0, width: 35.0 },
];

/// Fill color of one full-report cell. Only the rookie marker cell may
/// deviate from the row's base color, and only for the exact marker text.
pub fn full_cell_fill(row_fill: Rgb8, is_rookie_column: bool, value: &str) -> Rgb8 {
    if is_rookie_column && value == "Rookie" { ROOKIE_HIGHLIGHT } else { row_fill }
}

/// Truncate to at most `max` characters without splitting a code point
pub fn truncate_cell(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((ix, _)) => &s[..ix],
        None => s,
    }
}
