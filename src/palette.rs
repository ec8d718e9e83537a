/// Position categories and their fill colors
///
/// The position set is closed: anything outside it (including blank cells)
/// maps to white, meaning no highlight.

pub type Rgb8 = (u8, u8, u8);

pub const WHITE: Rgb8 = (255, 255, 255);
pub const BLACK: Rgb8 = (0, 0, 0);

/// Header row background
pub const HEADER_FILL: Rgb8 = (200, 200, 200);

/// Fill for the rookie marker cell in the full report
pub const ROOKIE_HIGHLIGHT: Rgb8 = (255, 255, 153);

/// Player position group used for color coding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Qb,
    Rb,
    Wr,
    Te,
    K,
    Dst,
}

impl Position {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "QB" => Some(Position::Qb),
            "RB" => Some(Position::Rb),
            "WR" => Some(Position::Wr),
            "TE" => Some(Position::Te),
            "K" => Some(Position::K),
            "DST" => Some(Position::Dst),
            _ => None,
        }
    }

    pub fn fill_color(self) -> Rgb8 {
        match self {
            Position::Qb => (255, 218, 185),  // light orange
            Position::Rb => (144, 238, 144),  // light green
            Position::Wr => (173, 216, 230),  // light blue
            Position::Te => (221, 160, 221),  // light purple
            Position::K => (255, 255, 153),   // light yellow
            Position::Dst => (211, 211, 211), // light gray
        }
    }
}

/// Fill color for a data row given its `Pos` field.
/// Unknown categories and disabled coloring both yield white.
pub fn row_color(pos_field: &str, use_pos_colors: bool) -> Rgb8 {
    if !use_pos_colors {
        return WHITE;
    }
    Position::parse(pos_field).map(Position::fill_color).unwrap_or(WHITE)
}
