use crate::Series;
use crate::series;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

pub const PALETTE: [Color; 8] = [
    Color::from_hex(0xef4444),
    Color::from_hex(0xf59e0b),
    Color::from_hex(0x22c55e),
    Color::from_hex(0x3b82f6),
    Color::from_hex(0x8b5cf6),
    Color::from_hex(0xec4899),
    Color::from_hex(0xf97316),
    Color::from_hex(0x06b6d4),
];

/// Color of anything whose encounter status is unknown.
pub const UNKNOWN: Color = Color::from_hex(0x64748b);

/// The color of a series, given every series in load order.
///
/// Series beyond the palette size wrap around and share colors. An id
/// missing from `games` uses `fallback` as its position instead.
pub fn of(games: &[Series], series: &series::Id, fallback: usize) -> Color {
    let index = games
        .iter()
        .position(|candidate| &candidate.id == series)
        .unwrap_or(fallback);

    PALETTE[index % PALETTE.len()]
}
