//! The sixteen-color palette. Entries are referenced by index everywhere else, so their
//! order is part of the configuration.
use tilecfg_core::models::Palette;

pub const PALETTE_SIZE: usize = 16;

/// Solarized dark: base03..base3 followed by the eight accents.
pub const SOLARIZED_DARK: [&str; PALETTE_SIZE] = [
    "#002b36", // base03, bar background
    "#073642", // base02, unfocused border
    "#586e75",
    "#657b83",
    "#839496", // base0, default text
    "#93a1a1",
    "#eee8d5", // base2, highlighted text
    "#fdf6e3",
    "#b58900", // yellow, window title background
    "#cb4b16",
    "#dc322f", // red, low battery
    "#d33682",
    "#6c71c4", // violet, focused border
    "#268bd2", // blue, current group
    "#2aa198",
    "#859900",
];

/// # Panics
///
/// Only if a built-in palette holds an invalid color, which the tests rule out.
pub fn solarized_dark() -> Palette {
    Palette::from_hex(&SOLARIZED_DARK).expect("built-in palette is valid")
}
