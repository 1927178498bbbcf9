use crate::models::ColorRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Tiling algorithms provided by the host. Written by name in config files, in any
/// case (`"monadtall"`, `"MonadTall"`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum LayoutKind {
    /// Main pane on the left, stack on the right.
    MonadTall,
    Max,
    /// Main pane on top, stack below.
    MonadWide,
    Columns,
    Stack,
    Bsp,
    Matrix,
    RatioTile,
    Tile,
    TreeTab,
    VerticalTile,
    Zoomy,
}

pub const LAYOUT_KINDS: [LayoutKind; 12] = [
    LayoutKind::MonadTall,
    LayoutKind::Max,
    LayoutKind::MonadWide,
    LayoutKind::Columns,
    LayoutKind::Stack,
    LayoutKind::Bsp,
    LayoutKind::Matrix,
    LayoutKind::RatioTile,
    LayoutKind::Tile,
    LayoutKind::TreeTab,
    LayoutKind::VerticalTile,
    LayoutKind::Zoomy,
];

#[derive(Debug, Error)]
#[error("Could not parse layout: {0}")]
pub struct ParseLayoutError(String);

impl FromStr for LayoutKind {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LAYOUT_KINDS
            .iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ParseLayoutError(s.to_owned()))
    }
}

impl TryFrom<String> for LayoutKind {
    type Error = ParseLayoutError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LayoutKind> for String {
    fn from(kind: LayoutKind) -> Self {
        kind.name().to_owned()
    }
}

impl LayoutKind {
    /// Lowercase name, as shown by the current layout widgets.
    pub fn name(self) -> &'static str {
        match self {
            Self::MonadTall => "monadtall",
            Self::Max => "max",
            Self::MonadWide => "monadwide",
            Self::Columns => "columns",
            Self::Stack => "stack",
            Self::Bsp => "bsp",
            Self::Matrix => "matrix",
            Self::RatioTile => "ratiotile",
            Self::Tile => "tile",
            Self::TreeTab => "treetab",
            Self::VerticalTile => "verticaltile",
            Self::Zoomy => "zoomy",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Border and gap settings shared by the tiled layouts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LayoutStyle {
    pub border_width: u32,
    pub margin: u32,
    pub border_focus: ColorRef,
    pub border_normal: ColorRef,
    /// Border width when the window is alone on screen.
    pub single_border_width: u32,
}

impl LayoutStyle {
    pub fn colors(&self) -> [&ColorRef; 2] {
        [&self.border_focus, &self.border_normal]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub kind: LayoutKind,
    pub style: LayoutStyle,
}

impl Layout {
    /// Each layout owns its own copy of the style.
    pub fn new(kind: LayoutKind, style: &LayoutStyle) -> Self {
        Self {
            kind,
            style: style.clone(),
        }
    }
}
