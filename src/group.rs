//! Group data model.
//!
//! Groups are supplied by the host process and are read-only here. Their
//! order defines both the cycle order and the visual order of the overlay.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque group identifier assigned by the host process.
///
/// The wire format carries integer ids; nothing in this crate interprets
/// the value beyond equality and echoing it back in a switch notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub i64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed palette of named group colors the host can assign.
///
/// Unknown names deserialize to [`GroupColor::Unknown`] rather than failing,
/// and render with the fallback swatch color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupColor {
    Grey,
    Blue,
    Red,
    Yellow,
    Green,
    Pink,
    Purple,
    Cyan,
    Orange,
    /// Any color name outside the fixed palette, and the default when the
    /// host omits the field. Renders with the fallback swatch color.
    #[default]
    #[serde(other)]
    Unknown,
}

impl GroupColor {
    /// All nine palette colors, in palette order.
    pub const PALETTE: [Self; 9] = [
        Self::Grey,
        Self::Blue,
        Self::Red,
        Self::Yellow,
        Self::Green,
        Self::Pink,
        Self::Purple,
        Self::Cyan,
        Self::Orange,
    ];

    /// Parse a color name, mapping anything unrecognized to `Unknown`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "grey" => Self::Grey,
            "blue" => Self::Blue,
            "red" => Self::Red,
            "yellow" => Self::Yellow,
            "green" => Self::Green,
            "pink" => Self::Pink,
            "purple" => Self::Purple,
            "cyan" => Self::Cyan,
            "orange" => Self::Orange,
            _ => Self::Unknown,
        }
    }

    /// The canonical wire name, or `"unknown"` outside the palette.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grey => "grey",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Cyan => "cyan",
            Self::Orange => "orange",
            Self::Unknown => "unknown",
        }
    }
}

/// One switchable tab group as reported by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Host-assigned identifier, echoed back on commit.
    pub id: GroupId,
    /// Display title.
    pub title: String,
    /// Swatch color.
    #[serde(default)]
    pub color: GroupColor,
}

impl Group {
    /// Create a new group.
    #[must_use]
    pub fn new(id: impl Into<GroupId>, title: impl Into<String>, color: GroupColor) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color,
        }
    }
}

impl From<i64> for GroupId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}
