use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LuxcalcError;

/// Surface finish, from most to least reflective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurfaceColor {
    White,
    LightBeige,
    Gray,
    Dark,
}

impl SurfaceColor {
    pub const ALL: [SurfaceColor; 4] =
        [SurfaceColor::White, SurfaceColor::LightBeige, SurfaceColor::Gray, SurfaceColor::Dark];

    pub fn id(&self) -> &'static str {
        match self {
            SurfaceColor::White => "white",
            SurfaceColor::LightBeige => "light-beige",
            SurfaceColor::Gray => "gray",
            SurfaceColor::Dark => "dark",
        }
    }

    pub fn entry(&self) -> &'static SurfaceColorEntry {
        &SURFACE_COLORS[*self as usize]
    }

    /// Reflection coefficient in [0, 1]
    pub fn reflection(&self) -> f64 {
        self.entry().reflection_coefficient
    }
}

impl fmt::Display for SurfaceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SurfaceColor {
    type Err = LuxcalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_surface_color(s)
            .map(|entry| entry.id)
            .ok_or_else(|| LuxcalcError::UnknownSurfaceColor { id: s.to_string() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceColorEntry {
    pub id: SurfaceColor,
    pub name: &'static str,
    pub reflection_coefficient: f64,
    pub color: &'static str,
}

/// Ordered by strictly decreasing reflection coefficient
pub static SURFACE_COLORS: [SurfaceColorEntry; 4] = [
    SurfaceColorEntry {
        id: SurfaceColor::White,
        name: "White",
        reflection_coefficient: 0.7,
        color: "#FFFFFF",
    },
    SurfaceColorEntry {
        id: SurfaceColor::LightBeige,
        name: "Light Beige",
        reflection_coefficient: 0.5,
        color: "#F5E6D3",
    },
    SurfaceColorEntry {
        id: SurfaceColor::Gray,
        name: "Gray",
        reflection_coefficient: 0.3,
        color: "#808080",
    },
    SurfaceColorEntry {
        id: SurfaceColor::Dark,
        name: "Dark",
        reflection_coefficient: 0.1,
        color: "#2D2D2D",
    },
];

/// Look up a surface color by its identifier
pub fn find_surface_color(id: &str) -> Option<&'static SurfaceColorEntry> {
    SURFACE_COLORS.iter().find(|entry| entry.id.id() == id)
}
