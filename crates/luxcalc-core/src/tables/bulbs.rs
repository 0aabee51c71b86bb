use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LuxcalcError;

/// Bulb technology and color temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BulbType {
    LedWarm,
    #[default]
    LedNeutral,
    LedCold,
    Fluorescent,
    Incandescent,
}

impl BulbType {
    pub const ALL: [BulbType; 5] = [
        BulbType::LedWarm,
        BulbType::LedNeutral,
        BulbType::LedCold,
        BulbType::Fluorescent,
        BulbType::Incandescent,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            BulbType::LedWarm => "led-warm",
            BulbType::LedNeutral => "led-neutral",
            BulbType::LedCold => "led-cold",
            BulbType::Fluorescent => "fluorescent",
            BulbType::Incandescent => "incandescent",
        }
    }

    pub fn entry(&self) -> &'static BulbTypeEntry {
        &BULB_TYPES[*self as usize]
    }

    /// Luminous efficacy (lm/W)
    pub fn lumens_per_watt(&self) -> u32 {
        self.entry().lumens_per_watt
    }
}

impl fmt::Display for BulbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BulbType {
    type Err = LuxcalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_bulb_type(s)
            .map(|entry| entry.id)
            .ok_or_else(|| LuxcalcError::UnknownBulbType { id: s.to_string() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BulbTypeEntry {
    pub id: BulbType,
    pub name: &'static str,
    pub lumens_per_watt: u32,
    /// Color temperature (K)
    pub color_temp: u32,
    pub description: &'static str,
}

pub static BULB_TYPES: [BulbTypeEntry; 5] = [
    BulbTypeEntry {
        id: BulbType::LedWarm,
        name: "LED Warm",
        lumens_per_watt: 110,
        color_temp: 2700,
        description: "Warm cozy light",
    },
    BulbTypeEntry {
        id: BulbType::LedNeutral,
        name: "LED Neutral",
        lumens_per_watt: 110,
        color_temp: 4000,
        description: "Natural daylight",
    },
    BulbTypeEntry {
        id: BulbType::LedCold,
        name: "LED Cold",
        lumens_per_watt: 110,
        color_temp: 6500,
        description: "Cold bright light",
    },
    BulbTypeEntry {
        id: BulbType::Fluorescent,
        name: "Fluorescent",
        lumens_per_watt: 65,
        color_temp: 4000,
        description: "Energy-saving tubes",
    },
    BulbTypeEntry {
        id: BulbType::Incandescent,
        name: "Incandescent",
        lumens_per_watt: 12,
        color_temp: 2700,
        description: "Classic warm light",
    },
];

/// Look up a bulb type by its identifier
pub fn find_bulb_type(id: &str) -> Option<&'static BulbTypeEntry> {
    BULB_TYPES.iter().find(|entry| entry.id.id() == id)
}
