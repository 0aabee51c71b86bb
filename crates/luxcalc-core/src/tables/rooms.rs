use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LuxcalcError;

/// Room usage type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    Bedroom,
    #[default]
    Living,
    Kitchen,
    Office,
    Bathroom,
    Nursery,
}

impl RoomType {
    /// All room types, in table order
    pub const ALL: [RoomType; 6] = [
        RoomType::Bedroom,
        RoomType::Living,
        RoomType::Kitchen,
        RoomType::Office,
        RoomType::Bathroom,
        RoomType::Nursery,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            RoomType::Bedroom => "bedroom",
            RoomType::Living => "living",
            RoomType::Kitchen => "kitchen",
            RoomType::Office => "office",
            RoomType::Bathroom => "bathroom",
            RoomType::Nursery => "nursery",
        }
    }

    /// Reference data for this room type
    pub fn entry(&self) -> &'static RoomTypeEntry {
        &ROOM_TYPES[*self as usize]
    }

    /// Required illuminance (lux)
    pub fn lux(&self) -> u32 {
        self.entry().lux
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for RoomType {
    type Err = LuxcalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_room_type(s)
            .map(|entry| entry.id)
            .ok_or_else(|| LuxcalcError::UnknownRoomType { id: s.to_string() })
    }
}

/// Illuminance norm and presentation data for a room type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoomTypeEntry {
    pub id: RoomType,
    pub name: &'static str,
    /// Required illuminance (lux)
    pub lux: u32,
    /// Recommended color temperature (K)
    pub color_temp: u32,
    pub description: &'static str,
    pub accent_color: &'static str,
}

pub static ROOM_TYPES: [RoomTypeEntry; 6] = [
    RoomTypeEntry {
        id: RoomType::Bedroom,
        name: "Bedroom",
        lux: 150,
        color_temp: 2700,
        description: "Cozy warm light for resting",
        accent_color: "#FFB347",
    },
    RoomTypeEntry {
        id: RoomType::Living,
        name: "Living Room",
        lux: 200,
        color_temp: 3000,
        description: "Bright general light for hosting guests",
        accent_color: "#FFA726",
    },
    RoomTypeEntry {
        id: RoomType::Kitchen,
        name: "Kitchen",
        lux: 300,
        color_temp: 4000,
        description: "Very bright task lighting",
        accent_color: "#FF7043",
    },
    RoomTypeEntry {
        id: RoomType::Office,
        name: "Office",
        lux: 300,
        color_temp: 4000,
        description: "Glare-free light for focused work",
        accent_color: "#4A90E2",
    },
    RoomTypeEntry {
        id: RoomType::Bathroom,
        name: "Bathroom",
        lux: 250,
        color_temp: 3500,
        description: "Bright light for a wet zone",
        accent_color: "#26C6DA",
    },
    RoomTypeEntry {
        id: RoomType::Nursery,
        name: "Nursery",
        lux: 200,
        color_temp: 3000,
        description: "Soft diffused light",
        accent_color: "#AB47BC",
    },
];

/// Look up a room type by its identifier
pub fn find_room_type(id: &str) -> Option<&'static RoomTypeEntry> {
    ROOM_TYPES.iter().find(|entry| entry.id.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_enum() {
        for (entry, room) in ROOM_TYPES.iter().zip(RoomType::ALL) {
            assert_eq!(entry.id, room);
            assert_eq!(room.entry().id, room);
        }
    }

    #[test]
    fn test_entry_invariants() {
        for entry in &ROOM_TYPES {
            assert!(entry.lux > 0 && entry.lux < 1000, "{} lux out of range", entry.id);
            assert!(entry.color_temp > 0 && entry.color_temp <= 10000);
            assert_eq!(entry.accent_color.len(), 7);
            assert!(entry.accent_color.starts_with('#'));
            assert!(entry.accent_color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_find_room_type() {
        assert_eq!(find_room_type("living").map(|r| r.lux), Some(200));
        assert_eq!(find_room_type("kitchen").map(|r| r.lux), Some(300));
        assert!(find_room_type("garage").is_none());
        assert!(find_room_type("Living").is_none());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("bathroom".parse::<RoomType>().unwrap(), RoomType::Bathroom);
        assert_eq!(RoomType::Nursery.to_string(), "nursery");
        assert!("attic".parse::<RoomType>().is_err());
    }

    #[test]
    fn test_serde_uses_identifiers() {
        let json = serde_json::to_string(&RoomType::Living).unwrap();
        assert_eq!(json, "\"living\"");

        let parsed: RoomType = serde_json::from_str("\"office\"").unwrap();
        assert_eq!(parsed, RoomType::Office);
    }
}
