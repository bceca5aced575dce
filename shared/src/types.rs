//! Vocabulary types used across the platform
//!
//! Soil types, regions and seasons travel over the wire as their display
//! strings ("Black Soil", "North India", "Kharif").

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Soil classification accepted by the prediction service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SoilType {
    #[default]
    #[serde(rename = "Black Soil")]
    Black,
    #[serde(rename = "Red Soil")]
    Red,
    #[serde(rename = "Laterite Soil")]
    Laterite,
    #[serde(rename = "Alluvial Soil")]
    Alluvial,
    #[serde(rename = "Clay Soil")]
    Clay,
}

impl SoilType {
    pub const ALL: [SoilType; 5] = [
        SoilType::Black,
        SoilType::Red,
        SoilType::Laterite,
        SoilType::Alluvial,
        SoilType::Clay,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Black => "Black Soil",
            SoilType::Red => "Red Soil",
            SoilType::Laterite => "Laterite Soil",
            SoilType::Alluvial => "Alluvial Soil",
            SoilType::Clay => "Clay Soil",
        }
    }
}

/// Geographic region of the field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Region {
    #[default]
    #[serde(rename = "North India")]
    North,
    #[serde(rename = "South India")]
    South,
    #[serde(rename = "East India")]
    East,
    #[serde(rename = "West India")]
    West,
    #[serde(rename = "Central India")]
    Central,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::North,
        Region::South,
        Region::East,
        Region::West,
        Region::Central,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Region::North => "North India",
            Region::South => "South India",
            Region::East => "East India",
            Region::West => "West India",
            Region::Central => "Central India",
        }
    }
}

/// Growing season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Season {
    /// Monsoon crop, sown June-July
    #[default]
    Kharif,
    /// Winter crop, sown October-November
    Rabi,
    /// Short summer crop between Rabi and Kharif
    Zaid,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Kharif, Season::Rabi, Season::Zaid];

    pub fn label(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
        }
    }
}

/// Crop names the prediction service knows about.
///
/// `crop_type` fields stay free text; this list only feeds form options.
pub const KNOWN_CROPS: [&str; 10] = [
    "Rice",
    "Wheat",
    "Maize",
    "Cotton",
    "Sugarcane",
    "Soybean",
    "Peanut",
    "Coconut",
    "Lentil",
    "Chickpea",
];

/// Error returned when a vocabulary label is not recognised
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! label_impls {
    ($ty:ident, $kind:literal) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label() == s)
                    .ok_or_else(|| UnknownLabel {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

label_impls!(SoilType, "soil type");
label_impls!(Region, "region");
label_impls!(Season, "season");
