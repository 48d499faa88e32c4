//! Sizing request and its categorical room attributes

use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation::{SizingValidationError, validate_ceiling_height, validate_room_area};

/// Ceiling height assumed when none is given, in metres
pub const DEFAULT_CEILING_HEIGHT: f64 = 2.8;

/// What the room is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    #[default]
    General,
    Kitchen,
    ComputerRoom,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [Self::General, Self::Kitchen, Self::ComputerRoom];

    /// Load multiplier applied by the estimator
    pub fn factor(self) -> f64 {
        match self {
            Self::General => 1.0,
            Self::Kitchen => 1.2,
            Self::ComputerRoom => 1.3,
        }
    }

    /// Parse a form or CLI value; anything unrecognized is `General`
    pub fn parse_lenient(value: &str) -> Self {
        match normalize(value).as_str() {
            "kitchen" | "廚房" => Self::Kitchen,
            "computer_room" | "computerroom" | "電腦室" => Self::ComputerRoom,
            _ => Self::General,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Kitchen => "kitchen",
            Self::ComputerRoom => "computer_room",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which way the room's main exposure faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    General,
    EastWest,
    South,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [Self::General, Self::EastWest, Self::South];

    /// Solar-gain multiplier applied by the estimator
    pub fn factor(self) -> f64 {
        match self {
            Self::General => 1.0,
            Self::EastWest => 1.2,
            Self::South => 1.1,
        }
    }

    /// Parse a form or CLI value; anything unrecognized is `General`
    pub fn parse_lenient(value: &str) -> Self {
        match normalize(value).as_str() {
            "east_west" | "eastwest" | "東西向" => Self::EastWest,
            "south" | "南向" => Self::South,
            _ => Self::General,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::EastWest => "east_west",
            Self::South => "south",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase().replace(['-', ' '], "_")
}

/// Room characteristics submitted for a capacity estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingRequest {
    /// Floor area in ping
    pub area: f64,
    /// Ceiling height in metres
    pub height: f64,
    pub room_type: RoomType,
    pub orientation: Orientation,
    pub has_large_windows: bool,
}

impl SizingRequest {
    /// Request for `area` with every other attribute at its default
    pub fn new(area: f64) -> Self {
        Self {
            area,
            height: DEFAULT_CEILING_HEIGHT,
            room_type: RoomType::default(),
            orientation: Orientation::default(),
            has_large_windows: false,
        }
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn with_room_type(mut self, room_type: RoomType) -> Self {
        self.room_type = room_type;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_large_windows(mut self, has_large_windows: bool) -> Self {
        self.has_large_windows = has_large_windows;
        self
    }

    /// Check the numeric attributes
    pub fn validate(&self) -> Result<(), SizingValidationError> {
        validate_room_area(self.area)?;
        validate_ceiling_height(self.height)
    }
}
