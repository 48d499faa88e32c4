//! Sizing input validation

use std::fmt;

/// Upper bound on a plausible ceiling height, in metres
pub const MAX_CEILING_HEIGHT: f64 = 20.0;

/// Sizing validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum SizingValidationError {
    /// Area is not a positive finite number
    InvalidArea { value: f64 },
    /// Ceiling height outside (0, MAX_CEILING_HEIGHT]
    InvalidHeight { value: f64, max: f64 },
}

impl SizingValidationError {
    /// Name of the request parameter the error refers to
    pub fn param(&self) -> &'static str {
        match self {
            Self::InvalidArea { .. } => "area",
            Self::InvalidHeight { .. } => "height",
        }
    }
}

impl fmt::Display for SizingValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArea { value } => {
                write!(f, "Invalid area {}: must be a positive number", value)
            }
            Self::InvalidHeight { value, max } => {
                write!(
                    f,
                    "Invalid ceiling height {}: must be greater than 0 and at most {}",
                    value, max
                )
            }
        }
    }
}

impl std::error::Error for SizingValidationError {}

/// Validate the floor area of a room
pub fn validate_room_area(area: f64) -> Result<(), SizingValidationError> {
    if !area.is_finite() || area <= 0.0 {
        return Err(SizingValidationError::InvalidArea { value: area });
    }

    Ok(())
}

/// Validate a ceiling height
pub fn validate_ceiling_height(height: f64) -> Result<(), SizingValidationError> {
    if !height.is_finite() || height <= 0.0 || height > MAX_CEILING_HEIGHT {
        return Err(SizingValidationError::InvalidHeight {
            value: height,
            max: MAX_CEILING_HEIGHT,
        });
    }

    Ok(())
}
