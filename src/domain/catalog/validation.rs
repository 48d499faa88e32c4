//! Catalog query validation utilities

use std::fmt;

/// Maximum length for a brand filter
pub const MAX_BRAND_LENGTH: usize = 50;

/// Catalog query validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogValidationError {
    /// Area is negative, zero or not a finite number
    InvalidArea { value: f64 },
    /// Price bound below zero
    NegativePrice { value: i64 },
    /// Brand filter is blank
    EmptyBrand,
    /// Brand filter exceeds maximum length
    BrandTooLong { length: usize, max: usize },
}

impl CatalogValidationError {
    /// Name of the request parameter the error refers to
    pub fn param(&self) -> &'static str {
        match self {
            Self::InvalidArea { .. } => "area",
            Self::NegativePrice { .. } => "price",
            Self::EmptyBrand | Self::BrandTooLong { .. } => "brand",
        }
    }
}

impl fmt::Display for CatalogValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArea { value } => {
                write!(f, "Invalid area {}: must be a positive number", value)
            }
            Self::NegativePrice { value } => {
                write!(f, "Invalid price {}: must not be negative", value)
            }
            Self::EmptyBrand => write!(f, "Brand filter cannot be empty"),
            Self::BrandTooLong { length, max } => {
                write!(f, "Brand filter too long: {} characters (max {})", length, max)
            }
        }
    }
}

impl std::error::Error for CatalogValidationError {}

/// Validate a room area used as a search key
pub fn validate_area(area: f64) -> Result<(), CatalogValidationError> {
    if !area.is_finite() || area <= 0.0 {
        return Err(CatalogValidationError::InvalidArea { value: area });
    }

    Ok(())
}

/// Validate both bounds of a price range.
///
/// An inverted range is accepted and simply matches nothing.
pub fn validate_price_bounds(min_price: i64, max_price: i64) -> Result<(), CatalogValidationError> {
    for value in [min_price, max_price] {
        if value < 0 {
            return Err(CatalogValidationError::NegativePrice { value });
        }
    }

    Ok(())
}

/// Validate a brand filter
pub fn validate_brand(brand: &str) -> Result<(), CatalogValidationError> {
    let trimmed = brand.trim();

    if trimmed.is_empty() {
        return Err(CatalogValidationError::EmptyBrand);
    }

    let length = trimmed.chars().count();

    if length > MAX_BRAND_LENGTH {
        return Err(CatalogValidationError::BrandTooLong {
            length,
            max: MAX_BRAND_LENGTH,
        });
    }

    Ok(())
}
