//! Domain layer - Core business logic and entities

pub mod catalog;
pub mod error;
pub mod sizing;

pub use catalog::{
    AirConditionerModel, CatalogRepository, CatalogValidationError, InMemoryCatalogRepository,
    Recommendation, SeriesDescription,
};
pub use error::DomainError;
pub use sizing::{
    DEFAULT_CEILING_HEIGHT, Orientation, RoomType, SizingRequest, SizingValidationError,
    estimate_cooling_capacity,
};

impl From<CatalogValidationError> for DomainError {
    fn from(err: CatalogValidationError) -> Self {
        DomainError::invalid_param(err.param(), err.to_string())
    }
}

impl From<SizingValidationError> for DomainError {
    fn from(err: SizingValidationError) -> Self {
        DomainError::invalid_param(err.param(), err.to_string())
    }
}
