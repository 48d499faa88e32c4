//! Sizing domain - room attributes and cooling-capacity estimation

mod entity;
mod estimator;
mod validation;

pub use entity::{DEFAULT_CEILING_HEIGHT, Orientation, RoomType, SizingRequest};
pub use estimator::{
    BASE_CAPACITY_PER_PING, CAPACITY_DECIMALS, LARGE_WINDOW_FACTOR, estimate_cooling_capacity,
};
pub use validation::{
    MAX_CEILING_HEIGHT, SizingValidationError, validate_ceiling_height, validate_room_area,
};
