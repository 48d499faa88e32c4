//! Cooling-capacity estimation

use super::entity::{DEFAULT_CEILING_HEIGHT, SizingRequest};

/// Base cooling load per ping of floor area, in kW
pub const BASE_CAPACITY_PER_PING: f64 = 0.5;

/// Extra load for rooms with large window surfaces
pub const LARGE_WINDOW_FACTOR: f64 = 1.1;

/// Decimal places kept in the estimate
pub const CAPACITY_DECIMALS: usize = 1;

/// Recommended cooling capacity in kW for the described room.
///
/// Ceilings above the reference height scale the load proportionally; lower
/// ceilings are not credited.
pub fn estimate_cooling_capacity(request: &SizingRequest) -> f64 {
    let mut capacity = request.area * BASE_CAPACITY_PER_PING;

    if request.height > DEFAULT_CEILING_HEIGHT {
        capacity *= request.height / DEFAULT_CEILING_HEIGHT;
    }

    capacity *= request.room_type.factor();
    capacity *= request.orientation.factor();

    if request.has_large_windows {
        capacity *= LARGE_WINDOW_FACTOR;
    }

    round_to(capacity, CAPACITY_DECIMALS)
}

/// Rounds the exact binary value, ties to even, so 1.45 (stored just below)
/// becomes 1.4 and 0.25 becomes 0.2
fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}
