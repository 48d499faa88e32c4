//! Capacity calculation handler

use axum::{Json, extract::State};

use crate::api::state::AppState;
use crate::api::types::form::{optional_decimal, parse_flag, present, required_decimal};
use crate::api::types::{ApiError, CalculateForm, CalculationResponse, Form};
use crate::domain::{Orientation, RoomType, SizingRequest};

/// POST /api/calculate
pub async fn calculate(
    State(state): State<AppState>,
    Form(form): Form<CalculateForm>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let request = sizing_request(&form)?;
    let advice = state.advisor_service.advise(request).await?;

    Ok(Json(CalculationResponse::from_advice(&advice)))
}

/// Build a typed request; unrecognized categories fall back to neutral factors
fn sizing_request(form: &CalculateForm) -> Result<SizingRequest, ApiError> {
    let mut request = SizingRequest::new(required_decimal("area", form.area.as_deref())?)
        .with_large_windows(parse_flag(form.windows.as_deref()));

    if let Some(height) = optional_decimal("height", form.height.as_deref())? {
        request = request.with_height(height);
    }
    if let Some(room_type) = present(form.room_type.as_deref()) {
        request = request.with_room_type(RoomType::parse_lenient(room_type));
    }
    if let Some(direction) = present(form.direction.as_deref()) {
        request = request.with_orientation(Orientation::parse_lenient(direction));
    }

    Ok(request)
}
