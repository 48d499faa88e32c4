//! Catalog request and response types

use serde::{Deserialize, Serialize};

use crate::domain::{AirConditionerModel, SeriesDescription};
use crate::infrastructure::services::SizingAdvice;

/// `POST /api/search_by_area` form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AreaSearchForm {
    pub area: Option<String>,
    pub brand: Option<String>,
}

/// `POST /api/search_by_price` form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceSearchForm {
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub brand: Option<String>,
}

/// `POST /api/calculate` form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateForm {
    pub area: Option<String>,
    pub height: Option<String>,
    pub room_type: Option<String>,
    pub direction: Option<String>,
    pub windows: Option<String>,
}

/// Catalog row as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub model_number: String,
    pub series_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub cooling_capacity: f64,
    /// Display label such as `7~8`
    pub suitable_area: String,
    pub suitable_area_min: f64,
    pub suitable_area_max: f64,
    pub price: i64,
    pub energy_efficiency_rating: String,
    pub features: String,
}

impl ModelRecord {
    pub fn from_domain(model: &AirConditionerModel) -> Self {
        Self {
            brand: model.brand().map(str::to_string),
            model_number: model.model_number().to_string(),
            series_name: model.series_name().to_string(),
            kind: model.kind().to_string(),
            cooling_capacity: model.cooling_capacity(),
            suitable_area: model.area_range_label(),
            suitable_area_min: model.suitable_area_min(),
            suitable_area_max: model.suitable_area_max(),
            price: model.price(),
            energy_efficiency_rating: model.energy_efficiency_rating().to_string(),
            features: model.features().to_string(),
        }
    }

    pub fn from_models(models: &[AirConditionerModel]) -> Vec<Self> {
        models.iter().map(Self::from_domain).collect()
    }
}

/// Series description as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesRecord {
    pub series_name: String,
    pub feature_description: String,
}

impl SeriesRecord {
    pub fn from_domain(series: &SeriesDescription) -> Self {
        Self {
            series_name: series.series_name().to_string(),
            feature_description: series.feature_description().to_string(),
        }
    }
}

/// `POST /api/calculate` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub capacity: f64,
    pub suggestions: Vec<ModelRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}

impl CalculationResponse {
    pub fn from_advice(advice: &SizingAdvice) -> Self {
        Self {
            capacity: advice.capacity,
            suggestions: ModelRecord::from_models(advice.recommendation.models()),
            advisory: advice.recommendation.advisory().map(str::to_string),
        }
    }
}
