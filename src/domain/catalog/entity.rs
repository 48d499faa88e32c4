//! Catalog entities - air-conditioner models and series descriptions

use serde::{Deserialize, Serialize};

/// One air-conditioner SKU from the reference catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AirConditionerModel {
    /// Manufacturer, absent in single-brand datasets
    #[serde(skip_serializing_if = "Option::is_none")]
    brand: Option<String>,

    /// Unique model number
    model_number: String,

    /// Product line the model belongs to
    series_name: String,

    /// Unit type (wall-mounted split, window, ...)
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    kind: String,

    /// Rated cooling capacity in kW
    cooling_capacity: f64,

    /// Smallest suitable room area in ping, inclusive
    suitable_area_min: f64,

    /// Largest suitable room area in ping, inclusive
    suitable_area_max: f64,

    /// Price in whole currency units
    price: i64,

    energy_efficiency_rating: String,

    features: String,
}

impl AirConditionerModel {
    /// Create a new model with required fields
    pub fn new(
        model_number: impl Into<String>,
        series_name: impl Into<String>,
        kind: impl Into<String>,
        cooling_capacity: f64,
        suitable_area: (f64, f64),
        price: i64,
    ) -> Self {
        Self {
            brand: None,
            model_number: model_number.into(),
            series_name: series_name.into(),
            kind: kind.into(),
            cooling_capacity,
            suitable_area_min: suitable_area.0,
            suitable_area_max: suitable_area.1,
            price,
            energy_efficiency_rating: String::new(),
            features: String::new(),
        }
    }

    /// Builder-style method to set the brand
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Builder-style method to set the energy efficiency rating
    pub fn with_energy_efficiency_rating(mut self, rating: impl Into<String>) -> Self {
        self.energy_efficiency_rating = rating.into();
        self
    }

    /// Builder-style method to set the feature description
    pub fn with_features(mut self, features: impl Into<String>) -> Self {
        self.features = features.into();
        self
    }

    // Getters

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn model_number(&self) -> &str {
        &self.model_number
    }

    pub fn series_name(&self) -> &str {
        &self.series_name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn cooling_capacity(&self) -> f64 {
        self.cooling_capacity
    }

    pub fn suitable_area_min(&self) -> f64 {
        self.suitable_area_min
    }

    pub fn suitable_area_max(&self) -> f64 {
        self.suitable_area_max
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn energy_efficiency_rating(&self) -> &str {
        &self.energy_efficiency_rating
    }

    pub fn features(&self) -> &str {
        &self.features
    }

    /// Whether `area` lies inside the suitable area range (bounds inclusive)
    pub fn fits_area(&self, area: f64) -> bool {
        self.suitable_area_min <= area && area <= self.suitable_area_max
    }

    /// Whether the price lies inside `[min_price, max_price]`
    pub fn priced_within(&self, min_price: i64, max_price: i64) -> bool {
        min_price <= self.price && self.price <= max_price
    }

    /// Capacity left over once `target` kW is covered; negative when undersized
    pub fn capacity_margin(&self, target: f64) -> f64 {
        self.cooling_capacity - target
    }

    /// Suitable area rendered as `min~max`, e.g. `8~10`
    pub fn area_range_label(&self) -> String {
        format!(
            "{}~{}",
            format_area(self.suitable_area_min),
            format_area(self.suitable_area_max)
        )
    }
}

fn format_area(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Shared feature text for a product series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SeriesDescription {
    series_name: String,
    feature_description: String,
}

impl SeriesDescription {
    pub fn new(series_name: impl Into<String>, feature_description: impl Into<String>) -> Self {
        Self {
            series_name: series_name.into(),
            feature_description: feature_description.into(),
        }
    }

    pub fn series_name(&self) -> &str {
        &self.series_name
    }

    pub fn feature_description(&self) -> &str {
        &self.feature_description
    }
}
