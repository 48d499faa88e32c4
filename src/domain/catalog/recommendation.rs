//! Recommendation result produced by the selector

use serde::{Deserialize, Serialize};

use super::AirConditionerModel;

/// Default number of suggestions returned for a target capacity
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Notice attached when no single unit covers the requested capacity
pub const CAPACITY_EXCEEDED_ADVISORY: &str = "Required cooling capacity exceeds the largest single unit; \
     consider installing multiple units or a different system type";

/// Models suggested for a target cooling capacity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    target_capacity: f64,
    models: Vec<AirConditionerModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    advisory: Option<String>,
}

impl Recommendation {
    /// Models that each cover the target on their own
    pub fn sufficient(target_capacity: f64, models: Vec<AirConditionerModel>) -> Self {
        Self {
            target_capacity,
            models,
            advisory: None,
        }
    }

    /// Fallback to the largest available unit, carrying the capacity advisory
    pub fn largest_available(target_capacity: f64, largest: AirConditionerModel) -> Self {
        Self {
            target_capacity,
            models: vec![largest],
            advisory: Some(CAPACITY_EXCEEDED_ADVISORY.to_string()),
        }
    }

    /// Nothing to recommend, the catalog is empty
    pub fn empty(target_capacity: f64) -> Self {
        Self::sufficient(target_capacity, Vec::new())
    }

    pub fn target_capacity(&self) -> f64 {
        self.target_capacity
    }

    pub fn models(&self) -> &[AirConditionerModel] {
        &self.models
    }

    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    pub fn is_fallback(&self) -> bool {
        self.advisory.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
