//! HTTP request and response types

pub mod catalog;
pub mod error;
pub mod form;

pub use catalog::{
    AreaSearchForm, CalculateForm, CalculationResponse, ModelRecord, PriceSearchForm,
    SeriesRecord,
};
pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use form::Form;
