//! Catalog schema and built-in reference dataset

use crate::domain::{AirConditionerModel, SeriesDescription};

/// Schema for the two catalog tables
pub const CATALOG_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS air_conditioners (
    model_number TEXT PRIMARY KEY,
    brand TEXT,
    series_name TEXT NOT NULL,
    type TEXT NOT NULL,
    cooling_capacity REAL NOT NULL,
    suitable_area_min REAL NOT NULL,
    suitable_area_max REAL NOT NULL,
    price INTEGER NOT NULL,
    energy_efficiency_rating TEXT NOT NULL DEFAULT '',
    features TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_air_conditioners_price
    ON air_conditioners (price);

CREATE INDEX IF NOT EXISTS idx_air_conditioners_capacity
    ON air_conditioners (cooling_capacity);

CREATE TABLE IF NOT EXISTS series_features (
    series_name TEXT PRIMARY KEY,
    feature_description TEXT NOT NULL
);
"#;

struct Row(
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    f64,
    (f64, f64),
    i64,
    &'static str,
    &'static str,
);

const MODELS: &[Row] = &[
    Row("Daikin", "RXV22VVLT", "Classic Inverter", "wall-mounted split", 2.2, (3.0, 4.0), 24900, "Grade 1", "Inverter compressor, quiet night mode"),
    Row("Daikin", "RXV28VVLT", "Classic Inverter", "wall-mounted split", 2.8, (4.0, 5.0), 28900, "Grade 1", "Inverter compressor, quiet night mode"),
    Row("Daikin", "RXV36VVLT", "Classic Inverter", "wall-mounted split", 3.6, (5.0, 6.0), 33900, "Grade 1", "Inverter compressor, quiet night mode"),
    Row("Daikin", "RXV41VVLT", "Classic Inverter", "wall-mounted split", 4.1, (6.0, 7.0), 37900, "Grade 1", "Inverter compressor, quiet night mode"),
    Row("Daikin", "RXM50VVLT", "Flagship Inverter", "wall-mounted split", 5.0, (7.0, 8.0), 45900, "Grade 1", "Streamer air purification, Wi-Fi control"),
    Row("Daikin", "RXM60VVLT", "Flagship Inverter", "wall-mounted split", 6.0, (8.0, 10.0), 52900, "Grade 1", "Streamer air purification, Wi-Fi control"),
    Row("Daikin", "RXM71VVLT", "Flagship Inverter", "wall-mounted split", 7.1, (10.0, 12.0), 61900, "Grade 1", "Streamer air purification, Wi-Fi control"),
    Row("Daikin", "ARF28NVLT", "Compact Window", "window", 2.8, (4.0, 5.0), 21900, "Grade 3", "Single unit install, washable filter"),
    Row("Daikin", "FCQ140LUV", "Cassette Pro", "ceiling cassette", 14.0, (20.0, 23.0), 128000, "Grade 2", "Four-way airflow for open-plan spaces"),
    Row("Hitachi", "RAC-28JP", "Premium Inverter", "wall-mounted split", 2.8, (4.0, 5.0), 29900, "Grade 1", "Frost wash self-cleaning"),
    Row("Hitachi", "RAC-40JP", "Premium Inverter", "wall-mounted split", 4.0, (6.0, 7.0), 38900, "Grade 1", "Frost wash self-cleaning"),
    Row("Hitachi", "RAC-63JP", "Premium Inverter", "wall-mounted split", 6.3, (9.0, 10.0), 56900, "Grade 1", "Frost wash self-cleaning"),
    Row("Panasonic", "CU-K36FCA2", "Nanoe Standard", "wall-mounted split", 3.6, (5.0, 6.0), 31900, "Grade 2", "nanoe-G air filtering"),
    Row("Panasonic", "CU-K50FCA2", "Nanoe Standard", "wall-mounted split", 5.0, (7.0, 8.0), 42900, "Grade 2", "nanoe-G air filtering"),
    Row("Panasonic", "CU-LJ90BHA2", "Nanoe Deluxe", "wall-mounted split", 9.0, (14.0, 15.0), 79900, "Grade 1", "nanoe X, humidity control"),
];

const SERIES: &[(&str, &str)] = &[
    ("Classic Inverter", "Entry inverter line with steady temperature control and low running noise"),
    ("Flagship Inverter", "Top efficiency line with air purification and app control"),
    ("Compact Window", "One-piece window units for rooms without an outdoor mount"),
    ("Cassette Pro", "Ceiling cassettes for offices and open living areas"),
    ("Premium Inverter", "High-efficiency split units with self-cleaning heat exchanger"),
    ("Nanoe Standard", "Mid-range split units with ion air filtering"),
    ("Nanoe Deluxe", "Large-room units with dehumidification and ion filtering"),
];

/// Built-in catalog rows
pub fn default_models() -> Vec<AirConditionerModel> {
    MODELS
        .iter()
        .map(|Row(brand, number, series, kind, capacity, area, price, rating, features)| {
            AirConditionerModel::new(*number, *series, *kind, *capacity, *area, *price)
                .with_brand(*brand)
                .with_energy_efficiency_rating(*rating)
                .with_features(*features)
        })
        .collect()
}

/// Built-in series descriptions
pub fn default_series() -> Vec<SeriesDescription> {
    SERIES
        .iter()
        .map(|(name, description)| SeriesDescription::new(*name, *description))
        .collect()
}
