//! One-shot catalog queries printed as plain-text tables

use std::fmt::Write as _;

use crate::api::AppState;
use crate::config::{AppConfig, LoggingConfig};
use crate::domain::{AirConditionerModel, Orientation, RoomType, SeriesDescription, SizingRequest};
use crate::infrastructure::logging;
use crate::infrastructure::services::{AreaQuery, PriceRangeQuery, SizingAdvice};

use super::{AreaArgs, CalculateArgs, PriceArgs};

pub const NO_MATCH_MESSAGE: &str = "no matching model found";

const MODEL_HEADERS: [&str; 8] = [
    "Brand", "Model", "Series", "Type", "kW", "Area", "Price", "Efficiency",
];

/// `area <AREA> [--brand]`
pub async fn area(args: AreaArgs) -> anyhow::Result<()> {
    let state = connect().await?;
    let models = state
        .catalog_service
        .find_by_area(&AreaQuery {
            area: args.area,
            brand: args.brand,
        })
        .await?;

    print!("{}", render_models(&models));
    Ok(())
}

/// `price <MIN> <MAX> [--brand]`
pub async fn price(args: PriceArgs) -> anyhow::Result<()> {
    let state = connect().await?;
    let models = state
        .catalog_service
        .find_by_price_range(&PriceRangeQuery {
            min_price: args.min,
            max_price: args.max,
            brand: args.brand,
        })
        .await?;

    print!("{}", render_models(&models));
    Ok(())
}

/// `series`
pub async fn series() -> anyhow::Result<()> {
    let state = connect().await?;
    let series = state.catalog_service.list_series().await?;

    print!("{}", render_series(&series));
    Ok(())
}

/// `calculate <AREA> [--height] [--room-type] [--direction] [--windows]`
pub async fn calculate(args: CalculateArgs) -> anyhow::Result<()> {
    let state = connect().await?;
    let advice = state.advisor_service.advise(sizing_request(&args)).await?;

    print!("{}", render_advice(&advice));
    Ok(())
}

async fn connect() -> anyhow::Result<AppState> {
    dotenvy::dotenv().ok();

    let config = super::serve::load_config();
    logging::init_cli_logging(&quiet(&config));

    crate::create_app_state_with_config(&config).await
}

/// CLI output stays on stdout; only warnings reach stderr unless `RUST_LOG` says otherwise
fn quiet(config: &AppConfig) -> LoggingConfig {
    LoggingConfig {
        level: "warn".to_string(),
        ..config.logging.clone()
    }
}

fn sizing_request(args: &CalculateArgs) -> SizingRequest {
    let mut request = SizingRequest::new(args.area).with_large_windows(args.windows);

    if let Some(height) = args.height {
        request = request.with_height(height);
    }
    if let Some(room_type) = &args.room_type {
        request = request.with_room_type(RoomType::parse_lenient(room_type));
    }
    if let Some(direction) = &args.direction {
        request = request.with_orientation(Orientation::parse_lenient(direction));
    }

    request
}

pub fn render_models(models: &[AirConditionerModel]) -> String {
    if models.is_empty() {
        return format!("{}\n", NO_MATCH_MESSAGE);
    }

    let rows: Vec<Vec<String>> = models
        .iter()
        .map(|m| {
            vec![
                m.brand().unwrap_or("-").to_string(),
                m.model_number().to_string(),
                m.series_name().to_string(),
                m.kind().to_string(),
                format!("{:.1}", m.cooling_capacity()),
                m.area_range_label(),
                m.price().to_string(),
                m.energy_efficiency_rating().to_string(),
            ]
        })
        .collect();

    render_table(&MODEL_HEADERS, &rows)
}

pub fn render_series(series: &[SeriesDescription]) -> String {
    if series.is_empty() {
        return "no series found\n".to_string();
    }

    let rows: Vec<Vec<String>> = series
        .iter()
        .map(|s| vec![s.series_name().to_string(), s.feature_description().to_string()])
        .collect();

    render_table(&["Series", "Features"], &rows)
}

pub fn render_advice(advice: &SizingAdvice) -> String {
    let mut out = format!("Required cooling capacity: {:.1} kW\n", advice.capacity);

    out.push_str(&render_models(advice.recommendation.models()));
    if let Some(advisory) = advice.recommendation.advisory() {
        let _ = writeln!(out, "Note: {}", advisory);
    }

    out
}

/// Left-aligned columns sized to their widest cell
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in rows {
        push_row(&mut out, row, &widths);
    }

    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();

    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}
