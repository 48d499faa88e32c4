//! CLI module for the air-conditioner advisor
//!
//! Provides subcommands for running the advisor in different modes:
//! - `serve`: HTTP API + UI
//! - `init`: create and seed the catalog database
//! - `area`, `price`, `series`, `calculate`: one-shot catalog queries

pub mod init;
pub mod query;
pub mod serve;

use clap::{Args, Parser, Subcommand};

/// Air-conditioner catalog lookup and sizing advisor
#[derive(Parser)]
#[command(name = "aircon-advisor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (API + UI)
    Serve,

    /// Create and seed the catalog database
    Init(InitArgs),

    /// List models suited to a room area (ping)
    Area(AreaArgs),

    /// List models within a price range
    Price(PriceArgs),

    /// List product series and their features
    Series,

    /// Estimate the cooling capacity a room needs and suggest models
    Calculate(CalculateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Delete an existing database file before seeding
    #[arg(long)]
    pub reset: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AreaArgs {
    /// Room area in ping
    #[arg(allow_negative_numbers = true)]
    pub area: f64,

    /// Only list models of this brand
    #[arg(long)]
    pub brand: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct PriceArgs {
    /// Minimum price (inclusive)
    #[arg(allow_negative_numbers = true)]
    pub min: i64,

    /// Maximum price (inclusive)
    #[arg(allow_negative_numbers = true)]
    pub max: i64,

    /// Only list models of this brand
    #[arg(long)]
    pub brand: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct CalculateArgs {
    /// Room area in ping
    #[arg(allow_negative_numbers = true)]
    pub area: f64,

    /// Ceiling height in metres
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// general, kitchen or computer_room
    #[arg(long)]
    pub room_type: Option<String>,

    /// general, east_west or south
    #[arg(long)]
    pub direction: Option<String>,

    /// The room has large windows
    #[arg(long)]
    pub windows: bool,
}
