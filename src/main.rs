use aircon_advisor::cli::{self, Cli, Command};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Init(args) => cli::init::run(args).await,
        Command::Area(args) => cli::query::area(args).await,
        Command::Price(args) => cli::query::price(args).await,
        Command::Series => cli::query::series().await,
        Command::Calculate(args) => cli::query::calculate(args).await,
    }
}
