//! Init command - creates and seeds the catalog database

use anyhow::Context;
use tracing::info;

use super::InitArgs;
use crate::domain::CatalogRepository;
use crate::infrastructure::logging;
use crate::infrastructure::storage::{StorageFactory, StorageType};

/// Create the SQLite catalog, optionally removing an existing file first
pub async fn run(args: InitArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = super::serve::load_config();
    logging::init_cli_logging(&config.logging);

    let storage = config.database.storage_config()?;
    if storage.storage_type() != StorageType::Sqlite {
        println!("In-memory catalog selected; nothing to initialize");
        return Ok(());
    }

    let sqlite = config.database.sqlite_config();

    if args.reset {
        if let Some(path) = sqlite.database_path() {
            if tokio::fs::try_exists(&path).await? {
                tokio::fs::remove_file(&path)
                    .await
                    .with_context(|| format!("failed to remove {}", path.display()))?;
                info!(path = %path.display(), "Removed existing catalog database");
            }
        }
    }

    let repository = StorageFactory::create_sqlite(&sqlite).await?;
    let models = repository.count_models().await?;
    let series = repository.list_series().await?.len();

    println!(
        "Catalog initialized at {}: {} models, {} series",
        sqlite.url, models, series
    );

    Ok(())
}
