//! SQLite catalog storage with connection pooling

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePool, SqlitePoolOptions};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use super::seed::{CATALOG_SCHEMA, default_models, default_series};
use crate::domain::{AirConditionerModel, CatalogRepository, DomainError, SeriesDescription};

/// A statement-level `BEGIN`, as opposed to the `BEGIN` of a trigger body
static OWN_TRANSACTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^\s*BEGIN(\s+(DEFERRED|IMMEDIATE|EXCLUSIVE))?(\s+TRANSACTION)?\s*;")
        .expect("valid transaction pattern")
});

const MODEL_COLUMNS: &str = "brand, model_number, series_name, type, cooling_capacity, \
     suitable_area_min, suitable_area_max, price, energy_efficiency_rating, features";

/// SQLite storage configuration
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Database connection URL, e.g. `sqlite://aircond.db`
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// SQL script that creates and fills the catalog instead of the built-in dataset
    pub init_script: Option<PathBuf>,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://aircond.db".to_string(),
            max_connections: 5,
            connect_timeout_secs: 30,
            init_script: None,
        }
    }
}

impl SqliteConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Private in-memory database, mostly for tests
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }

    pub fn with_init_script(mut self, path: impl Into<PathBuf>) -> Self {
        self.init_script = Some(path.into());
        self
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Filesystem path of the database, `None` for in-memory databases
    pub fn database_path(&self) -> Option<PathBuf> {
        if self.is_in_memory() {
            return None;
        }

        let path = self
            .url
            .trim_start_matches("sqlite://")
            .trim_start_matches("sqlite:");
        let path = path.split('?').next().unwrap_or(path);

        if path.is_empty() {
            None
        } else {
            Some(PathBuf::from(path))
        }
    }
}

/// Catalog repository backed by a SQLite database.
///
/// Schema creation and seeding run once per repository through
/// [`SqliteCatalogRepository::ensure_initialized`], separately from the
/// per-query connection checkout.
pub struct SqliteCatalogRepository {
    pool: SqlitePool,
    init_script: Option<PathBuf>,
    initialized: OnceCell<()>,
}

impl std::fmt::Debug for SqliteCatalogRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteCatalogRepository")
            .field("init_script", &self.init_script)
            .field("initialized", &self.initialized.initialized())
            .finish()
    }
}

impl SqliteCatalogRepository {
    /// Opens (creating if missing) the database and builds the pool
    pub async fn connect(config: &SqliteConfig) -> Result<Self, DomainError> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| DomainError::configuration(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs));

        // Every connection to :memory: is its own database, so keep exactly one alive
        if config.is_in_memory() {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to open SQLite database: {}", e)))?;

        debug!(url = %config.url, "SQLite pool created");

        Ok(Self {
            pool,
            init_script: config.init_script.clone(),
            initialized: OnceCell::new(),
        })
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates and fills the catalog tables if they are absent.
    ///
    /// Concurrent callers wait on the same initialization; later calls return
    /// immediately.
    pub async fn ensure_initialized(&self) -> Result<(), DomainError> {
        self.initialized
            .get_or_try_init(|| self.initialize())
            .await
            .map(|_| ())
    }

    /// Scripts that open their own transaction run as-is. Everything else runs
    /// under `BEGIN IMMEDIATE`, so a second process waits for the write lock
    /// and then finds the tables already created.
    async fn initialize(&self) -> Result<(), DomainError> {
        let mut conn = self.pool.acquire().await?;

        if table_exists(&mut conn, "air_conditioners").await? {
            debug!("Catalog tables already present");
            return Ok(());
        }

        let script = match &self.init_script {
            Some(path) => Some(read_init_script(path).await?),
            None => None,
        };

        match script.as_deref() {
            Some(script) if manages_own_transaction(script) => {
                if let Err(e) = run_init_script(&mut conn, script).await {
                    rollback_quietly(&mut conn).await;
                    return Err(e);
                }
            }
            script => {
                sqlx::raw_sql("BEGIN IMMEDIATE").execute(&mut *conn).await?;

                match populate(&mut conn, script).await {
                    Ok(()) => {
                        sqlx::raw_sql("COMMIT").execute(&mut *conn).await?;
                    }
                    Err(e) => {
                        rollback_quietly(&mut conn).await;
                        return Err(e);
                    }
                }
            }
        }

        // In-memory pools hold a single connection
        drop(conn);

        let models = self.count_models().await?;
        info!(models, "Catalog database initialized");

        Ok(())
    }

    fn listing_query(filter: &str, brand: Option<&str>) -> String {
        match brand {
            Some(_) => format!(
                "SELECT {MODEL_COLUMNS} FROM air_conditioners WHERE {filter} AND brand = ? \
                 ORDER BY price ASC, model_number ASC"
            ),
            None => format!(
                "SELECT {MODEL_COLUMNS} FROM air_conditioners WHERE {filter} \
                 ORDER BY brand ASC, price ASC, model_number ASC"
            ),
        }
    }
}

fn manages_own_transaction(script: &str) -> bool {
    OWN_TRANSACTION.is_match(script)
}

async fn table_exists(conn: &mut SqliteConnection, name: &str) -> Result<bool, DomainError> {
    let exists: i64 = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?)",
    )
    .bind(name)
    .fetch_one(&mut *conn)
    .await?;

    Ok(exists != 0)
}

async fn rollback_quietly(conn: &mut SqliteConnection) {
    if let Err(e) = sqlx::raw_sql("ROLLBACK").execute(&mut *conn).await {
        debug!(error = %e, "No initialization transaction to roll back");
    }
}

async fn read_init_script(path: &std::path::Path) -> Result<String, DomainError> {
    let script = tokio::fs::read_to_string(path).await.map_err(|e| {
        DomainError::storage(format!(
            "Failed to read init script '{}': {}",
            path.display(),
            e
        ))
    })?;

    info!(script = %path.display(), "Initializing catalog from script");
    Ok(script)
}

/// Runs inside the `BEGIN IMMEDIATE` transaction opened by `initialize`
async fn populate(conn: &mut SqliteConnection, script: Option<&str>) -> Result<(), DomainError> {
    // Another process may have finished while we waited for the lock
    if table_exists(conn, "air_conditioners").await? {
        warn!("Catalog was initialized concurrently, skipping");
        return Ok(());
    }

    match script {
        Some(script) => run_init_script(conn, script).await,
        None => seed_default_catalog(conn).await,
    }
}

async fn run_init_script(conn: &mut SqliteConnection, script: &str) -> Result<(), DomainError> {
    sqlx::raw_sql(script)
        .execute(&mut *conn)
        .await
        .map_err(|e| DomainError::storage(format!("Init script failed: {}", e)))?;

    Ok(())
}

async fn seed_default_catalog(conn: &mut SqliteConnection) -> Result<(), DomainError> {
    sqlx::raw_sql(CATALOG_SCHEMA)
        .execute(&mut *conn)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create catalog schema: {}", e)))?;

    for model in default_models() {
        sqlx::query(
            "INSERT OR IGNORE INTO air_conditioners (brand, model_number, series_name, type, \
             cooling_capacity, suitable_area_min, suitable_area_max, price, \
             energy_efficiency_rating, features) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(model.brand())
        .bind(model.model_number())
        .bind(model.series_name())
        .bind(model.kind())
        .bind(model.cooling_capacity())
        .bind(model.suitable_area_min())
        .bind(model.suitable_area_max())
        .bind(model.price())
        .bind(model.energy_efficiency_rating())
        .bind(model.features())
        .execute(&mut *conn)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to seed model: {}", e)))?;
    }

    for series in default_series() {
        sqlx::query(
            "INSERT OR IGNORE INTO series_features (series_name, feature_description) VALUES (?, ?)",
        )
        .bind(series.series_name())
        .bind(series.feature_description())
        .execute(&mut *conn)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to seed series: {}", e)))?;
    }

    Ok(())
}

#[async_trait]
impl CatalogRepository for SqliteCatalogRepository {
    async fn find_by_area(
        &self,
        area: f64,
        brand: Option<&str>,
    ) -> Result<Vec<AirConditionerModel>, DomainError> {
        let sql = Self::listing_query("suitable_area_min <= ? AND suitable_area_max >= ?", brand);

        let mut query = sqlx::query_as::<_, AirConditionerModel>(&sql)
            .bind(area)
            .bind(area);

        if let Some(brand) = brand {
            query = query.bind(brand);
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to search by area: {}", e)))
    }

    async fn find_by_price_range(
        &self,
        min_price: i64,
        max_price: i64,
        brand: Option<&str>,
    ) -> Result<Vec<AirConditionerModel>, DomainError> {
        let sql = Self::listing_query("price BETWEEN ? AND ?", brand);

        let mut query = sqlx::query_as::<_, AirConditionerModel>(&sql)
            .bind(min_price)
            .bind(max_price);

        if let Some(brand) = brand {
            query = query.bind(brand);
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to search by price: {}", e)))
    }

    async fn list_series(&self) -> Result<Vec<SeriesDescription>, DomainError> {
        sqlx::query_as::<_, SeriesDescription>(
            "SELECT series_name, feature_description FROM series_features ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list series: {}", e)))
    }

    async fn find_closest_sufficient(
        &self,
        target: f64,
        limit: usize,
    ) -> Result<Vec<AirConditionerModel>, DomainError> {
        let sql = format!(
            "SELECT {MODEL_COLUMNS} FROM air_conditioners WHERE cooling_capacity >= ? \
             ORDER BY (cooling_capacity - ?) ASC, price ASC, model_number ASC LIMIT ?"
        );

        sqlx::query_as::<_, AirConditionerModel>(&sql)
            .bind(target)
            .bind(target)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to select by capacity: {}", e)))
    }

    async fn find_largest(&self) -> Result<Option<AirConditionerModel>, DomainError> {
        let sql = format!(
            "SELECT {MODEL_COLUMNS} FROM air_conditioners \
             ORDER BY cooling_capacity DESC, model_number ASC LIMIT 1"
        );

        sqlx::query_as::<_, AirConditionerModel>(&sql)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to find largest model: {}", e)))
    }

    async fn count_models(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM air_conditioners")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as usize)
    }
}
