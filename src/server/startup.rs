use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, service::catalog::PetCatalog};

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn,serenity=warn";

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` and falls back to `info` with the noisier dependencies
/// limited to warnings.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Loads the pet catalog, importing the legacy seed file into an empty database.
///
/// A seed file that cannot be read or parsed is logged and skipped so the bot can
/// still start with whatever the database holds.
///
/// # Arguments
/// - `config` - Application configuration containing the optional seed path
/// - `db` - Database connection with migrations applied
///
/// # Returns
/// - `Ok(PetCatalog)` - Loaded catalog handle
/// - `Err(AppError)` - Failed to read the pet table
pub async fn load_catalog(
    config: &Config,
    db: sea_orm::DatabaseConnection,
) -> Result<PetCatalog, AppError> {
    let catalog = PetCatalog::load(db).await?;

    if let Some(path) = config.pet_seed_file.as_deref() {
        import_seed(&catalog, path).await;
    }

    Ok(catalog)
}

async fn import_seed(catalog: &PetCatalog, path: &Path) {
    if let Err(e) = catalog.import_seed(path).await {
        tracing::error!("Failed to import pet seed {}: {}", path.display(), e);
    }
}
