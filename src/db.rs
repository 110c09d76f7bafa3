//! SQLite pool and schema migrations.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::repository::errors::{RepositoryError, RepositoryResult};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const BUSY_TIMEOUT: Duration = Duration::from_secs(30);

/// Pragmas applied to every pooled connection.
#[derive(Debug)]
struct SqlitePragmas {
    /// WAL is not available for in-memory databases.
    wal: bool,
    busy_timeout: Duration,
}

impl SqlitePragmas {
    fn for_url(database_url: &str) -> Self {
        Self {
            wal: !database_url.contains(":memory:"),
            busy_timeout: BUSY_TIMEOUT,
        }
    }

    fn batch(&self) -> String {
        let mut sql = format!("PRAGMA busy_timeout = {};", self.busy_timeout.as_millis());
        if self.wal {
            sql.push_str(" PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;");
        }
        sql
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&self.batch())
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Opens a pool on `database_url`, a file path or `:memory:`.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(SqlitePragmas::for_url(database_url)))
        .build(manager)
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get().inspect_err(|e| {
        log::error!("Failed to get connection from pool: {e}");
    })
}

/// Applies pending embedded migrations and returns how many ran.
pub fn run_migrations(pool: &DbPool) -> RepositoryResult<usize> {
    let mut conn = get_connection(pool)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| RepositoryError::DatabaseError(format!("Migration failed: {e}")))?;

    for version in &applied {
        log::debug!("Applied migration {version}");
    }
    Ok(applied.len())
}
