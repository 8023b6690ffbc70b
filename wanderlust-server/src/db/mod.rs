//! Database Module
//!
//! Embedded SurrealDB storage (RocksDB engine on disk, in-memory engine for
//! tests). Tables stay schemaless so stored documents round-trip exactly as
//! written; the only schema object is the unique index backing the duplicate
//! email check.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "wanderlust";
const DATABASE: &str = "main";

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the on-disk database at `db_path`
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::init(db).await
    }

    /// Open an in-memory database (tests and ephemeral runs)
    pub async fn open_in_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        Self::init(db).await
    }

    async fn init(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query("DEFINE INDEX IF NOT EXISTS user_email ON TABLE user FIELDS email UNIQUE")
            .await
            .map_err(|e| AppError::database(format!("Failed to define indexes: {e}")))?
            .check()
            .map_err(|e| AppError::database(format!("Failed to define indexes: {e}")))?;

        tracing::info!("Database connection established (embedded SurrealDB)");
        Ok(Self { db })
    }
}
