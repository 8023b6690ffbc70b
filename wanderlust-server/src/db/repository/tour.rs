//! Tour Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::Tour;

const TABLE: &str = "tour";

#[derive(Clone)]
pub struct TourRepository {
    base: BaseRepository,
}

impl TourRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all tours
    pub async fn find_all(&self) -> RepoResult<Vec<Tour>> {
        let tours: Vec<Tour> = self.base.db().query("SELECT * FROM tour").await?.take(0)?;
        Ok(tours)
    }

    /// Find tour by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Tour>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let tour: Option<Tour> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(tour)
    }

    /// Create a new tour
    pub async fn create(&self, tour: Tour) -> RepoResult<Tour> {
        let created: Option<Tour> = self.base.db().create(TABLE).content(tour).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create tour".to_string()))
    }

    /// Hard delete a tour; returns whether a record was actually removed
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let pure_id = strip_table_prefix(TABLE, id);
        let deleted: Option<Tour> = self.base.db().delete((TABLE, pure_id)).await?;
        Ok(deleted.is_some())
    }

    /// Destructive bulk replace of the whole catalog (seed/reset)
    pub async fn replace_all(&self, tours: Vec<Tour>) -> RepoResult<usize> {
        let count = tours.len();
        let _: Vec<Tour> = self.base.db().delete(TABLE).await?;
        let _: Vec<Tour> = self.base.db().insert(TABLE).content(tours).await?;
        Ok(count)
    }
}
