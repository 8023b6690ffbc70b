//! Booking Repository
//!
//! Holds the one business rule in the system: a user cannot hold two
//! bookings whose inclusive `[startDate, endDate]` ranges share a calendar
//! day. The check is a single normalized interval comparison
//! (`existing.start <= new.end AND new.start <= existing.end`), so ranges
//! that merely touch at a boundary date also conflict.
//!
//! The check-then-insert sequence is not atomic: two concurrent requests
//! for the same user can both pass the read before either write lands.
//! Accepted for demo booking volume; callers needing strict correctness
//! must serialize booking creation per user.

use chrono::NaiveDate;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::Booking;

const TABLE: &str = "booking";

#[derive(Clone)]
pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a booking of `user_id` overlapping the inclusive range
    /// `[start, end]`, if any
    pub async fn find_conflicting(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Option<Booking>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM booking \
                 WHERE userId = $user AND startDate <= $end AND endDate >= $start \
                 LIMIT 1",
            )
            .bind(("user", user_id.to_string()))
            .bind(("start", start.to_string()))
            .bind(("end", end.to_string()))
            .await?;
        let bookings: Vec<Booking> = result.take(0)?;
        Ok(bookings.into_iter().next())
    }

    /// Persist a booking after the overlap check
    ///
    /// Exactly one read and, absent conflict, exactly one write. On
    /// conflict nothing is persisted.
    pub async fn create(&self, booking: Booking) -> RepoResult<Booking> {
        if self
            .find_conflicting(&booking.user_id, booking.start_date, booking.end_date)
            .await?
            .is_some()
        {
            return Err(RepoError::Conflict(
                "You already have a trip booked during these dates!".to_string(),
            ));
        }

        let created: Option<Booking> = self.base.db().create(TABLE).content(booking).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create booking".to_string()))
    }

    /// All bookings of a user, ascending by start date
    pub async fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<Booking>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM booking WHERE userId = $user ORDER BY startDate")
            .bind(("user", user_id.to_string()))
            .await?;
        let bookings: Vec<Booking> = result.take(0)?;
        Ok(bookings)
    }

    /// Unconditionally delete a booking; returns whether a record existed
    ///
    /// A missing id is not an error; callers decide whether to surface
    /// that (the HTTP layer currently reports success either way).
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let pure_id = strip_table_prefix(TABLE, id);
        let deleted: Option<Booking> = self.base.db().delete((TABLE, pure_id)).await?;
        Ok(deleted.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::models::STATUS_CONFIRMED;
    use chrono::Utc;

    async fn repo() -> BookingRepository {
        let service = DbService::open_in_memory().await.unwrap();
        BookingRepository::new(service.db)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn booking(user: &str, start: &str, end: &str) -> Booking {
        Booking {
            id: None,
            user_id: user.to_string(),
            tour_id: "tour:kyoto".to_string(),
            tour_title: "Kyoto Cherry Blossoms".to_string(),
            tour_image: String::new(),
            start_date: date(start),
            end_date: date(end),
            total_price: 3200.0,
            status: STATUS_CONFIRMED.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn non_overlapping_ranges_both_succeed() {
        let repo = repo().await;
        repo.create(booking("u1", "2024-01-01", "2024-01-05"))
            .await
            .unwrap();
        repo.create(booking("u1", "2024-01-06", "2024-01-10"))
            .await
            .unwrap();
        assert_eq!(repo.find_by_user("u1").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn touching_boundary_conflicts() {
        // [Jan 1, Jan 5] then [Jan 5, Jan 9]: boundary day is shared
        let repo = repo().await;
        repo.create(booking("u1", "2024-01-01", "2024-01-05"))
            .await
            .unwrap();
        let err = repo
            .create(booking("u1", "2024-01-05", "2024-01-09"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Conflict(_)));
    }

    #[tokio::test]
    async fn contained_range_conflicts() {
        // [Jan 3, Jan 6] sits fully inside [Jan 1, Jan 10]
        let repo = repo().await;
        repo.create(booking("u1", "2024-01-01", "2024-01-10"))
            .await
            .unwrap();
        let err = repo
            .create(booking("u1", "2024-01-03", "2024-01-06"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Conflict(_)));
    }

    #[tokio::test]
    async fn containing_range_conflicts() {
        // The new range fully contains an existing one
        let repo = repo().await;
        repo.create(booking("u1", "2024-01-03", "2024-01-06"))
            .await
            .unwrap();
        let err = repo
            .create(booking("u1", "2024-01-01", "2024-01-10"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Conflict(_)));
    }

    #[tokio::test]
    async fn partial_overlap_at_tail_conflicts() {
        let repo = repo().await;
        repo.create(booking("u1", "2024-01-01", "2024-01-05"))
            .await
            .unwrap();
        let err = repo
            .create(booking("u1", "2024-01-04", "2024-01-08"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Conflict(_)));
    }

    #[tokio::test]
    async fn rejected_booking_persists_nothing() {
        let repo = repo().await;
        repo.create(booking("u1", "2024-01-01", "2024-01-05"))
            .await
            .unwrap();
        let _ = repo.create(booking("u1", "2024-01-05", "2024-01-09")).await;
        assert_eq!(repo.find_by_user("u1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn other_users_are_unaffected() {
        let repo = repo().await;
        repo.create(booking("u1", "2024-01-01", "2024-01-05"))
            .await
            .unwrap();
        repo.create(booking("u2", "2024-01-01", "2024-01-05"))
            .await
            .unwrap();
        assert_eq!(repo.find_by_user("u2").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_is_sorted_by_start_date() {
        let repo = repo().await;
        for (s, e) in [
            ("2024-03-05", "2024-03-06"),
            ("2024-01-01", "2024-01-02"),
            ("2024-02-10", "2024-02-11"),
        ] {
            repo.create(booking("u1", s, e)).await.unwrap();
        }
        let starts: Vec<NaiveDate> = repo
            .find_by_user("u1")
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.start_date)
            .collect();
        assert_eq!(
            starts,
            vec![date("2024-01-01"), date("2024-02-10"), date("2024-03-05")]
        );
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = repo().await;
        let kept = repo
            .create(booking("u1", "2024-01-01", "2024-01-05"))
            .await
            .unwrap();
        let doomed = repo
            .create(booking("u1", "2024-02-01", "2024-02-05"))
            .await
            .unwrap();
        let id = doomed.id.unwrap().to_string();

        assert!(repo.delete(&id).await.unwrap());
        // Second delete of the same id: no error, reports nothing removed
        assert!(!repo.delete(&id).await.unwrap());

        let remaining = repo.find_by_user("u1").await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept.id);
    }
}
