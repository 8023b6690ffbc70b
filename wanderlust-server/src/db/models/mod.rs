//! Database Models

// Auth
pub mod user;

// Catalog
pub mod tour;

// Bookings
pub mod booking;

// Re-exports
pub use booking::{Booking, BookingId, STATUS_CONFIRMED};
pub use tour::{Tour, TourId};
pub use user::{User, UserId};
