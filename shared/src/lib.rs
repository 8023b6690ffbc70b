//! Shared types for the Wanderlust booking platform
//!
//! Common types used across crates: the wire models returned by the REST
//! endpoints and the request/response DTOs they accept.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{
    LoginRequest, LoginResponse, MessageResponse, ProfileUpdate, RegisterRequest,
};
pub use models::{Booking, BookingCreate, Tour, TourCreate, User};
