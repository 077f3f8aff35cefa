//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They work with domain models rather than DTOs or entity models.
//!
//! - `booking` - Booking gateway and the pure transition rules it applies
//! - `sweep` - Expiry sweeps for stale pending bookings
//! - `container` - LSP container management, queries, analytics and suggestions
//! - `auth` - Registration and password login
//! - `user` - Trader approval

pub mod auth;
pub mod booking;
pub mod container;
pub mod sweep;
pub mod user;
