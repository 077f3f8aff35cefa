//! HTTP request handlers.
//!
//! Each handler authenticates through `AuthGuard`, converts DTOs to domain
//! parameters, calls a service, and converts the result back to a DTO.

pub mod analytics;
pub mod auth;
pub mod booking;
pub mod container;
pub mod suggestion;
pub mod user;
