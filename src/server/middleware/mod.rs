//! Request processing helpers shared by the controllers.
//!
//! - `auth` - `AuthGuard` resolving the logged-in user and checking role permissions
//! - `session` - Typed access to the authenticated user stored in the session

pub mod auth;
pub mod session;
