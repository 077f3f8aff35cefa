//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults into the test database, reducing
//! boilerplate in tests. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let (lsp, container) = factory::helpers::create_container_with_lsp(&db).await?;
//! let trader = factory::helpers::create_verified_trader(&db).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create trader and LSP users
//! - `container` - Create containers, optionally seeded into a booking state
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod container;
pub mod helpers;
pub mod user;

pub use container::create_container;
pub use user::{create_lsp, create_trader};
