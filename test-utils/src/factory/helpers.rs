//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating entities
//! together with the entities they depend on.

use entity::user::UserRole;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an LSP together with one available container it owns.
///
/// # Returns
/// - `Ok((lsp, container))` - The created LSP user and container
/// - `Err(DbErr)` - Database error during creation
pub async fn create_container_with_lsp(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::container::Model), DbErr> {
    let lsp = crate::factory::user::create_lsp(db).await?;
    let container = crate::factory::container::create_container(db, lsp.id).await?;

    Ok((lsp, container))
}

/// Creates a verified trader, the usual booking actor.
pub async fn create_verified_trader(
    db: &DatabaseConnection,
) -> Result<entity::user::Model, DbErr> {
    crate::factory::user::UserFactory::new(db)
        .role(UserRole::Trader)
        .verified(true)
        .build()
        .await
}
