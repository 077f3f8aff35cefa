//! Container factory for creating test container entities.
//!
//! Containers default to `available` with no booking fields. The booking setters
//! let tests seed rows directly into `pending` or `confirmed` without going
//! through the booking service, which sweep tests rely on to backdate timestamps.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::container::ContainerStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test containers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::container::ContainerFactory;
///
/// let container = ContainerFactory::new(&db, lsp.id)
///     .pending_for(trader.id, Utc::now() - Duration::hours(25))
///     .build()
///     .await?;
/// ```
pub struct ContainerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    capacity: i32,
    status: ContainerStatus,
    booked_by: Option<i32>,
    booked_at: Option<DateTime<Utc>>,
    created_by: i32,
    created_at: DateTime<Utc>,
}

impl<'a> ContainerFactory<'a> {
    /// Creates a new ContainerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Container {n}"` where n is auto-incremented
    /// - capacity: `20`
    /// - status: `available`, no booking fields
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `created_by` - ID of the LSP creating the container
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Container {}", id),
            capacity: 20,
            status: ContainerStatus::Available,
            booked_by: None,
            booked_at: None,
            created_by,
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Seeds the container as `pending` for the given trader since `booked_at`.
    pub fn pending_for(mut self, trader_id: i32, booked_at: DateTime<Utc>) -> Self {
        self.status = ContainerStatus::Pending;
        self.booked_by = Some(trader_id);
        self.booked_at = Some(booked_at);
        self
    }

    /// Seeds the container as `confirmed` for the given trader.
    pub fn confirmed_for(mut self, trader_id: i32) -> Self {
        self.status = ContainerStatus::Confirmed;
        self.booked_by = Some(trader_id);
        self.booked_at = None;
        self
    }

    /// Seeds the container as `cancelled`.
    pub fn cancelled(mut self) -> Self {
        self.status = ContainerStatus::Cancelled;
        self.booked_by = None;
        self.booked_at = None;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the container entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::container::Model)` - Created container entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::container::Model, DbErr> {
        entity::container::ActiveModel {
            name: ActiveValue::Set(self.name),
            capacity: ActiveValue::Set(self.capacity),
            status: ActiveValue::Set(self.status),
            booked_by: ActiveValue::Set(self.booked_by),
            booked_at: ActiveValue::Set(self.booked_at),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available container owned by `created_by`.
pub async fn create_container(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::container::Model, DbErr> {
    ContainerFactory::new(db, created_by).build().await
}
