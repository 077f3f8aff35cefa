//! Container fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::container::{self, ContainerStatus};

/// Default container ID.
pub const DEFAULT_ID: i32 = 1;

/// Default creating LSP ID.
pub const DEFAULT_CREATED_BY: i32 = 100;

/// Fixed creation timestamp so fixtures are deterministic.
pub fn default_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates an available container entity model with default values.
///
/// # Example
///
/// ```rust,ignore
/// let container = fixture::container::entity();
/// assert_eq!(container.status, ContainerStatus::Available);
/// ```
pub fn entity() -> container::Model {
    entity_builder().build()
}

/// Creates a container entity builder for customization.
pub fn entity_builder() -> ContainerEntityBuilder {
    ContainerEntityBuilder::default()
}

/// Builder for customized container entity models.
pub struct ContainerEntityBuilder {
    model: container::Model,
}

impl Default for ContainerEntityBuilder {
    fn default() -> Self {
        Self {
            model: container::Model {
                id: DEFAULT_ID,
                name: "Test Container".to_string(),
                capacity: 20,
                status: ContainerStatus::Available,
                booked_by: None,
                booked_at: None,
                created_by: DEFAULT_CREATED_BY,
                created_at: default_created_at(),
            },
        }
    }
}

impl ContainerEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    /// Marks the container `pending` for `trader_id` since `booked_at`.
    pub fn pending_for(mut self, trader_id: i32, booked_at: DateTime<Utc>) -> Self {
        self.model.status = ContainerStatus::Pending;
        self.model.booked_by = Some(trader_id);
        self.model.booked_at = Some(booked_at);
        self
    }

    /// Marks the container `confirmed` for `trader_id`.
    pub fn confirmed_for(mut self, trader_id: i32) -> Self {
        self.model.status = ContainerStatus::Confirmed;
        self.model.booked_by = Some(trader_id);
        self.model.booked_at = None;
        self
    }

    pub fn cancelled(mut self) -> Self {
        self.model.status = ContainerStatus::Cancelled;
        self.model.booked_by = None;
        self.model.booked_at = None;
        self
    }

    pub fn build(self) -> container::Model {
        self.model
    }
}
