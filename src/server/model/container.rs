//! Domain models for container data operations.
//!
//! Defines the container domain model, the parameter types for LSP container
//! management, and conversions from entities and into DTOs.

use chrono::{DateTime, Utc};
use entity::container::ContainerStatus;

use crate::model::container::{
    ContainerDto, ContainerStatsDto, ContainerStatusDto, CreateContainerDto, LspAnalyticsDto,
    UpdateContainerDto,
};

/// Shipping container offered by an LSP, with its booking state.
///
/// `booked_by` is set only while `pending` or `confirmed`; `booked_at` only while
/// `pending`.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub status: ContainerStatus,
    /// ID of the trader holding the container.
    pub booked_by: Option<i32>,
    /// When the container entered `pending`.
    pub booked_at: Option<DateTime<Utc>>,
    /// ID of the LSP that created the container.
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
}

impl Container {
    /// Converts an entity model to a container domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Container` - The converted container domain model
    pub fn from_entity(entity: entity::container::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            capacity: entity.capacity,
            status: entity.status,
            booked_by: entity.booked_by,
            booked_at: entity.booked_at,
            created_by: entity.created_by,
            created_at: entity.created_at,
        }
    }

    /// Converts the container domain model to a DTO for API responses.
    pub fn into_dto(self) -> ContainerDto {
        ContainerDto {
            id: self.id,
            name: self.name,
            capacity: self.capacity,
            status: status_into_dto(self.status),
            booked_by: self.booked_by,
            booked_at: self.booked_at,
            created_by: self.created_by,
            created_at: self.created_at,
        }
    }
}

pub fn status_into_dto(status: ContainerStatus) -> ContainerStatusDto {
    match status {
        ContainerStatus::Available => ContainerStatusDto::Available,
        ContainerStatus::Pending => ContainerStatusDto::Pending,
        ContainerStatus::Confirmed => ContainerStatusDto::Confirmed,
        ContainerStatus::Cancelled => ContainerStatusDto::Cancelled,
    }
}

pub fn status_from_dto(status: ContainerStatusDto) -> ContainerStatus {
    match status {
        ContainerStatusDto::Available => ContainerStatus::Available,
        ContainerStatusDto::Pending => ContainerStatus::Pending,
        ContainerStatusDto::Confirmed => ContainerStatus::Confirmed,
        ContainerStatusDto::Cancelled => ContainerStatus::Cancelled,
    }
}

/// Parameters for creating a new container.
///
/// The creating LSP is taken from the authenticated actor, never the request body.
#[derive(Debug, Clone)]
pub struct CreateContainerParam {
    pub name: String,
    pub capacity: i32,
}

impl From<CreateContainerDto> for CreateContainerParam {
    fn from(dto: CreateContainerDto) -> Self {
        Self {
            name: dto.name,
            capacity: dto.capacity,
        }
    }
}

/// Parameters for updating container details.
///
/// Only provided fields are changed. Booking fields are not updatable here.
#[derive(Debug, Clone, Default)]
pub struct UpdateContainerParam {
    pub name: Option<String>,
    pub capacity: Option<i32>,
}

impl From<UpdateContainerDto> for UpdateContainerParam {
    fn from(dto: UpdateContainerDto) -> Self {
        Self {
            name: dto.name,
            capacity: dto.capacity,
        }
    }
}

/// Per-status container counts for one LSP.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerStatusCounts {
    pub available: u64,
    pub pending: u64,
    pub confirmed: u64,
    pub cancelled: u64,
}

impl ContainerStatusCounts {
    /// Containers currently held by a trader.
    pub fn total_bookings(&self) -> u64 {
        self.pending + self.confirmed
    }

    pub fn into_dto(self) -> LspAnalyticsDto {
        LspAnalyticsDto {
            total_bookings: self.total_bookings(),
            container_stats: ContainerStatsDto {
                available: self.available,
                pending: self.pending,
                confirmed: self.confirmed,
                cancelled: self.cancelled,
            },
        }
    }
}
