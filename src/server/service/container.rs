//! Container management for LSPs and container queries for every user.
//!
//! Booking fields are never written here; status changes go through
//! `BookingService` and `ExpirySweeper` only.

use entity::container::ContainerStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{container::ContainerRepository, user::UserRepository},
    error::AppError,
    model::container::{
        Container, ContainerStatusCounts, CreateContainerParam, UpdateContainerParam,
    },
};

/// Number of containers returned by the suggestion stub.
const SUGGESTION_LIMIT: u64 = 3;

/// Service providing container management business logic.
pub struct ContainerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContainerService<'a> {
    /// Creates a new ContainerService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ContainerService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an available container owned by the LSP `created_by`.
    ///
    /// # Arguments
    /// - `created_by` - ID of the creating user, which must be an LSP
    /// - `param` - Name and capacity of the new container
    ///
    /// # Returns
    /// - `Ok(Container)` - The created container
    /// - `Err(AppError::BadRequest)` - Empty name or non-positive capacity
    /// - `Err(AppError::Forbidden)` - `created_by` is not an existing LSP
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        created_by: i32,
        param: CreateContainerParam,
    ) -> Result<Container, AppError> {
        validate_name(&param.name)?;
        validate_capacity(param.capacity)?;

        if !UserRepository::new(self.db).is_lsp(created_by).await? {
            return Err(AppError::Forbidden(
                "Only LSPs can create containers".to_string(),
            ));
        }

        let container = ContainerRepository::new(self.db)
            .create(created_by, param)
            .await?;

        Ok(container)
    }

    /// Lists containers, optionally restricted to one status.
    pub async fn list(&self, status: Option<ContainerStatus>) -> Result<Vec<Container>, AppError> {
        Ok(ContainerRepository::new(self.db).list(status).await?)
    }

    /// Gets a container by ID.
    ///
    /// # Returns
    /// - `Ok(Container)` - Container found
    /// - `Err(AppError::NotFound)` - No container with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(&self, id: i32) -> Result<Container, AppError> {
        ContainerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Updates name and/or capacity of a container owned by `created_by`.
    ///
    /// # Returns
    /// - `Ok(Container)` - The updated container
    /// - `Err(AppError::BadRequest)` - Nothing to update, empty name or non-positive capacity
    /// - `Err(AppError::NotFound)` - No container with that ID
    /// - `Err(AppError::Forbidden)` - Container belongs to another LSP
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        created_by: i32,
        param: UpdateContainerParam,
    ) -> Result<Container, AppError> {
        if param.name.is_none() && param.capacity.is_none() {
            return Err(AppError::BadRequest(
                "Provide a name or capacity to update".to_string(),
            ));
        }
        if let Some(name) = &param.name {
            validate_name(name)?;
        }
        if let Some(capacity) = param.capacity {
            validate_capacity(capacity)?;
        }

        let container_repo = ContainerRepository::new(self.db);

        let rows_affected = container_repo.update_details(id, created_by, param).await?;
        if rows_affected == 0 {
            return Err(self.ownership_error(id).await?);
        }

        self.get(id).await
    }

    /// Deletes a container owned by `created_by`, whatever its booking status.
    ///
    /// # Returns
    /// - `Ok(())` - Container deleted
    /// - `Err(AppError::NotFound)` - No container with that ID
    /// - `Err(AppError::Forbidden)` - Container belongs to another LSP
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, id: i32, created_by: i32) -> Result<(), AppError> {
        let rows_affected = ContainerRepository::new(self.db)
            .delete(id, created_by)
            .await?;

        if rows_affected == 0 {
            return Err(self.ownership_error(id).await?);
        }

        Ok(())
    }

    /// Counts the containers of `created_by` per status.
    pub async fn analytics(&self, created_by: i32) -> Result<ContainerStatusCounts, AppError> {
        Ok(ContainerRepository::new(self.db)
            .count_by_status(created_by)
            .await?)
    }

    /// Suggests containers for a shipment.
    ///
    /// No ranking is done: the oldest available containers are returned.
    pub async fn suggest(&self) -> Result<Vec<Container>, AppError> {
        Ok(ContainerRepository::new(self.db)
            .first_available(SUGGESTION_LIMIT)
            .await?)
    }

    /// Explains why an owner-filtered write matched no row.
    async fn ownership_error(&self, id: i32) -> Result<AppError, AppError> {
        let exists = ContainerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .is_some();

        Ok(if exists {
            AppError::Forbidden(
                "Only the LSP that created this container can modify it".to_string(),
            )
        } else {
            not_found(id)
        })
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Container {} not found", id))
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Container name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_capacity(capacity: i32) -> Result<(), AppError> {
    if capacity <= 0 {
        return Err(AppError::BadRequest(
            "Container capacity must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
