//! Container data repository for database operations.
//!
//! Provides the `ContainerRepository`, the only code that reads or writes the
//! `container` table. Booking state changes go through `conditional_update` and
//! `sweep`, which express their precondition as the `WHERE` clause of a single
//! `UPDATE` so the store evaluates it atomically with the write.

use entity::container::{Column, ContainerStatus};
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    model::container::{
        Container, ContainerStatusCounts, CreateContainerParam, UpdateContainerParam,
    },
    service::booking::transition::{Effect, Guard, SweepKey, SweepPlan},
};

/// Repository providing database operations for containers.
pub struct ContainerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContainerRepository<'a> {
    /// Creates a new ContainerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ContainerRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new `available` container owned by `created_by`.
    ///
    /// # Arguments
    /// - `created_by` - ID of the creating LSP
    /// - `param` - Name and capacity of the container
    ///
    /// # Returns
    /// - `Ok(Container)` - The created container
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        created_by: i32,
        param: CreateContainerParam,
    ) -> Result<Container, DbErr> {
        let entity = entity::prelude::Container::insert(entity::container::ActiveModel {
            name: ActiveValue::Set(param.name),
            capacity: ActiveValue::Set(param.capacity),
            status: ActiveValue::Set(ContainerStatus::Available),
            booked_by: ActiveValue::Set(None),
            booked_at: ActiveValue::Set(None),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Container::from_entity(entity))
    }

    /// Finds a container by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Container))` - Container found
    /// - `Ok(None)` - No container with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Container>, DbErr> {
        let entity = entity::prelude::Container::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Container::from_entity))
    }

    /// Lists containers ordered by ID, optionally restricted to one status.
    pub async fn list(&self, status: Option<ContainerStatus>) -> Result<Vec<Container>, DbErr> {
        let mut query = entity::prelude::Container::find().order_by_asc(Column::Id);

        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status));
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Container::from_entity).collect())
    }

    /// Returns up to `limit` available containers, oldest first.
    pub async fn first_available(&self, limit: u64) -> Result<Vec<Container>, DbErr> {
        let entities = entity::prelude::Container::find()
            .filter(Column::Status.eq(ContainerStatus::Available))
            .order_by_asc(Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Container::from_entity).collect())
    }

    /// Updates name and capacity of a container owned by `created_by`.
    ///
    /// Booking fields are never written, so this cannot race with a transition.
    ///
    /// # Returns
    /// - `Ok(1)` - Container updated
    /// - `Ok(0)` - No container with that ID owned by `created_by`
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_details(
        &self,
        id: i32,
        created_by: i32,
        param: UpdateContainerParam,
    ) -> Result<u64, DbErr> {
        let mut update = entity::prelude::Container::update_many()
            .filter(Column::Id.eq(id))
            .filter(Column::CreatedBy.eq(created_by));

        if let Some(name) = param.name {
            update = update.col_expr(Column::Name, Expr::value(name));
        }
        if let Some(capacity) = param.capacity {
            update = update.col_expr(Column::Capacity, Expr::value(capacity));
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Deletes a container owned by `created_by`, whatever its status.
    ///
    /// # Returns
    /// - `Ok(1)` - Container deleted
    /// - `Ok(0)` - No container with that ID owned by `created_by`
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32, created_by: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Container::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::CreatedBy.eq(created_by))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Applies `effect` to the container only if it still satisfies `guard`.
    ///
    /// The guard is the `WHERE` clause of a single `UPDATE`, so of two concurrent
    /// requests validated against the same state only one can match.
    ///
    /// # Returns
    /// - `Ok(1)` - Guard held and the effect was written
    /// - `Ok(0)` - Container missing or no longer matching the guard
    /// - `Err(DbErr)` - Database error during update
    pub async fn conditional_update(&self, guard: &Guard, effect: &Effect) -> Result<u64, DbErr> {
        let mut update = entity::prelude::Container::update_many()
            .set(effect_active_model(effect))
            .filter(Column::Id.eq(guard.container_id))
            .filter(Column::Status.eq(guard.status));

        if let Some(holder) = guard.booked_by {
            update = update.filter(Column::BookedBy.eq(holder));
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Applies a sweep to every pending container older than the plan's cutoff.
    ///
    /// Runs as one multi-row `UPDATE`; rows a trader confirms or cancels first no
    /// longer match `status = pending` and are left alone.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of containers swept, possibly zero
    /// - `Err(DbErr)` - Database error during update
    pub async fn sweep(&self, plan: &SweepPlan) -> Result<u64, DbErr> {
        let age_filter = match plan.key {
            SweepKey::BookedAt => Column::BookedAt.lt(plan.cutoff),
            SweepKey::CreatedAt => Column::CreatedAt.lt(plan.cutoff),
        };

        let result = entity::prelude::Container::update_many()
            .set(effect_active_model(&plan.effect))
            .filter(Column::Status.eq(ContainerStatus::Pending))
            .filter(age_filter)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts containers created by `created_by` in each status.
    pub async fn count_by_status(&self, created_by: i32) -> Result<ContainerStatusCounts, DbErr> {
        Ok(ContainerStatusCounts {
            available: self.count_with_status(created_by, ContainerStatus::Available).await?,
            pending: self.count_with_status(created_by, ContainerStatus::Pending).await?,
            confirmed: self.count_with_status(created_by, ContainerStatus::Confirmed).await?,
            cancelled: self.count_with_status(created_by, ContainerStatus::Cancelled).await?,
        })
    }

    async fn count_with_status(
        &self,
        created_by: i32,
        status: ContainerStatus,
    ) -> Result<u64, DbErr> {
        entity::prelude::Container::find()
            .filter(Column::CreatedBy.eq(created_by))
            .filter(Column::Status.eq(status))
            .count(self.db)
            .await
    }
}

/// Active model with only the columns the effect writes set.
fn effect_active_model(effect: &Effect) -> entity::container::ActiveModel {
    let mut model = entity::container::ActiveModel {
        status: ActiveValue::Set(effect.status),
        ..Default::default()
    };

    if let Some(booked_by) = effect.booked_by {
        model.booked_by = ActiveValue::Set(booked_by);
    }
    if let Some(booked_at) = effect.booked_at {
        model.booked_at = ActiveValue::Set(booked_at);
    }

    model
}
