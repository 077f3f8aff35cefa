//! Booking gateway.
//!
//! `BookingService` is the single entry point for trader booking actions. Every
//! request is decided against a snapshot of the container and then written as one
//! conditional update whose `WHERE` clause re-checks the snapshot's relevant
//! columns, so concurrent requests cannot both succeed. A request whose guard no
//! longer matches is rejected as `RaceLost` and is never retried.

pub mod transition;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::container::ContainerRepository,
    error::{booking::BookingError, AppError},
    model::{container::Container, user::Actor},
    service::booking::transition::{authorize, decide, BookingAction},
};

/// Service applying trader booking actions to containers.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new BookingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BookingService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Moves an available container to `pending` for a verified trader.
    pub async fn book(&self, actor: &Actor, container_id: i32) -> Result<Container, AppError> {
        self.request(actor, BookingAction::Book, container_id).await
    }

    /// Confirms a pending booking held by `actor`.
    pub async fn confirm(&self, actor: &Actor, container_id: i32) -> Result<Container, AppError> {
        self.request(actor, BookingAction::Confirm, container_id).await
    }

    /// Cancels a pending booking held by `actor`, returning the container to `available`.
    pub async fn cancel(&self, actor: &Actor, container_id: i32) -> Result<Container, AppError> {
        self.request(actor, BookingAction::Cancel, container_id).await
    }

    /// Applies `action` for `actor` to the container with `container_id`.
    ///
    /// Role and verification are checked before the container is read, so a
    /// request the actor could never make does not touch the store.
    ///
    /// # Returns
    /// - `Ok(Container)` - The container after the transition
    /// - `Err(AppError::BookingErr(NotFound))` - No container with that ID
    /// - `Err(AppError::BookingErr(Forbidden))` - Actor may not perform the action
    /// - `Err(AppError::BookingErr(InvalidState))` - Container is in the wrong status
    /// - `Err(AppError::BookingErr(RaceLost))` - Container changed after it was read
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn request(
        &self,
        actor: &Actor,
        action: BookingAction,
        container_id: i32,
    ) -> Result<Container, AppError> {
        if let Err(err) = authorize(action, actor) {
            tracing::debug!(
                "Rejected {} of container {} by user {}: {}",
                action.as_str(),
                container_id,
                actor.id,
                err
            );
            return Err(err.into());
        }

        let container_repo = ContainerRepository::new(self.db);

        let Some(snapshot) = container_repo.find_by_id(container_id).await? else {
            return Err(BookingError::NotFound(container_id).into());
        };

        self.transition_from(actor, action, &snapshot).await
    }

    /// Applies `action` against an already observed `snapshot` of a container.
    ///
    /// The write succeeds only if the stored row still matches the guard derived
    /// from the snapshot; otherwise the row is re-read to tell a deleted container
    /// (`NotFound`) from one another request changed (`RaceLost`).
    ///
    /// # Arguments
    /// - `actor` - Authenticated requester
    /// - `action` - Requested action
    /// - `snapshot` - Container as previously read from the store
    ///
    /// # Returns
    /// - `Ok(Container)` - The container after the transition
    /// - `Err(AppError::BookingErr(_))` - Rejected transition
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn transition_from(
        &self,
        actor: &Actor,
        action: BookingAction,
        snapshot: &Container,
    ) -> Result<Container, AppError> {
        let container_repo = ContainerRepository::new(self.db);

        let transition = match decide(snapshot, action, actor, Utc::now()) {
            Ok(transition) => transition,
            Err(err) => {
                tracing::debug!(
                    "Rejected {} of container {} by user {}: {}",
                    action.as_str(),
                    snapshot.id,
                    actor.id,
                    err
                );
                return Err(err.into());
            }
        };

        let rows_affected = container_repo
            .conditional_update(&transition.guard, &transition.effect)
            .await?;

        let current = container_repo.find_by_id(snapshot.id).await?;

        match (rows_affected, current) {
            (_, None) => Err(BookingError::NotFound(snapshot.id).into()),
            (0, Some(_)) => {
                tracing::debug!(
                    "User {} lost the race to {} container {}",
                    actor.id,
                    action.as_str(),
                    snapshot.id
                );
                Err(BookingError::RaceLost(snapshot.id).into())
            }
            (_, Some(container)) => Ok(container),
        }
    }
}
