//! Expiry sweeps for stale pending bookings.
//!
//! Each run is a single bulk conditional update, so a sweep never overwrites a
//! container that a trader confirmed or cancelled while the sweep was running.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::container::ContainerRepository,
    error::AppError,
    service::booking::transition::{SweepEffect, SweepRule},
};

/// Service running expiry sweep rules against the container table.
pub struct ExpirySweeper<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExpirySweeper<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies `rule` to every pending container past its deadline at `now`.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of containers moved out of `pending`, possibly zero
    /// - `Err(AppError::DbErr)` - Database error during the update
    pub async fn sweep(&self, rule: &SweepRule, now: DateTime<Utc>) -> Result<u64, AppError> {
        let plan = rule.plan(now);

        let affected = ContainerRepository::new(self.db).sweep(&plan).await?;

        let action = match rule.effect {
            SweepEffect::ReleaseToAvailable => "Released",
            SweepEffect::CancelStale => "Cancelled",
        };
        tracing::info!(
            "{} {} expired pending container(s) older than {} minutes",
            action,
            affected,
            rule.deadline.num_minutes()
        );

        Ok(affected)
    }
}
