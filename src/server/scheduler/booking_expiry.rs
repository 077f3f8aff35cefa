use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    config::Config, error::AppError, service::booking::transition::SweepRule,
    service::sweep::ExpirySweeper,
};

/// Starts the booking expiry scheduler.
///
/// Always schedules the short rule, which cancels containers left pending long after
/// they were created. The long rule, which releases bookings held too long, is
/// scheduled only when `LONG_SWEEP_CRON` is configured; otherwise it runs on demand
/// through the release endpoint.
///
/// # Arguments
/// - `db`: Database connection
/// - `config`: Cron expressions and deadlines for both rules
pub async fn start_scheduler(db: DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let short_rule = SweepRule::cancel_after(config.short_sweep_minutes);
    scheduler
        .add(sweep_job(db.clone(), &config.short_sweep_cron, short_rule)?)
        .await?;

    if let Some(cron) = &config.long_sweep_cron {
        let long_rule = SweepRule::release_after(config.long_sweep_minutes);
        scheduler.add(sweep_job(db, cron, long_rule)?).await?;
    }

    scheduler.start().await?;

    tracing::info!("Booking expiry scheduler started");

    Ok(())
}

/// Builds a cron job running `rule` against the container table.
fn sweep_job(db: DatabaseConnection, cron: &str, rule: SweepRule) -> Result<Job, AppError> {
    let job = Job::new_async(cron, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = ExpirySweeper::new(&db).sweep(&rule, Utc::now()).await {
                tracing::error!("Error sweeping expired bookings: {}", e);
            }
        })
    })?;

    Ok(job)
}
