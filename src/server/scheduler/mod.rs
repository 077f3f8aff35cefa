//! Cron jobs for periodic maintenance.

pub mod booking_expiry;
