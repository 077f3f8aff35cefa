use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContainerStatusDto {
    Available,
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ContainerDto {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub status: ContainerStatusDto,
    pub booked_by: Option<i32>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub booked_at: Option<DateTime<Utc>>,
    pub created_by: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateContainerDto {
    pub name: String,
    pub capacity: i32,
}

/// Partial update; omitted fields are left unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateContainerDto {
    pub name: Option<String>,
    pub capacity: Option<i32>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContainerListQuery {
    /// Only return containers in this status
    pub status: Option<ContainerStatusDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
pub struct SweepResultDto {
    pub affected_rows: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
pub struct ContainerStatsDto {
    pub available: u64,
    pub pending: u64,
    pub confirmed: u64,
    pub cancelled: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
pub struct LspAnalyticsDto {
    pub container_stats: ContainerStatsDto,
    /// Pending plus confirmed
    pub total_bookings: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct SuggestionRequestDto {
    pub cargo_type: Option<String>,
    pub destination: Option<String>,
}
