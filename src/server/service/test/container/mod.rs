use crate::server::{
    error::AppError,
    model::container::{CreateContainerParam, UpdateContainerParam},
    service::container::ContainerService,
};
use chrono::Utc;
use entity::container::ContainerStatus;
use test_utils::{builder::TestBuilder, factory};

mod delete;
