use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use entity::user::UserRole;
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_credentials_by_email;
mod verify_trader;
