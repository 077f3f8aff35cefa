use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::RegisterUserParam,
    service::auth::AuthService,
};
use entity::user::UserRole;
use test_utils::{builder::TestBuilder, factory};

mod login;

fn registration(email: &str, password: &str) -> RegisterUserParam {
    RegisterUserParam {
        email: email.to_string(),
        name: "Test Trader".to_string(),
        password: password.to_string(),
        role: UserRole::Trader,
    }
}
