//! Account registration and password login.
//!
//! Passwords are stored as argon2 PHC strings; the plain password never leaves this
//! module.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, RegisterUserParam, User},
};

/// Service handling registration and credential checks.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new unverified account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Empty email, name, or password
    /// - `Err(AuthError::EmailTaken)` - An account with this email already exists
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let email = param.email.trim().to_lowercase();

        if email.is_empty() || param.name.trim().is_empty() || param.password.is_empty() {
            return Err(AppError::BadRequest(
                "Email, name and password are required".to_string(),
            ));
        }

        let password_hash = hash_password(&param.password)?;

        // The unique index on `email` decides between concurrent registrations
        let user = UserRepository::new(self.db)
            .create(CreateUserParam {
                email,
                name: param.name.trim().to_string(),
                password_hash,
                role: param.role,
            })
            .await
            .map_err(email_taken_or_db_err)?;

        tracing::info!("Registered user {} as {:?}", user.id, user.role);

        Ok(user)
    }

    /// Checks `password` against the account registered under `email`.
    ///
    /// Unknown email and wrong password produce the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim().to_lowercase();

        let Some((user, password_hash)) = UserRepository::new(self.db)
            .find_credentials_by_email(&email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}

fn email_taken_or_db_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AuthError::EmailTaken.into(),
        _ => err.into(),
    }
}

/// Hashes `password` with argon2 and a random salt.
fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())
        .map_err(|e| AppError::InternalError(format!("Failed to encode password salt: {}", e)))?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Unparsable stored hashes never verify.
fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
