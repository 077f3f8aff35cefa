//! User data repository for database operations.
//!
//! Provides the `UserRepository` for managing accounts. Password hashes are read
//! only through `find_credentials_by_email` and never leave this layer inside the
//! `User` domain model.

use chrono::Utc;
use entity::user::{Column, UserRole};
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new, unverified user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role),
            verified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their stored password hash by email, for login.
    ///
    /// # Returns
    /// - `Ok(Some((User, hash)))` - Account found
    /// - `Ok(None)` - No account with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|entity| {
            let password_hash = entity.password_hash.clone();
            (User::from_entity(entity), password_hash)
        }))
    }

    /// Marks a trader as verified.
    ///
    /// The role filter keeps LSP accounts out of reach of the approval endpoint.
    ///
    /// # Returns
    /// - `Ok(true)` - Trader found and verified
    /// - `Ok(false)` - No trader with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn verify_trader(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(Column::Verified, Expr::value(true))
            .filter(Column::Id.eq(id))
            .filter(Column::Role.eq(UserRole::Trader))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks that `id` belongs to an existing LSP.
    pub async fn is_lsp(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(Column::Id.eq(id))
            .filter(Column::Role.eq(UserRole::Lsp))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
