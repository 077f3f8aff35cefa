use super::*;

/// Tests creating a user.
///
/// Expected: Ok with an unverified user of the requested role
#[tokio::test]
async fn creates_unverified_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            email: "lsp@example.com".to_string(),
            name: "Harbor Logistics".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Lsp,
        })
        .await?;

    assert_eq!(user.email, "lsp@example.com");
    assert_eq!(user.role, UserRole::Lsp);
    assert!(!user.verified);

    Ok(())
}

/// Tests that email addresses are unique.
///
/// Expected: Err reporting a unique constraint violation on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            email: "taken@example.com".to_string(),
            name: "Second".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Trader,
        })
        .await;

    let err = result.expect_err("duplicate email must not insert");
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
