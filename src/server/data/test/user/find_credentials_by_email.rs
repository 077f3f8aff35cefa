use super::*;

/// Tests looking up credentials for a registered email.
///
/// Expected: Ok(Some) with the user and stored hash
#[tokio::test]
async fn returns_user_and_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("trader@example.com")
        .password_hash("$argon2id$stored")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (found, hash) = repo
        .find_credentials_by_email("trader@example.com")
        .await?
        .unwrap();

    assert_eq!(found.id, user.id);
    assert_eq!(hash, "$argon2id$stored");

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_credentials_by_email("nobody@example.com").await?;

    assert!(result.is_none());

    Ok(())
}
