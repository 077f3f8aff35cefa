use super::*;

/// Tests logging in with the registered password.
///
/// Expected: Ok with the registered user
#[tokio::test]
async fn logs_in_with_correct_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let registered = service
        .register(registration("trader@example.com", "s3cret-pass"))
        .await?;

    let user = service.login("TRADER@example.com", "s3cret-pass").await?;

    assert_eq!(user, registered);

    Ok(())
}

/// Tests logging in with a wrong password and an unknown email.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_wrong_password_and_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .register(registration("trader@example.com", "s3cret-pass"))
        .await?;

    assert!(matches!(
        service.login("trader@example.com", "wrong-pass").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        service.login("nobody@example.com", "s3cret-pass").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
