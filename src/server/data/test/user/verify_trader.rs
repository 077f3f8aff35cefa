use super::*;

/// Tests verifying an unverified trader.
///
/// Expected: Ok(true) and the trader verified
#[tokio::test]
async fn verifies_trader() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trader = factory::create_trader(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.verify_trader(trader.id).await?);

    let stored = repo.find_by_id(trader.id).await?.unwrap();
    assert!(stored.verified);

    Ok(())
}

/// Tests that LSP accounts are not touched.
///
/// Expected: Ok(false)
#[tokio::test]
async fn skips_lsp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lsp = factory::user::UserFactory::new(db)
        .role(UserRole::Lsp)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert!(!repo.verify_trader(lsp.id).await?);
    assert!(repo.is_lsp(lsp.id).await?);

    let stored = repo.find_by_id(lsp.id).await?.unwrap();
    assert!(!stored.verified);

    Ok(())
}

/// Tests verifying an unknown user ID.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.verify_trader(404).await?);

    Ok(())
}
