use super::*;

/// Tests deleting a booked container by its creator.
///
/// Deletion does not depend on booking status.
///
/// Expected: Ok(1) and the container gone
#[tokio::test]
async fn deletes_container_in_any_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lsp = factory::create_lsp(db).await?;
    let trader = factory::helpers::create_verified_trader(db).await?;
    let container = factory::container::ContainerFactory::new(db, lsp.id)
        .confirmed_for(trader.id)
        .build()
        .await?;

    let repo = ContainerRepository::new(db);
    let rows = repo.delete(container.id, lsp.id).await?;

    assert_eq!(rows, 1);
    assert!(repo.find_by_id(container.id).await?.is_none());

    Ok(())
}

/// Tests deleting a container owned by another LSP.
///
/// Expected: Ok(0) and the container kept
#[tokio::test]
async fn skips_container_of_other_lsp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, container) = factory::helpers::create_container_with_lsp(db).await?;
    let other_lsp = factory::create_lsp(db).await?;

    let repo = ContainerRepository::new(db);
    let rows = repo.delete(container.id, other_lsp.id).await?;

    assert_eq!(rows, 0);
    assert!(repo.find_by_id(container.id).await?.is_some());

    Ok(())
}
