use super::*;

/// Tests deleting a pending container by its creator.
///
/// Expected: Ok and the container gone
#[tokio::test]
async fn deletes_own_container_regardless_of_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lsp = factory::create_lsp(db).await?;
    let trader = factory::helpers::create_verified_trader(db).await?;
    let container = factory::container::ContainerFactory::new(db, lsp.id)
        .pending_for(trader.id, Utc::now())
        .build()
        .await?;

    let service = ContainerService::new(db);
    service.delete(container.id, lsp.id).await?;

    assert!(matches!(
        service.get(container.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting another LSP's container, and a missing one.
///
/// Expected: Err(Forbidden) and Err(NotFound)
#[tokio::test]
async fn rejects_other_lsp_and_missing_container() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, container) = factory::helpers::create_container_with_lsp(db).await?;
    let other_lsp = factory::create_lsp(db).await?;

    let service = ContainerService::new(db);

    assert!(matches!(
        service.delete(container.id, other_lsp.id).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service.delete(999, other_lsp.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(service.get(container.id).await.is_ok());

    Ok(())
}
