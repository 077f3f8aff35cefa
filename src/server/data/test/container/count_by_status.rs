use super::*;

/// Tests counting containers per status for one LSP.
///
/// Seeds containers in every status for the LSP and one for another LSP.
///
/// Expected: counts cover only the requested LSP's containers
#[tokio::test]
async fn counts_only_own_containers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lsp = factory::create_lsp(db).await?;
    let other_lsp = factory::create_lsp(db).await?;
    let trader = factory::helpers::create_verified_trader(db).await?;

    factory::create_container(db, lsp.id).await?;
    factory::create_container(db, lsp.id).await?;
    factory::container::ContainerFactory::new(db, lsp.id)
        .pending_for(trader.id, Utc::now())
        .build()
        .await?;
    factory::container::ContainerFactory::new(db, lsp.id)
        .confirmed_for(trader.id)
        .build()
        .await?;
    factory::container::ContainerFactory::new(db, lsp.id)
        .cancelled()
        .build()
        .await?;
    factory::container::ContainerFactory::new(db, other_lsp.id)
        .confirmed_for(trader.id)
        .build()
        .await?;

    let repo = ContainerRepository::new(db);
    let counts = repo.count_by_status(lsp.id).await?;

    assert_eq!(counts.available, 2);
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.confirmed, 1);
    assert_eq!(counts.cancelled, 1);
    assert_eq!(counts.total_bookings(), 2);

    Ok(())
}
