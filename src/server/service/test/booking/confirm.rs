use super::*;

/// Tests confirming a pending booking by its holder.
///
/// Expected: Ok with status confirmed, holder kept, booked_at cleared
#[tokio::test]
async fn confirms_own_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lsp = factory::create_lsp(db).await?;
    let holder = factory::helpers::create_verified_trader(db).await?;
    let container = factory::container::ContainerFactory::new(db, lsp.id)
        .pending_for(holder.id, Utc::now())
        .build()
        .await?;

    let confirmed = BookingService::new(db)
        .confirm(&actor(holder.clone()), container.id)
        .await?;

    assert_eq!(confirmed.status, ContainerStatus::Confirmed);
    assert_eq!(confirmed.booked_by, Some(holder.id));
    assert_eq!(confirmed.booked_at, None);
    assert_booking_fields_consistent(&confirmed);

    Ok(())
}

/// Tests that confirm by a non-holder is forbidden in every status.
///
/// Expected: Err(Forbidden) for available, pending, confirmed and cancelled
#[tokio::test]
async fn rejects_non_holder_in_every_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lsp = factory::create_lsp(db).await?;
    let holder = factory::helpers::create_verified_trader(db).await?;
    let other = actor(factory::helpers::create_verified_trader(db).await?);

    let containers = vec![
        factory::create_container(db, lsp.id).await?,
        factory::container::ContainerFactory::new(db, lsp.id)
            .pending_for(holder.id, Utc::now())
            .build()
            .await?,
        factory::container::ContainerFactory::new(db, lsp.id)
            .confirmed_for(holder.id)
            .build()
            .await?,
        factory::container::ContainerFactory::new(db, lsp.id)
            .cancelled()
            .build()
            .await?,
    ];

    let service = BookingService::new(db);
    for container in containers {
        let result = service.confirm(&other, container.id).await;

        assert!(
            matches!(booking_err(result.unwrap_err()), BookingError::Forbidden(_)),
            "confirm of {:?} container should be forbidden",
            container.status
        );
    }

    Ok(())
}

/// Tests re-issuing a confirm that already succeeded.
///
/// Expected: Err(InvalidState) and the container unchanged
#[tokio::test]
async fn repeated_confirm_is_invalid_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lsp = factory::create_lsp(db).await?;
    let holder = factory::helpers::create_verified_trader(db).await?;
    let container = factory::container::ContainerFactory::new(db, lsp.id)
        .pending_for(holder.id, Utc::now())
        .build()
        .await?;

    let service = BookingService::new(db);
    let holder = actor(holder);
    let confirmed = service.confirm(&holder, container.id).await?;

    let result = service.confirm(&holder, container.id).await;

    assert_eq!(
        booking_err(result.unwrap_err()),
        BookingError::InvalidState {
            container_id: container.id,
            status: ContainerStatus::Confirmed,
        }
    );

    let stored = ContainerRepository::new(db)
        .find_by_id(container.id)
        .await?
        .unwrap();
    assert_eq!(stored, confirmed);

    Ok(())
}
