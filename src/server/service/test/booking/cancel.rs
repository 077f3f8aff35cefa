use super::*;

/// Tests cancelling a pending booking by its holder.
///
/// Expected: Ok with status available and booking fields cleared
#[tokio::test]
async fn cancels_own_booking() -> Result<(), AppError> {
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

    let released = BookingService::new(db)
        .cancel(&actor(holder), container.id)
        .await?;

    assert_eq!(released.status, ContainerStatus::Available);
    assert_eq!(released.booked_by, None);
    assert_eq!(released.booked_at, None);
    assert_booking_fields_consistent(&released);

    Ok(())
}

/// Tests cancelling another trader's pending booking.
///
/// Expected: Err(Forbidden) and the booking kept
#[tokio::test]
async fn rejects_non_holder() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lsp = factory::create_lsp(db).await?;
    let holder = factory::helpers::create_verified_trader(db).await?;
    let other = factory::helpers::create_verified_trader(db).await?;
    let container = factory::container::ContainerFactory::new(db, lsp.id)
        .pending_for(holder.id, Utc::now())
        .build()
        .await?;

    let result = BookingService::new(db)
        .cancel(&actor(other), container.id)
        .await;

    assert!(matches!(
        booking_err(result.unwrap_err()),
        BookingError::Forbidden(_)
    ));

    let stored = ContainerRepository::new(db)
        .find_by_id(container.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, ContainerStatus::Pending);
    assert_eq!(stored.booked_by, Some(holder.id));

    Ok(())
}

/// Tests cancelling a confirmed booking.
///
/// Confirmed bookings are final for the holder.
///
/// Expected: Err(InvalidState)
#[tokio::test]
async fn rejects_confirmed_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lsp = factory::create_lsp(db).await?;
    let holder = factory::helpers::create_verified_trader(db).await?;
    let container = factory::container::ContainerFactory::new(db, lsp.id)
        .confirmed_for(holder.id)
        .build()
        .await?;

    let result = BookingService::new(db)
        .cancel(&actor(holder), container.id)
        .await;

    assert!(matches!(
        booking_err(result.unwrap_err()),
        BookingError::InvalidState { .. }
    ));

    Ok(())
}
