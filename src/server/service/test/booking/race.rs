use super::*;

/// Tests two traders booking the same container concurrently.
///
/// Both requests run against the same available container. The store decides the
/// winner through the conditional update.
///
/// Expected: exactly one success, the other RaceLost or InvalidState, final state
/// pending for the winner
#[tokio::test]
async fn concurrent_bookings_have_one_winner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, container) = factory::helpers::create_container_with_lsp(db).await?;
    let first = actor(factory::helpers::create_verified_trader(db).await?);
    let second = actor(factory::helpers::create_verified_trader(db).await?);

    let service = BookingService::new(db);
    let (first_result, second_result) = tokio::join!(
        service.book(&first, container.id),
        service.book(&second, container.id)
    );

    let (winner, loser_err) = match (first_result, second_result) {
        (Ok(_), Err(err)) => (first.id, err),
        (Err(err), Ok(_)) => (second.id, err),
        (a, b) => panic!("Expected exactly one winner, got {:?} and {:?}", a, b),
    };

    assert!(matches!(
        booking_err(loser_err),
        BookingError::RaceLost(_) | BookingError::InvalidState { .. }
    ));

    let stored = ContainerRepository::new(db)
        .find_by_id(container.id)
        .await?
        .unwrap();
    assert_eq!(stored.status, ContainerStatus::Pending);
    assert_eq!(stored.booked_by, Some(winner));
    assert_booking_fields_consistent(&stored);

    Ok(())
}

/// Tests a transition decided against a snapshot that is no longer current.
///
/// Reads the container, lets another trader book it, then submits a booking based
/// on the stale read.
///
/// Expected: Err(RaceLost) and the other trader still holding the container
#[tokio::test]
async fn stale_snapshot_loses_race() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, container) = factory::helpers::create_container_with_lsp(db).await?;
    let early = actor(factory::helpers::create_verified_trader(db).await?);
    let late = actor(factory::helpers::create_verified_trader(db).await?);

    let repo = ContainerRepository::new(db);
    let snapshot = repo.find_by_id(container.id).await?.unwrap();

    let service = BookingService::new(db);
    service.book(&early, container.id).await?;

    let result = service
        .transition_from(&late, BookingAction::Book, &snapshot)
        .await;

    assert_eq!(
        booking_err(result.unwrap_err()),
        BookingError::RaceLost(container.id)
    );

    let stored = repo.find_by_id(container.id).await?.unwrap();
    assert_eq!(stored.booked_by, Some(early.id));

    Ok(())
}

/// Tests a transition against a snapshot of a container deleted since.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn deleted_container_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (lsp, container) = factory::helpers::create_container_with_lsp(db).await?;
    let trader = actor(factory::helpers::create_verified_trader(db).await?);

    let repo = ContainerRepository::new(db);
    let snapshot = repo.find_by_id(container.id).await?.unwrap();
    repo.delete(container.id, lsp.id).await?;

    let result = BookingService::new(db)
        .transition_from(&trader, BookingAction::Book, &snapshot)
        .await;

    assert_eq!(
        booking_err(result.unwrap_err()),
        BookingError::NotFound(container.id)
    );

    Ok(())
}

/// Tests that a holder's cancel decided before an expiry sweep loses to it.
///
/// Expected: Err(RaceLost) and the container left as the sweep wrote it
#[tokio::test]
async fn cancel_after_sweep_loses_race() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lsp = factory::create_lsp(db).await?;
    let holder = factory::helpers::create_verified_trader(db).await?;
    let container = factory::container::ContainerFactory::new(db, lsp.id)
        .pending_for(holder.id, Utc::now() - chrono::Duration::hours(30))
        .build()
        .await?;

    let repo = ContainerRepository::new(db);
    let snapshot = repo.find_by_id(container.id).await?.unwrap();

    ExpirySweeper::new(db)
        .sweep(&SweepRule::release_after(24 * 60), Utc::now())
        .await?;

    let result = BookingService::new(db)
        .transition_from(&actor(holder), BookingAction::Cancel, &snapshot)
        .await;

    assert_eq!(
        booking_err(result.unwrap_err()),
        BookingError::RaceLost(container.id)
    );

    let stored = repo.find_by_id(container.id).await?.unwrap();
    assert_eq!(stored.status, ContainerStatus::Available);
    assert_booking_fields_consistent(&stored);

    Ok(())
}
