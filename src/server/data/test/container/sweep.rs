use super::*;

/// Tests the release sweep on bookings held past the deadline.
///
/// Seeds one pending container booked 25 hours ago and one booked 1 hour ago.
///
/// Expected: only the stale booking returns to available
#[tokio::test]
async fn releases_bookings_older_than_deadline() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lsp = factory::create_lsp(db).await?;
    let trader = factory::helpers::create_verified_trader(db).await?;
    let now = Utc::now();
    let stale = factory::container::ContainerFactory::new(db, lsp.id)
        .pending_for(trader.id, now - Duration::hours(25))
        .build()
        .await?;
    let fresh = factory::container::ContainerFactory::new(db, lsp.id)
        .pending_for(trader.id, now - Duration::hours(1))
        .build()
        .await?;

    let repo = ContainerRepository::new(db);
    let rows = repo
        .sweep(&SweepRule::release_after(24 * 60).plan(now))
        .await?;

    assert_eq!(rows, 1);

    let stale = repo.find_by_id(stale.id).await?.unwrap();
    assert_eq!(stale.status, ContainerStatus::Available);
    assert_eq!(stale.booked_by, None);
    assert_eq!(stale.booked_at, None);

    let fresh = repo.find_by_id(fresh.id).await?.unwrap();
    assert_eq!(fresh.status, ContainerStatus::Pending);
    assert_eq!(fresh.booked_by, Some(trader.id));

    Ok(())
}

/// Tests that sweeps ignore containers that are not pending.
///
/// Seeds confirmed, cancelled and available containers, all created and booked
/// long ago.
///
/// Expected: Ok(0) for both rules and nothing changed
#[tokio::test]
async fn ignores_non_pending_containers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lsp = factory::create_lsp(db).await?;
    let trader = factory::helpers::create_verified_trader(db).await?;
    let long_ago = Utc::now() - Duration::days(30);
    let confirmed = factory::container::ContainerFactory::new(db, lsp.id)
        .confirmed_for(trader.id)
        .created_at(long_ago)
        .build()
        .await?;
    factory::container::ContainerFactory::new(db, lsp.id)
        .cancelled()
        .created_at(long_ago)
        .build()
        .await?;
    factory::container::ContainerFactory::new(db, lsp.id)
        .created_at(long_ago)
        .build()
        .await?;

    let repo = ContainerRepository::new(db);
    let now = Utc::now();

    assert_eq!(repo.sweep(&SweepRule::release_after(24 * 60).plan(now)).await?, 0);
    assert_eq!(repo.sweep(&SweepRule::cancel_after(120).plan(now)).await?, 0);

    let confirmed = repo.find_by_id(confirmed.id).await?.unwrap();
    assert_eq!(confirmed.status, ContainerStatus::Confirmed);
    assert_eq!(confirmed.booked_by, Some(trader.id));

    Ok(())
}

/// Tests the cancel sweep, keyed on creation time rather than booking time.
///
/// Seeds a container created 3 hours ago but booked a minute ago, and one created
/// a minute ago.
///
/// Expected: only the old container is cancelled, with booking fields cleared
#[tokio::test]
async fn cancels_pending_containers_created_before_deadline() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let lsp = factory::create_lsp(db).await?;
    let trader = factory::helpers::create_verified_trader(db).await?;
    let now = Utc::now();
    let old = factory::container::ContainerFactory::new(db, lsp.id)
        .created_at(now - Duration::hours(3))
        .pending_for(trader.id, now - Duration::minutes(1))
        .build()
        .await?;
    let new = factory::container::ContainerFactory::new(db, lsp.id)
        .created_at(now - Duration::minutes(1))
        .pending_for(trader.id, now - Duration::minutes(1))
        .build()
        .await?;

    let repo = ContainerRepository::new(db);
    let rows = repo.sweep(&SweepRule::cancel_after(120).plan(now)).await?;

    assert_eq!(rows, 1);

    let old = repo.find_by_id(old.id).await?.unwrap();
    assert_eq!(old.status, ContainerStatus::Cancelled);
    assert_eq!(old.booked_by, None);
    assert_eq!(old.booked_at, None);

    let new = repo.find_by_id(new.id).await?.unwrap();
    assert_eq!(new.status, ContainerStatus::Pending);

    Ok(())
}

/// Tests that a sweep with nothing to do is not an error.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_nothing_expired() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContainerRepository::new(db);
    let rows = repo
        .sweep(&SweepRule::release_after(24 * 60).plan(Utc::now()))
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}
