use super::*;

/// Walks one container through a full booking lifecycle with two traders.
///
/// T1 books, T2 is turned away, T1 confirms, T2 cannot cancel.
///
/// Expected: each step yields the documented state or rejection
#[tokio::test]
async fn two_traders_contend_for_one_container() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, c1) = factory::helpers::create_container_with_lsp(db).await?;
    let t1 = actor(factory::helpers::create_verified_trader(db).await?);
    let t2 = actor(factory::helpers::create_verified_trader(db).await?);

    let service = BookingService::new(db);
    let repo = ContainerRepository::new(db);

    let pending = service.book(&t1, c1.id).await?;
    assert_eq!(pending.status, ContainerStatus::Pending);
    assert_eq!(pending.booked_by, Some(t1.id));

    let rejected = service.book(&t2, c1.id).await;
    assert_eq!(
        booking_err(rejected.unwrap_err()),
        BookingError::InvalidState {
            container_id: c1.id,
            status: ContainerStatus::Pending,
        }
    );
    assert_eq!(repo.find_by_id(c1.id).await?.unwrap(), pending);

    let confirmed = service.confirm(&t1, c1.id).await?;
    assert_eq!(confirmed.status, ContainerStatus::Confirmed);
    assert_eq!(confirmed.booked_by, Some(t1.id));
    assert_eq!(confirmed.booked_at, None);

    let rejected = service.cancel(&t2, c1.id).await;
    assert!(matches!(
        booking_err(rejected.unwrap_err()),
        BookingError::Forbidden(_)
    ));
    assert_eq!(repo.find_by_id(c1.id).await?.unwrap(), confirmed);

    Ok(())
}
