//! Booking state transition rules.
//!
//! Pure decision logic: nothing here touches the store. For an actor request the
//! rules produce a [`Transition`], the pair of a [`Guard`] (the row predicate that
//! must still hold when the update is written) and an [`Effect`] (the field values
//! to write). For the expiry sweeps they produce a [`SweepPlan`] with the same kind
//! of effect keyed on an age cutoff instead of a single row.
//!
//! | Action  | Actor                 | Requires                         | Effect                                   |
//! |---------|-----------------------|----------------------------------|------------------------------------------|
//! | book    | verified trader       | `available`                      | `pending`, holder = actor, booked_at = now |
//! | confirm | trader holding it     | `pending`                        | `confirmed`, booked_at cleared           |
//! | cancel  | trader holding it     | `pending`                        | `available`, holder and booked_at cleared |

use chrono::{DateTime, Duration, Utc};
use entity::{container::ContainerStatus, user::UserRole};

use crate::server::{
    error::booking::BookingError,
    model::{container::Container, user::Actor},
};

/// Actions an actor may request on a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Book,
    Confirm,
    Cancel,
}

/// Who may perform an action and from which status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    pub role: UserRole,
    /// Actor must have been approved by an LSP.
    pub requires_verified: bool,
    /// Actor must be the container's current holder.
    pub requires_holder: bool,
    /// Status the container must be in.
    pub from: ContainerStatus,
}

impl BookingAction {
    /// Capability table entry for this action.
    pub const fn capability(self) -> Capability {
        match self {
            Self::Book => Capability {
                role: UserRole::Trader,
                requires_verified: true,
                requires_holder: false,
                from: ContainerStatus::Available,
            },
            Self::Confirm => Capability {
                role: UserRole::Trader,
                requires_verified: false,
                requires_holder: true,
                from: ContainerStatus::Pending,
            },
            Self::Cancel => Capability {
                role: UserRole::Trader,
                requires_verified: false,
                requires_holder: true,
                from: ContainerStatus::Pending,
            },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::Confirm => "confirm",
            Self::Cancel => "cancel",
        }
    }
}

/// Row predicate evaluated atomically with the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guard {
    pub container_id: i32,
    pub status: ContainerStatus,
    /// Required holder, when the action is restricted to the holder.
    pub booked_by: Option<i32>,
}

/// Field values written by a transition.
///
/// For the optional fields the outer `Option` indicates whether the column is
/// written at all and the inner value is what gets written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    pub status: ContainerStatus,
    pub booked_by: Option<Option<i32>>,
    pub booked_at: Option<Option<DateTime<Utc>>>,
}

impl Effect {
    /// Back to `available` with both booking fields cleared.
    pub const fn release() -> Self {
        Self {
            status: ContainerStatus::Available,
            booked_by: Some(None),
            booked_at: Some(None),
        }
    }
}

/// A legal transition for one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub guard: Guard,
    pub effect: Effect,
}

/// Checks role and verification for `action`, before any container is read.
///
/// # Returns
/// - `Ok(Capability)` - The actor may attempt the action
/// - `Err(BookingError::Forbidden)` - Wrong role, or an unverified trader booking
pub fn authorize(action: BookingAction, actor: &Actor) -> Result<Capability, BookingError> {
    let capability = action.capability();

    if actor.role != capability.role {
        return Err(BookingError::Forbidden(format!(
            "Only traders can {} bookings",
            action.as_str()
        )));
    }

    if capability.requires_verified && !actor.verified {
        return Err(BookingError::Forbidden(
            "Only verified traders can book containers".to_string(),
        ));
    }

    Ok(capability)
}

/// Decides whether `actor` may apply `action` to the observed container.
///
/// Ownership is checked before status, so a non-holder is always `Forbidden`
/// whatever state the container is in.
///
/// # Arguments
/// - `snapshot` - Container as last read from the store
/// - `action` - Requested action
/// - `actor` - Authenticated requester
/// - `now` - Timestamp written to `booked_at` when booking
///
/// # Returns
/// - `Ok(Transition)` - Guard and effect to submit as one conditional update
/// - `Err(BookingError::Forbidden)` - Role, verification, or holder mismatch
/// - `Err(BookingError::InvalidState)` - Container is not in the required status
pub fn decide(
    snapshot: &Container,
    action: BookingAction,
    actor: &Actor,
    now: DateTime<Utc>,
) -> Result<Transition, BookingError> {
    let capability = authorize(action, actor)?;

    if capability.requires_holder && snapshot.booked_by != Some(actor.id) {
        return Err(BookingError::Forbidden(format!(
            "Only the trader holding container {} can {} it",
            snapshot.id,
            action.as_str()
        )));
    }

    if snapshot.status != capability.from {
        return Err(BookingError::InvalidState {
            container_id: snapshot.id,
            status: snapshot.status,
        });
    }

    let effect = match action {
        BookingAction::Book => Effect {
            status: ContainerStatus::Pending,
            booked_by: Some(Some(actor.id)),
            booked_at: Some(Some(now)),
        },
        BookingAction::Confirm => Effect {
            status: ContainerStatus::Confirmed,
            booked_by: None,
            booked_at: Some(None),
        },
        BookingAction::Cancel => Effect::release(),
    };

    Ok(Transition {
        guard: Guard {
            container_id: snapshot.id,
            status: capability.from,
            booked_by: capability.requires_holder.then_some(actor.id),
        },
        effect,
    })
}

/// What an expiry sweep does to the rows it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepEffect {
    /// Pending bookings older than the deadline by `booked_at` return to `available`.
    ReleaseToAvailable,
    /// Pending containers older than the deadline by `created_at` become `cancelled`.
    CancelStale,
}

/// Timestamp column a sweep compares against its cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepKey {
    BookedAt,
    CreatedAt,
}

/// One independently schedulable sweep configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepRule {
    pub deadline: Duration,
    pub effect: SweepEffect,
}

/// Bulk conditional update for one sweep run.
///
/// Selects `status = pending AND <key> < cutoff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPlan {
    pub key: SweepKey,
    pub cutoff: DateTime<Utc>,
    pub effect: Effect,
}

impl SweepRule {
    /// Deadlines beyond the representable range saturate to `Duration::MAX`.
    pub fn new(deadline_minutes: i64, effect: SweepEffect) -> Self {
        Self {
            deadline: Duration::try_minutes(deadline_minutes).unwrap_or(Duration::MAX),
            effect,
        }
    }

    /// Release pending bookings held longer than `deadline_minutes`.
    pub fn release_after(deadline_minutes: i64) -> Self {
        Self::new(deadline_minutes, SweepEffect::ReleaseToAvailable)
    }

    /// Cancel pending containers created more than `deadline_minutes` ago.
    pub fn cancel_after(deadline_minutes: i64) -> Self {
        Self::new(deadline_minutes, SweepEffect::CancelStale)
    }

    /// Builds the bulk update for a run at `now`.
    ///
    /// A cutoff earlier than the earliest representable time clamps to it, so
    /// the plan selects nothing instead of overflowing.
    pub fn plan(&self, now: DateTime<Utc>) -> SweepPlan {
        let cutoff = now
            .checked_sub_signed(self.deadline)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        match self.effect {
            SweepEffect::ReleaseToAvailable => SweepPlan {
                key: SweepKey::BookedAt,
                cutoff,
                effect: Effect::release(),
            },
            SweepEffect::CancelStale => SweepPlan {
                key: SweepKey::CreatedAt,
                cutoff,
                effect: Effect {
                    status: ContainerStatus::Cancelled,
                    booked_by: Some(None),
                    booked_at: Some(None),
                },
            },
        }
    }
}
