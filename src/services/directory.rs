//! Directory service — listing, signup, and unregister.
//!
//! DESIGN
//! ======
//! Each mutation takes the directory write lock once and performs its
//! precondition checks and roster edit under that single acquisition. A
//! failed operation leaves the roster untouched. Per (activity, email) pair
//! the roster is a two-state machine: not-registered ⇄ registered, with
//! signup rejected when already registered and unregister rejected when not.
//!
//! Error `Display` strings double as the HTTP `detail` payloads.

use tracing::info;

use crate::state::{AppState, Directory};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Activity is full")]
    ActivityFull,
    #[error("Participant not found")]
    ParticipantNotFound,
}

/// Snapshot the full directory for listing. Read-only.
pub async fn list_activities(state: &AppState) -> Directory {
    state.directory.read().await.clone()
}

/// Sign `email` up for `name`.
///
/// Preconditions, in order: the activity must exist, the email must not
/// already be on the roster, and — only when capacity enforcement is
/// enabled — the roster must be below `max_participants`.
///
/// # Errors
///
/// Returns `ActivityNotFound`, `AlreadySignedUp`, or `ActivityFull`.
pub async fn signup(state: &AppState, name: &str, email: &str) -> Result<String, DirectoryError> {
    let mut directory = state.directory.write().await;
    let activity = directory.get_mut(name).ok_or(DirectoryError::ActivityNotFound)?;

    if activity.participants.iter().any(|p| p == email) {
        return Err(DirectoryError::AlreadySignedUp);
    }
    if state.enforce_capacity && activity.participants.len() >= activity.max_participants {
        return Err(DirectoryError::ActivityFull);
    }

    activity.participants.push(email.to_owned());
    info!(activity = %name, %email, "participant signed up");
    Ok(format!("Signed up {email} for {name}"))
}

/// Remove `email` from the roster of `name`.
///
/// Preconditions, in order: the activity must exist, then the email must be
/// on its roster. Removal preserves the order of the remaining roster.
///
/// # Errors
///
/// Returns `ActivityNotFound` or `ParticipantNotFound`.
pub async fn unregister(state: &AppState, name: &str, email: &str) -> Result<String, DirectoryError> {
    let mut directory = state.directory.write().await;
    let activity = directory.get_mut(name).ok_or(DirectoryError::ActivityNotFound)?;

    let position = activity
        .participants
        .iter()
        .position(|p| p == email)
        .ok_or(DirectoryError::ParticipantNotFound)?;

    activity.participants.remove(position);
    info!(activity = %name, %email, "participant unregistered");
    Ok(format!("Unregistered {email} from {name}"))
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
