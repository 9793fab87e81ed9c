use axum::http::StatusCode;
use thiserror::Error;

use crate::database::activity_store::ActivityStore;
use crate::models::{ActivityName, StudentEmail};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
}

impl SignupError {
    pub fn status(self) -> StatusCode {
        match self {
            SignupError::ActivityNotFound => StatusCode::NOT_FOUND,
            SignupError::AlreadySignedUp => StatusCode::BAD_REQUEST,
        }
    }

    /// Stable identifier used in log events.
    pub fn code(self) -> &'static str {
        match self {
            SignupError::ActivityNotFound => "activity_not_found",
            SignupError::AlreadySignedUp => "already_signed_up",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupReceipt {
    pub activity: ActivityName,
    pub email: StudentEmail,
    pub participants_count: usize,
    pub max_participants: u32,
}

impl SignupReceipt {
    pub fn message(&self) -> String {
        format!("Signed up {} for {}", self.email, self.activity)
    }

    /// Capacity is advisory; a roster may grow past it.
    pub fn over_capacity(&self) -> bool {
        self.participants_count > self.max_participants as usize
    }
}

/// Registers `email` for `activity`.
///
/// The existence check, the duplicate check and the append happen under one
/// write lock, so concurrent signups for the same student append at most once.
pub fn sign_up(
    store: &ActivityStore,
    activity: &ActivityName,
    email: &StudentEmail,
) -> Result<SignupReceipt, SignupError> {
    store
        .with_activity_mut(activity, |record| {
            if record.is_signed_up(email) {
                return Err(SignupError::AlreadySignedUp);
            }
            record.participants.push(email.clone());
            Ok(SignupReceipt {
                activity: activity.clone(),
                email: email.clone(),
                participants_count: record.participants_count(),
                max_participants: record.max_participants,
            })
        })
        .unwrap_or(Err(SignupError::ActivityNotFound))
}
