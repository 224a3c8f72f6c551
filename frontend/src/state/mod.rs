//! # Page State
//!
//! Form state containers for the settings page and the async submit flows
//! that drive them. Each container is a plain struct with an `apply` method
//! for its actions and a `Reducible` impl so components can hold it in
//! `use_reducer`. The submit flows receive their collaborators explicitly
//! and report progress through a `dispatch` callback, which keeps them
//! runnable outside the browser.

use async_trait::async_trait;
use shared::{ApiError, ChangePasswordRequest, ProfileUpdate};

pub mod password_form;
pub mod preferences;
pub mod profile_form;

#[cfg(test)]
pub mod test_utils;

/// Persists a partial profile on behalf of the signed-in user
#[async_trait(?Send)]
pub trait ProfileUpdater {
    async fn update_profile(&self, update: ProfileUpdate) -> Result<(), ApiError>;
}

/// Issues the password change request
#[async_trait(?Send)]
pub trait PasswordApi {
    async fn change_password(
        &self,
        token: &str,
        request: &ChangePasswordRequest,
    ) -> Result<(), ApiError>;
}

/// Fire-and-forget user notifications
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
