use std::cell::RefCell;

use async_trait::async_trait;
use shared::{ApiError, ChangePasswordRequest, ProfileUpdate};

use super::{Notifier, PasswordApi, ProfileUpdater};

/// Profile updater that records every call and answers with a fixed result
pub struct MockProfileUpdater {
    result: Result<(), ApiError>,
    pub calls: RefCell<Vec<ProfileUpdate>>,
}

impl MockProfileUpdater {
    pub fn succeeding() -> Self {
        Self {
            result: Ok(()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(ApiError::Status {
                status: 500,
                message: None,
            }),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl ProfileUpdater for MockProfileUpdater {
    async fn update_profile(&self, update: ProfileUpdate) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(update);
        self.result.clone()
    }
}

/// Password endpoint stand-in; records (token, request) pairs
pub struct MockPasswordApi {
    result: Result<(), ApiError>,
    pub calls: RefCell<Vec<(String, ChangePasswordRequest)>>,
}

impl MockPasswordApi {
    pub fn with_result(result: Result<(), ApiError>) -> Self {
        Self {
            result,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl PasswordApi for MockPasswordApi {
    async fn change_password(
        &self,
        token: &str,
        request: &ChangePasswordRequest,
    ) -> Result<(), ApiError> {
        self.calls
            .borrow_mut()
            .push((token.to_string(), request.clone()));
        self.result.clone()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub successes: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
