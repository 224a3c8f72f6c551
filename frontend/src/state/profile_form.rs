use std::rc::Rc;

use log::{info, warn};
use shared::{FieldErrors, ProfileDraft, ProfileField, Translator, User};
use yew::Reducible;

use super::{Notifier, ProfileUpdater};

/// Personal information form: a draft seeded from the user, an edit toggle
/// and the messages produced by the last submit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileFormState {
    source: Option<User>,
    pub draft: ProfileDraft,
    pub errors: FieldErrors,
    pub editing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileFormAction {
    /// The context user was replaced; re-seed the draft if it differs
    SourceChanged(Option<User>),
    Edit(ProfileField, String),
    BeginEdit,
    Cancel,
    /// Validation failed with these messages
    Rejected(FieldErrors),
    /// Validation passed, the update is on its way
    Submitted,
    Saved,
    SaveFailed(String),
}

/// How a profile submit ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSubmitOutcome {
    Rejected,
    Saved,
    Failed,
}

impl ProfileFormState {
    pub fn new(user: Option<User>) -> Self {
        Self {
            draft: ProfileDraft::from_user(user.as_ref()),
            source: user,
            ..Self::default()
        }
    }

    /// Whether the input for `field` accepts typing
    pub fn is_field_enabled(&self, field: ProfileField) -> bool {
        self.editing && field.is_editable()
    }

    fn reset_from_source(&mut self) {
        self.draft = ProfileDraft::from_user(self.source.as_ref());
    }

    pub fn apply(&mut self, action: ProfileFormAction) {
        match action {
            ProfileFormAction::SourceChanged(user) => {
                if self.source != user {
                    self.source = user;
                    self.reset_from_source();
                }
            }
            ProfileFormAction::Edit(field, value) => {
                self.draft.set(field, value);
            }
            ProfileFormAction::BeginEdit => self.editing = true,
            ProfileFormAction::Cancel => {
                self.reset_from_source();
                self.editing = false;
            }
            ProfileFormAction::Rejected(errors) => self.errors = errors,
            ProfileFormAction::Submitted => self.errors = FieldErrors::new(),
            ProfileFormAction::Saved => self.editing = false,
            ProfileFormAction::SaveFailed(message) => self.errors = FieldErrors::api(message),
        }
    }
}

impl Reducible for ProfileFormState {
    type Action = ProfileFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Validate the draft and, if it passes, hand it to the updater.
pub async fn submit_profile(
    form: &ProfileFormState,
    updater: &dyn ProfileUpdater,
    notifier: &dyn Notifier,
    t: &Translator,
    dispatch: &dyn Fn(ProfileFormAction),
) -> ProfileSubmitOutcome {
    let errors = form.draft.validate(t);
    if !errors.is_empty() {
        warn!(
            target: "profile",
            "Profile submit blocked: {} required field(s) empty",
            errors.len()
        );
        dispatch(ProfileFormAction::Rejected(errors));
        return ProfileSubmitOutcome::Rejected;
    }

    dispatch(ProfileFormAction::Submitted);
    info!(target: "profile", "Saving profile changes");

    match updater.update_profile(form.draft.to_update()).await {
        Ok(()) => {
            info!(target: "profile", "Profile saved");
            dispatch(ProfileFormAction::Saved);
            notifier.success(&t.t("profile.profileUpdated"));
            ProfileSubmitOutcome::Saved
        }
        Err(e) => {
            warn!(target: "profile", "Profile update failed: {}", e);
            dispatch(ProfileFormAction::SaveFailed(t.t("profile.apiError")));
            notifier.error(&t.t("profile.profileUpdateError"));
            ProfileSubmitOutcome::Failed
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod submit_tests {
    use std::cell::RefCell;

    use super::*;
    use crate::state::test_utils::{MockProfileUpdater, RecordingNotifier};
    use shared::{ErrorKey, Language};

    fn user() -> User {
        User {
            first_name: Some("Lucía".to_string()),
            last_name: Some("García".to_string()),
            email: Some("lucia@example.com".to_string()),
            phone: None,
            ..User::default()
        }
    }

    async fn submit(
        form: &RefCell<ProfileFormState>,
        updater: &MockProfileUpdater,
        notifier: &RecordingNotifier,
    ) -> ProfileSubmitOutcome {
        let t = Translator::new(Language::En);
        let snapshot = form.borrow().clone();
        let dispatch = |action| form.borrow_mut().apply(action);
        submit_profile(&snapshot, updater, notifier, &t, &dispatch).await
    }

    #[tokio::test]
    async fn test_blank_required_fields_never_reach_the_updater() {
        let blanks = [
            (ProfileField::FirstName, ""),
            (ProfileField::LastName, "   "),
        ];
        for (field, value) in blanks {
            let form = RefCell::new(ProfileFormState::new(Some(user())));
            form.borrow_mut().apply(ProfileFormAction::BeginEdit);
            form.borrow_mut()
                .apply(ProfileFormAction::Edit(field, value.to_string()));
            let updater = MockProfileUpdater::succeeding();
            let notifier = RecordingNotifier::default();

            let outcome = submit(&form, &updater, &notifier).await;

            assert_eq!(outcome, ProfileSubmitOutcome::Rejected);
            assert_eq!(updater.call_count(), 0);
            let form = form.borrow();
            assert_eq!(form.errors.field(field), Some("This field is required"));
            assert!(form.editing);
        }
    }

    #[tokio::test]
    async fn test_missing_email_is_reported() {
        let no_email = User {
            email: None,
            ..user()
        };
        let form = RefCell::new(ProfileFormState::new(Some(no_email)));
        let updater = MockProfileUpdater::succeeding();
        let notifier = RecordingNotifier::default();

        submit(&form, &updater, &notifier).await;

        assert_eq!(updater.call_count(), 0);
        assert!(form
            .borrow()
            .errors
            .contains(ErrorKey::Field(ProfileField::Email)));
    }

    #[tokio::test]
    async fn test_successful_save_leaves_edit_mode() {
        let form = RefCell::new(ProfileFormState::new(Some(user())));
        form.borrow_mut().apply(ProfileFormAction::BeginEdit);
        form.borrow_mut()
            .apply(ProfileFormAction::Edit(ProfileField::Phone, "600111222".to_string()));
        let updater = MockProfileUpdater::succeeding();
        let notifier = RecordingNotifier::default();

        let outcome = submit(&form, &updater, &notifier).await;

        assert_eq!(outcome, ProfileSubmitOutcome::Saved);
        let calls = updater.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].first_name.as_deref(), Some("Lucía"));
        assert_eq!(calls[0].email.as_deref(), Some("lucia@example.com"));
        assert_eq!(calls[0].phone.as_deref(), Some("600111222"));
        assert!(!form.borrow().editing);
        assert!(form.borrow().errors.is_empty());
        assert_eq!(*notifier.successes.borrow(), vec!["Profile updated successfully"]);
    }

    #[tokio::test]
    async fn test_failed_save_sets_api_error_and_stays_editing() {
        let form = RefCell::new(ProfileFormState::new(Some(user())));
        form.borrow_mut().apply(ProfileFormAction::BeginEdit);
        let updater = MockProfileUpdater::failing();
        let notifier = RecordingNotifier::default();

        let outcome = submit(&form, &updater, &notifier).await;

        assert_eq!(outcome, ProfileSubmitOutcome::Failed);
        let form = form.borrow();
        assert!(form.editing);
        assert_eq!(
            form.errors.get(ErrorKey::Api),
            Some("Your changes could not be saved. Please try again.")
        );
        assert_eq!(*notifier.errors.borrow(), vec!["Error updating profile"]);
        assert!(notifier.successes.borrow().is_empty());
    }
}
