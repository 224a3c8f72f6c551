use std::fmt;
use std::rc::Rc;

use log::{info, warn};
use shared::{ChangePasswordRequest, Translator};
use yew::Reducible;

use super::{Notifier, PasswordApi};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordField {
    Current,
    New,
    Confirm,
}

impl PasswordField {
    pub const ALL: [PasswordField; 3] = [
        PasswordField::Current,
        PasswordField::New,
        PasswordField::Confirm,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PasswordField::Current => "current",
            PasswordField::New => "new",
            PasswordField::Confirm => "confirm",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        PasswordField::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn label_key(self) -> &'static str {
        match self {
            PasswordField::Current => "profile.currentPassword",
            PasswordField::New => "profile.newPassword",
            PasswordField::Confirm => "profile.confirmNewPassword",
        }
    }

    pub fn placeholder_key(self) -> &'static str {
        match self {
            PasswordField::Current => "profile.currentPasswordPlaceholder",
            PasswordField::New => "profile.newPasswordPlaceholder",
            PasswordField::Confirm => "profile.confirmNewPasswordPlaceholder",
        }
    }

    pub fn autocomplete(self) -> &'static str {
        match self {
            PasswordField::Current => "current-password",
            PasswordField::New | PasswordField::Confirm => "new-password",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Default)]
pub struct PasswordDraft {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl fmt::Debug for PasswordDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDraft")
            .field("current_len", &self.current.len())
            .field("new_len", &self.new.len())
            .field("confirm_len", &self.confirm.len())
            .finish()
    }
}

impl PasswordDraft {
    pub fn get(&self, field: PasswordField) -> &str {
        match field {
            PasswordField::Current => &self.current,
            PasswordField::New => &self.new,
            PasswordField::Confirm => &self.confirm,
        }
    }

    fn slot(&mut self, field: PasswordField) -> &mut String {
        match field {
            PasswordField::Current => &mut self.current,
            PasswordField::New => &mut self.new,
            PasswordField::Confirm => &mut self.confirm,
        }
    }

    /// All three fields filled and the confirmation matching exactly.
    pub fn validate(&self, t: &Translator) -> Result<ChangePasswordRequest, String> {
        if self.current.is_empty() || self.new.is_empty() || self.confirm.is_empty() {
            return Err(t.t("profile.passwordRequired"));
        }
        if self.new != self.confirm {
            return Err(t.t("profile.passwordsDontMatch"));
        }
        Ok(ChangePasswordRequest {
            current_password: self.current.clone(),
            new_password: self.new.clone(),
        })
    }
}

/// Masked/plaintext toggle per field; display only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    current: bool,
    new: bool,
    confirm: bool,
}

impl Visibility {
    pub fn is_visible(&self, field: PasswordField) -> bool {
        match field {
            PasswordField::Current => self.current,
            PasswordField::New => self.new,
            PasswordField::Confirm => self.confirm,
        }
    }

    fn toggle(&mut self, field: PasswordField) {
        let flag = match field {
            PasswordField::Current => &mut self.current,
            PasswordField::New => &mut self.new,
            PasswordField::Confirm => &mut self.confirm,
        };
        *flag = !*flag;
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PasswordFormState {
    pub draft: PasswordDraft,
    pub visibility: Visibility,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PasswordFormAction {
    Edit(PasswordField, String),
    ToggleVisibility(PasswordField),
    Rejected(String),
    Started,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordSubmitOutcome {
    /// A request is already in flight
    Busy,
    Rejected,
    Updated,
    Failed,
}

impl PasswordFormState {
    pub fn apply(&mut self, action: PasswordFormAction) {
        match action {
            PasswordFormAction::Edit(field, value) => *self.draft.slot(field) = value,
            PasswordFormAction::ToggleVisibility(field) => self.visibility.toggle(field),
            PasswordFormAction::Rejected(message) => self.error = Some(message),
            PasswordFormAction::Started => {
                self.error = None;
                self.loading = true;
            }
            PasswordFormAction::Succeeded => {
                self.draft = PasswordDraft::default();
                self.loading = false;
            }
            PasswordFormAction::Failed(message) => {
                self.error = Some(message);
                self.loading = false;
            }
        }
    }
}

impl Reducible for PasswordFormState {
    type Action = PasswordFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Check the draft locally, then send a single change request.
pub async fn submit_password(
    form: &PasswordFormState,
    token: &str,
    api: &dyn PasswordApi,
    notifier: &dyn Notifier,
    t: &Translator,
    dispatch: &dyn Fn(PasswordFormAction),
) -> PasswordSubmitOutcome {
    if form.loading {
        return PasswordSubmitOutcome::Busy;
    }

    let request = match form.draft.validate(t) {
        Ok(request) => request,
        Err(message) => {
            warn!(target: "password", "Password change blocked: {}", message);
            dispatch(PasswordFormAction::Rejected(message));
            return PasswordSubmitOutcome::Rejected;
        }
    };

    dispatch(PasswordFormAction::Started);
    info!(target: "password", "Submitting password change");

    match api.change_password(token, &request).await {
        Ok(()) => {
            info!(target: "password", "Password changed");
            dispatch(PasswordFormAction::Succeeded);
            notifier.success(&t.t("profile.passwordUpdated"));
            PasswordSubmitOutcome::Updated
        }
        Err(e) => {
            warn!(target: "password", "Password change failed: {}", e);
            let message = e
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| t.t("profile.passwordUpdateError"));
            notifier.error(&message);
            dispatch(PasswordFormAction::Failed(message));
            PasswordSubmitOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Language;

    #[test]
    fn test_validate_requires_every_field() {
        let t = Translator::new(Language::Es);
        let draft = PasswordDraft {
            current: "old".to_string(),
            new: String::new(),
            confirm: "new".to_string(),
        };
        assert_eq!(
            draft.validate(&t).unwrap_err(),
            "Todos los campos son obligatorios"
        );
    }

    #[test]
    fn test_validate_compares_exactly() {
        let t = Translator::new(Language::En);
        let draft = PasswordDraft {
            current: "old".to_string(),
            new: "secret".to_string(),
            confirm: "secret ".to_string(),
        };
        assert_eq!(draft.validate(&t).unwrap_err(), "Passwords do not match");
    }

    #[test]
    fn test_toggle_is_per_field() {
        let mut form = PasswordFormState::default();
        form.apply(PasswordFormAction::ToggleVisibility(PasswordField::New));

        assert!(form.visibility.is_visible(PasswordField::New));
        assert!(!form.visibility.is_visible(PasswordField::Current));
        assert!(!form.visibility.is_visible(PasswordField::Confirm));

        form.apply(PasswordFormAction::ToggleVisibility(PasswordField::New));
        assert!(!form.visibility.is_visible(PasswordField::New));
    }

    #[test]
    fn test_started_clears_previous_error() {
        let mut form = PasswordFormState::default();
        form.apply(PasswordFormAction::Rejected("mismatch".to_string()));
        form.apply(PasswordFormAction::Started);

        assert_eq!(form.error, None);
        assert!(form.loading);
    }

    #[test]
    fn test_debug_does_not_print_secrets() {
        let draft = PasswordDraft {
            current: "hunter2".to_string(),
            new: "swordfish".to_string(),
            confirm: "swordfish".to_string(),
        };
        let rendered = format!("{:?}", draft);
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("swordfish"));
    }
}
