//! # Profile draft
//!
//! Local, editable copy of the personal fields of a [`User`] and the
//! required-field rules applied before it is sent back.

use std::collections::BTreeMap;

use crate::i18n::Translator;
use crate::{ProfileUpdate, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Email,
        ProfileField::Phone,
    ];

    /// Form field name, also used as the input `name` attribute
    pub fn name(self) -> &'static str {
        match self {
            ProfileField::FirstName => "firstName",
            ProfileField::LastName => "lastName",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ProfileField::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn label_key(self) -> &'static str {
        match self {
            ProfileField::FirstName => "profile.firstName",
            ProfileField::LastName => "profile.lastName",
            ProfileField::Email => "profile.email",
            ProfileField::Phone => "profile.phone",
        }
    }

    /// The email address is never editable from the profile form.
    pub fn is_editable(self) -> bool {
        !matches!(self, ProfileField::Email)
    }

    pub fn is_required(self) -> bool {
        !matches!(self, ProfileField::Phone)
    }
}

/// Key of a validation message: one per form field plus the remote failure slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKey {
    Field(ProfileField),
    Api,
}

impl ErrorKey {
    pub fn name(self) -> &'static str {
        match self {
            ErrorKey::Field(field) => field.name(),
            ErrorKey::Api => "api",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    messages: BTreeMap<ErrorKey, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api(message: String) -> Self {
        let mut errors = Self::new();
        errors.insert(ErrorKey::Api, message);
        errors
    }

    pub fn insert(&mut self, key: ErrorKey, message: String) {
        self.messages.insert(key, message);
    }

    pub fn get(&self, key: ErrorKey) -> Option<&str> {
        self.messages.get(&key).map(String::as_str)
    }

    pub fn field(&self, field: ProfileField) -> Option<&str> {
        self.get(ErrorKey::Field(field))
    }

    pub fn contains(&self, key: ErrorKey) -> bool {
        self.messages.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = ErrorKey> + '_ {
        self.messages.keys().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl ProfileDraft {
    /// Seed a draft from the user; missing fields become empty strings.
    pub fn from_user(user: Option<&User>) -> Self {
        let Some(user) = user else {
            return Self::default();
        };
        Self {
            first_name: user.first_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone().unwrap_or_default(),
            email: user.email.clone().unwrap_or_default(),
            phone: user.phone.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
        }
    }

    /// Merge one field into the draft. Returns false for fields the form
    /// does not allow editing.
    pub fn set(&mut self, field: ProfileField, value: String) -> bool {
        let slot = match field {
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Email => return false,
        };
        *slot = value;
        true
    }

    /// Required fields must be non-empty after trimming.
    pub fn validate(&self, t: &Translator) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in ProfileField::ALL {
            if field.is_required() && self.get(field).trim().is_empty() {
                errors.insert(ErrorKey::Field(field), t.t("profile.required"));
            }
        }
        errors
    }

    /// Map the draft back to entity field names. Values are sent as typed.
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            first_name: Some(self.first_name.clone()),
            last_name: Some(self.last_name.clone()),
            email: Some(self.email.clone()),
            phone: Some(self.phone.clone()),
            ..ProfileUpdate::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Language;

    fn sample_user() -> User {
        User {
            first_name: Some("Lucía".to_string()),
            last_name: Some("García".to_string()),
            email: Some("lucia@example.com".to_string()),
            phone: None,
            ..User::default()
        }
    }

    #[test]
    fn test_from_user_fills_missing_fields_with_empty_strings() {
        let draft = ProfileDraft::from_user(Some(&sample_user()));
        assert_eq!(draft.first_name, "Lucía");
        assert_eq!(draft.phone, "");

        assert_eq!(ProfileDraft::from_user(None), ProfileDraft::default());
    }

    #[test]
    fn test_email_is_not_editable() {
        let mut draft = ProfileDraft::from_user(Some(&sample_user()));
        assert!(!draft.set(ProfileField::Email, "other@example.com".to_string()));
        assert_eq!(draft.email, "lucia@example.com");

        assert!(draft.set(ProfileField::Phone, "600 000 000".to_string()));
        assert_eq!(draft.phone, "600 000 000");
    }

    #[test]
    fn test_validate_flags_blank_required_fields() {
        let t = Translator::new(Language::En);
        let draft = ProfileDraft {
            first_name: "   ".to_string(),
            last_name: "García".to_string(),
            email: String::new(),
            phone: String::new(),
        };

        let errors = draft.validate(&t);
        let keys: Vec<_> = errors.keys().collect();
        assert_eq!(
            keys,
            vec![
                ErrorKey::Field(ProfileField::FirstName),
                ErrorKey::Field(ProfileField::Email)
            ]
        );
        assert_eq!(
            errors.field(ProfileField::FirstName),
            Some("This field is required")
        );
    }

    #[test]
    fn test_phone_is_optional() {
        let t = Translator::default();
        let draft = ProfileDraft::from_user(Some(&sample_user()));
        assert!(draft.validate(&t).is_empty());
    }

    #[test]
    fn test_to_update_keeps_values_as_typed() {
        let mut draft = ProfileDraft::from_user(Some(&sample_user()));
        draft.set(ProfileField::FirstName, " Lucía ".to_string());

        let update = draft.to_update();
        assert_eq!(update.first_name.as_deref(), Some(" Lucía "));
        assert_eq!(update.phone.as_deref(), Some(""));
        assert_eq!(update.theme, None);
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in ProfileField::ALL {
            assert_eq!(ProfileField::from_name(field.name()), Some(field));
        }
        assert_eq!(ErrorKey::Api.name(), "api");
        assert_eq!(ProfileField::from_name("password"), None);
    }
}
