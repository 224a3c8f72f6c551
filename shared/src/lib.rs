use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod api;
pub mod billing;
pub mod i18n;
pub mod profile;

pub use api::{interpret_response, ApiError, ApiErrorBody};
pub use billing::{format_date, BillingPeriod, BillingSummary, PlanFeature};
pub use i18n::Translator;
pub use profile::{ErrorKey, FieldErrors, ProfileDraft, ProfileField};

/// Account as returned by `GET /auth/me`.
///
/// Every field is optional on the wire; the backend omits or nulls whatever
/// the user never filled in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Raw billing period, "monthly" or "annual"
    #[serde(default)]
    pub billing_period: Option<String>,
    /// Plan renewal date (RFC 3339 or YYYY-MM-DD)
    #[serde(default)]
    pub plan_end_date: Option<String>,
    #[serde(default)]
    pub optimizations_used_today: Option<u32>,
    #[serde(default)]
    pub plan: Option<PlanTier>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub currency: Option<Currency>,
}

impl User {
    /// True when the record names an account. Acknowledgement bodies such as
    /// `{"message": "..."}` also decode as a `User`, with every field empty.
    pub fn is_identified(&self) -> bool {
        self.email.as_deref().is_some_and(|email| !email.trim().is_empty())
    }
}

/// Subscription tier of the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Free,
    Pro,
    Premium,
}

impl PlanTier {
    pub const ALL: [PlanTier; 3] = [PlanTier::Free, PlanTier::Pro, PlanTier::Premium];

    pub fn as_str(self) -> &'static str {
        match self {
            PlanTier::Free => "free",
            PlanTier::Pro => "pro",
            PlanTier::Premium => "premium",
        }
    }

    /// Display label, identical in every language
    pub fn label(self) -> &'static str {
        match self {
            PlanTier::Free => "Free",
            PlanTier::Pro => "Pro",
            PlanTier::Premium => "Premium",
        }
    }

    /// Portfolio optimizations allowed per day
    pub fn daily_optimization_limit(self) -> u32 {
        match self {
            PlanTier::Free => 1,
            PlanTier::Pro => 3,
            PlanTier::Premium => 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Translation key of the option label
    pub fn label_key(self) -> &'static str {
        match self {
            Theme::Light => "profile.light",
            Theme::Dark => "profile.dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Es, Language::En];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Language::Es => "app.spanish",
            Language::En => "app.english",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Eur, Currency::Usd];

    pub fn as_str(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Currency::Eur => "profile.euro",
            Currency::Usd => "profile.dollar",
        }
    }
}

/// Error returned when a select value does not name a known option
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value}")]
pub struct ParseValueError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseValueError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl FromStr for PlanTier {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| ParseValueError::new("plan", s))
    }
}

impl FromStr for Theme {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| ParseValueError::new("theme", s))
    }
}

impl FromStr for Language {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.as_str() == s)
            .ok_or_else(|| ParseValueError::new("language", s))
    }
}

impl FromStr for Currency {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.as_str() == s)
            .ok_or_else(|| ParseValueError::new("currency", s))
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display preferences held by the application context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
    pub currency: Currency,
}

impl Preferences {
    /// Take every preference the backend has stored for this user
    pub fn merge_from_user(&mut self, user: &User) {
        if let Some(theme) = user.theme {
            self.theme = theme;
        }
        if let Some(language) = user.language {
            self.language = language;
        }
        if let Some(currency) = user.currency {
            self.currency = currency;
        }
    }
}

/// Partial update body for `PUT /auth/me`; absent fields are left untouched
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

impl ProfileUpdate {
    pub fn from_preferences(preferences: Preferences) -> Self {
        Self {
            theme: Some(preferences.theme),
            language: Some(preferences.language),
            currency: Some(preferences.currency),
            ..Self::default()
        }
    }

    /// Write the present fields onto a locally held user
    pub fn apply_to(&self, user: &mut User) {
        fn set<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
            if value.is_some() {
                target.clone_from(value);
            }
        }
        set(&mut user.first_name, &self.first_name);
        set(&mut user.last_name, &self.last_name);
        set(&mut user.email, &self.email);
        set(&mut user.phone, &self.phone);
        set(&mut user.theme, &self.theme);
        set(&mut user.language, &self.language);
        set(&mut user.currency, &self.currency);
    }
}

/// Body of `POST /auth/change-password`
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

impl fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordRequest")
            .field("current_password", &"<redacted>")
            .field("new_password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_tolerates_nulls_and_missing_fields() {
        let user: User = serde_json::from_str(
            r#"{"first_name":"Ana","last_name":null,"email":"ana@example.com","plan":"pro"}"#,
        )
        .unwrap();

        assert_eq!(user.first_name.as_deref(), Some("Ana"));
        assert_eq!(user.last_name, None);
        assert_eq!(user.phone, None);
        assert_eq!(user.plan, Some(PlanTier::Pro));
        assert_eq!(user.optimizations_used_today, None);
    }

    #[test]
    fn test_acknowledgement_body_is_not_an_account() {
        let ack: User = serde_json::from_str(r#"{"message":"Profile updated"}"#).unwrap();
        assert_eq!(ack, User::default());
        assert!(!ack.is_identified());

        let blank_email = User {
            email: Some("  ".to_string()),
            ..User::default()
        };
        assert!(!blank_email.is_identified());

        let account = User {
            email: Some("ana@example.com".to_string()),
            ..User::default()
        };
        assert!(account.is_identified());
    }

    #[test]
    fn test_profile_update_applies_only_present_fields() {
        let mut user = User {
            first_name: Some("Ana".to_string()),
            last_name: Some("García".to_string()),
            email: Some("ana@example.com".to_string()),
            plan: Some(PlanTier::Pro),
            ..User::default()
        };
        let update = ProfileUpdate {
            first_name: Some("Anabel".to_string()),
            theme: Some(Theme::Dark),
            ..ProfileUpdate::default()
        };

        update.apply_to(&mut user);

        assert_eq!(user.first_name.as_deref(), Some("Anabel"));
        assert_eq!(user.last_name.as_deref(), Some("García"));
        assert_eq!(user.theme, Some(Theme::Dark));
        assert_eq!(user.plan, Some(PlanTier::Pro));
    }

    #[test]
    fn test_preference_wire_values() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("EUR".parse::<Currency>().unwrap(), Currency::Eur);

        let err = "blue".parse::<Theme>().unwrap_err();
        assert_eq!(err.to_string(), "unknown theme value: blue");
    }

    #[test]
    fn test_profile_update_omits_absent_fields() {
        let update = ProfileUpdate::from_preferences(Preferences {
            theme: Theme::Dark,
            language: Language::En,
            currency: Currency::Usd,
        });

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"theme": "dark", "language": "en", "currency": "USD"})
        );
    }

    #[test]
    fn test_merge_from_user_keeps_unset_preferences() {
        let mut preferences = Preferences {
            theme: Theme::Dark,
            language: Language::En,
            currency: Currency::Usd,
        };
        let user = User {
            language: Some(Language::Es),
            ..User::default()
        };

        preferences.merge_from_user(&user);

        assert_eq!(preferences.theme, Theme::Dark);
        assert_eq!(preferences.language, Language::Es);
        assert_eq!(preferences.currency, Currency::Usd);
    }

    #[test]
    fn test_change_password_request_debug_hides_secrets() {
        let request = ChangePasswordRequest {
            current_password: "hunter2".to_string(),
            new_password: "correct horse".to_string(),
        };

        let rendered = format!("{:?}", request);
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("correct horse"));
    }

    #[test]
    fn test_plan_limits() {
        assert_eq!(PlanTier::Free.daily_optimization_limit(), 1);
        assert_eq!(PlanTier::Pro.daily_optimization_limit(), 3);
        assert_eq!(PlanTier::Premium.daily_optimization_limit(), 10);
        assert_eq!("premium".parse::<PlanTier>().unwrap().label(), "Premium");
    }
}
