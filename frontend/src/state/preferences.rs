use log::{debug, info, warn};
use shared::{Currency, Language, Preferences, ProfileUpdate, Theme, Translator};

use super::{Notifier, ProfileUpdater};

/// A single selector change; applied to the context as soon as it happens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceChange {
    Theme(Theme),
    Language(Language),
    Currency(Currency),
}

impl PreferenceChange {
    pub fn apply_to(self, preferences: &mut Preferences) {
        debug!(target: "preferences", "Preference changed: {:?}", self);
        match self {
            PreferenceChange::Theme(theme) => preferences.theme = theme,
            PreferenceChange::Language(language) => preferences.language = language,
            PreferenceChange::Currency(currency) => preferences.currency = currency,
        }
    }
}

/// Persist the current selections. Nothing is rolled back on failure.
pub async fn save_preferences(
    preferences: Preferences,
    updater: &dyn ProfileUpdater,
    notifier: &dyn Notifier,
    t: &Translator,
) -> bool {
    info!(target: "preferences", "Saving preferences {:?}", preferences);
    match updater
        .update_profile(ProfileUpdate::from_preferences(preferences))
        .await
    {
        Ok(()) => {
            notifier.success(&t.t_or(
                "profile.preferencesUpdated",
                "Preferencias actualizadas correctamente",
            ));
            true
        }
        Err(e) => {
            warn!(target: "preferences", "Saving preferences failed: {}", e);
            notifier.error(&t.t_or(
                "profile.preferencesUpdateError",
                "Error al actualizar preferencias",
            ));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_change_touches_one_value() {
        let mut preferences = Preferences::default();

        PreferenceChange::Currency(Currency::Usd).apply_to(&mut preferences);
        assert_eq!(preferences.currency, Currency::Usd);
        assert_eq!(preferences.theme, Theme::Light);
        assert_eq!(preferences.language, Language::Es);

        PreferenceChange::Theme(Theme::Dark).apply_to(&mut preferences);
        PreferenceChange::Language(Language::En).apply_to(&mut preferences);
        assert_eq!(
            preferences,
            Preferences {
                theme: Theme::Dark,
                language: Language::En,
                currency: Currency::Usd,
            }
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod save_tests {
    use super::*;
    use crate::state::test_utils::{MockProfileUpdater, RecordingNotifier};

    #[tokio::test]
    async fn test_save_sends_the_three_values() {
        let updater = MockProfileUpdater::succeeding();
        let notifier = RecordingNotifier::default();
        let preferences = Preferences {
            theme: Theme::Dark,
            language: Language::En,
            currency: Currency::Eur,
        };

        let t = Translator::new(Language::En);
        let saved = save_preferences(preferences, &updater, &notifier, &t).await;

        assert!(saved);
        assert_eq!(
            *updater.calls.borrow(),
            vec![ProfileUpdate::from_preferences(preferences)]
        );
        assert_eq!(*notifier.successes.borrow(), vec!["Preferences updated successfully"]);
    }

    #[tokio::test]
    async fn test_failed_save_only_notifies() {
        let updater = MockProfileUpdater::failing();
        let notifier = RecordingNotifier::default();

        let saved = save_preferences(
            Preferences::default(),
            &updater,
            &notifier,
            &Translator::new(Language::Es),
        )
        .await;

        assert!(!saved);
        assert_eq!(*notifier.errors.borrow(), vec!["Error al actualizar preferencias"]);
    }
}
