use std::str::FromStr;

use shared::{Currency, Language, Preferences, Theme, Translator};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::select::{Select, SelectOption};
use super::toast::Toaster;
use crate::context::ContextProfileUpdater;
use crate::state::preferences::{save_preferences, PreferenceChange};

#[derive(Properties, PartialEq)]
pub struct PreferencesPanelProps {
    pub preferences: Preferences,
    pub on_change: Callback<PreferenceChange>,
    pub updater: ContextProfileUpdater,
    pub notifier: Toaster,
}

fn options<T: Copy>(
    values: &[T],
    as_str: fn(T) -> &'static str,
    label_key: fn(T) -> &'static str,
    t: &Translator,
) -> Vec<SelectOption> {
    values
        .iter()
        .map(|value| SelectOption {
            value: as_str(*value).into(),
            label: t.t(label_key(*value)).into(),
        })
        .collect()
}

/// Maps a raw select value to a change; unknown values are dropped.
fn on_select<T: FromStr + 'static>(
    on_change: &Callback<PreferenceChange>,
    wrap: fn(T) -> PreferenceChange,
) -> Callback<String> {
    let on_change = on_change.clone();
    Callback::from(move |raw: String| {
        if let Ok(value) = raw.parse::<T>() {
            on_change.emit(wrap(value));
        }
    })
}

#[function_component(PreferencesPanel)]
pub fn preferences_panel(props: &PreferencesPanelProps) -> Html {
    let preferences = props.preferences;
    let t = Translator::new(preferences.language);

    let on_save = {
        let updater = props.updater.clone();
        let notifier = props.notifier.clone();
        Callback::from(move |_: MouseEvent| {
            let updater = updater.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                save_preferences(preferences, &updater, &notifier, &t).await;
            });
        })
    };

    let on_submit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <>
            <h2 class="profile-section-title">{t.t("profile.tabs.preferences")}</h2>
            <p class="profile-section-desc">{t.t("profile.tabs.preferencesContent")}</p>
            <form class="profile-form" onsubmit={on_submit}>
                <div class="w-full">
                    <Select
                        label={t.t("profile.theme")}
                        value={preferences.theme.as_str()}
                        options={options(&Theme::ALL, Theme::as_str, Theme::label_key, &t)}
                        on_change={on_select(&props.on_change, PreferenceChange::Theme)}
                    />
                </div>
                <div class="w-full">
                    <Select
                        label={t.t("profile.language")}
                        value={preferences.language.as_str()}
                        options={options(&Language::ALL, Language::as_str, Language::label_key, &t)}
                        on_change={on_select(&props.on_change, PreferenceChange::Language)}
                    />
                </div>
                <div class="w-full">
                    <Select
                        label={t.t("profile.currency")}
                        value={preferences.currency.as_str()}
                        options={options(&Currency::ALL, Currency::as_str, Currency::label_key, &t)}
                        on_change={on_select(&props.on_change, PreferenceChange::Currency)}
                    />
                </div>
                <div class="profile-button-container">
                    <button type="button" class="profile-button-primary" onclick={on_save}>
                        {t.t("profile.savePreferences")}
                    </button>
                </div>
            </form>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_are_localized() {
        let t = Translator::new(Language::En);
        let currencies = options(&Currency::ALL, Currency::as_str, Currency::label_key, &t);

        assert_eq!(currencies.len(), 2);
        assert_eq!(currencies[0].value.as_str(), "EUR");
        assert_eq!(currencies[1].label.as_str(), "Dollar ($)");
    }
}
