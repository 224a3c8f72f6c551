use shared::{ErrorKey, Language, ProfileField, Translator, User};
use yew::prelude::*;

use super::toast::Toaster;
use crate::context::ContextProfileUpdater;
use crate::hooks::use_profile_form::{use_profile_form, UseProfileFormResult};

#[derive(Properties, PartialEq)]
pub struct ProfileFormProps {
    pub user: Option<User>,
    pub language: Language,
    pub updater: ContextProfileUpdater,
    pub notifier: Toaster,
}

#[function_component(ProfileForm)]
pub fn profile_form(props: &ProfileFormProps) -> Html {
    let t = Translator::new(props.language);
    let UseProfileFormResult {
        state: form,
        actions,
    } = use_profile_form(&props.user, &props.updater, &props.notifier, t);

    if props.user.is_none() {
        return html! {
            <div class="profile-loading">{t.t_or("profile.loading", "Cargando...")}</div>
        };
    }

    let render_field = |field: ProfileField, input_type: &'static str| {
        let enabled = form.is_field_enabled(field);
        let error = form.errors.field(field).map(str::to_string);
        html! {
            <div>
                <label class="profile-form-label">
                    {t.t(field.label_key())}
                    if field.is_required() {
                        {" "}<span class="profile-form-required">{"*"}</span>
                    }
                </label>
                <input
                    name={field.name()}
                    type={input_type}
                    class={classes!(
                        "profile-input",
                        if enabled { "profile-input-enabled" } else { "profile-input-disabled" },
                        error.is_some().then_some("profile-input-error"),
                    )}
                    value={form.draft.get(field).to_string()}
                    oninput={actions.on_input.clone()}
                    disabled={!enabled}
                />
                if let Some(message) = error {
                    <p class="profile-error-text">{message}</p>
                }
            </div>
        }
    };

    html! {
        <form class="profile-form" onsubmit={actions.submit.clone()}>
            <div class="profile-form-grid">
                {render_field(ProfileField::FirstName, "text")}
                {render_field(ProfileField::LastName, "text")}
                {render_field(ProfileField::Email, "email")}
                {render_field(ProfileField::Phone, "text")}
            </div>
            <div class="profile-button-container">
                if form.editing {
                    <button
                        type="button"
                        class="profile-button-secondary"
                        onclick={actions.cancel.clone()}
                    >
                        {t.t("profile.cancel")}
                    </button>
                    <button type="submit" class="profile-button-primary">
                        {t.t("profile.saveChanges")}
                    </button>
                } else {
                    <button
                        type="button"
                        class="profile-button-edit"
                        onclick={actions.begin_edit.clone()}
                    >
                        {t.t("profile.editProfile")}
                    </button>
                }
            </div>
            if let Some(message) = form.errors.get(ErrorKey::Api) {
                <p class="profile-error-text">{message.to_string()}</p>
            }
        </form>
    }
}
