use shared::{Language, Translator};
use yew::prelude::*;

use super::toast::Toaster;
use crate::hooks::use_password_form::{use_password_form, UsePasswordFormResult};
use crate::services::ApiClient;
use crate::state::password_form::PasswordField;

#[derive(Properties, PartialEq)]
pub struct PasswordFormProps {
    pub language: Language,
    pub token: AttrValue,
    pub notifier: Toaster,
    pub api: ApiClient,
}

#[function_component(PasswordForm)]
pub fn password_form(props: &PasswordFormProps) -> Html {
    let t = Translator::new(props.language);
    let UsePasswordFormResult {
        state: form,
        actions,
    } = use_password_form(&props.token, &props.api, &props.notifier, t);

    let render_field = |field: PasswordField| {
        let visible = form.visibility.is_visible(field);
        let on_toggle = actions.toggle_visibility.reform(move |_: MouseEvent| field);
        let toggle_label = if visible {
            t.t("profile.hidePassword")
        } else {
            t.t("profile.showPassword")
        };
        let container_class = if field == PasswordField::Confirm {
            "profile-password-field-last"
        } else {
            "profile-password-field"
        };
        html! {
            <div class={container_class}>
                <label class="profile-password-label">{t.t(field.label_key())}</label>
                <div class="profile-password-input-container">
                    <input
                        type={if visible { "text" } else { "password" }}
                        name={field.name()}
                        value={form.draft.get(field).to_string()}
                        oninput={actions.on_input.clone()}
                        class="profile-password-input"
                        placeholder={t.t(field.placeholder_key())}
                        autocomplete={field.autocomplete()}
                    />
                    <button
                        type="button"
                        class="profile-password-toggle"
                        tabindex="-1"
                        aria-label={toggle_label}
                        onclick={on_toggle}
                    >
                        {if visible { "🙈" } else { "👁️" }}
                    </button>
                </div>
            </div>
        }
    };

    html! {
        <form class="profile-password-form" onsubmit={actions.submit.clone()}>
            <h2 class="profile-password-title">
                {t.t_or("profile.changePasswordTitle", "Cambiar Contraseña")}
            </h2>
            <p class="profile-password-desc">
                {t.t_or(
                    "profile.changePasswordDesc",
                    "Actualiza tu contraseña para mantener tu cuenta segura",
                )}
            </p>
            {for PasswordField::ALL.into_iter().map(render_field)}
            if let Some(error) = form.error.clone() {
                <div class="profile-password-error">{error}</div>
            }
            <div class="profile-password-button-container">
                <button type="submit" class="profile-password-submit" disabled={form.loading}>
                    {if form.loading {
                        t.t_or("profile.updatingPassword", "Actualizando...")
                    } else {
                        t.t_or("profile.updatePassword", "Actualizar Contraseña")
                    }}
                </button>
            </div>
        </form>
    }
}
