use shared::Translator;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::toast::Toaster;
use crate::services::ApiClient;
use crate::state::password_form::{
    submit_password, PasswordField, PasswordFormAction, PasswordFormState,
};

pub struct UsePasswordFormResult {
    pub state: UseReducerHandle<PasswordFormState>,
    pub actions: UsePasswordFormActions,
}

#[derive(Clone)]
pub struct UsePasswordFormActions {
    pub on_input: Callback<InputEvent>,
    pub toggle_visibility: Callback<PasswordField>,
    pub submit: Callback<SubmitEvent>,
}

#[hook]
pub fn use_password_form(
    token: &AttrValue,
    api: &ApiClient,
    notifier: &Toaster,
    t: Translator,
) -> UsePasswordFormResult {
    let form = use_reducer(PasswordFormState::default);

    let on_input = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(field) = PasswordField::from_name(&input.name()) {
                dispatcher.dispatch(PasswordFormAction::Edit(field, input.value()));
            }
        })
    };

    let toggle_visibility = {
        let dispatcher = form.dispatcher();
        Callback::from(move |field: PasswordField| {
            dispatcher.dispatch(PasswordFormAction::ToggleVisibility(field))
        })
    };

    let submit = {
        let form = form.clone();
        let token = token.clone();
        let api = api.clone();
        let notifier = notifier.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let snapshot = (*form).clone();
            let dispatcher = form.dispatcher();
            let token = token.clone();
            let api = api.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                let dispatch = move |action| dispatcher.dispatch(action);
                submit_password(&snapshot, token.as_str(), &api, &notifier, &t, &dispatch).await;
            });
        })
    };

    UsePasswordFormResult {
        state: form,
        actions: UsePasswordFormActions {
            on_input,
            toggle_visibility,
            submit,
        },
    }
}
