use shared::{ProfileField, Translator, User};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::toast::Toaster;
use crate::context::ContextProfileUpdater;
use crate::state::profile_form::{submit_profile, ProfileFormAction, ProfileFormState};

pub struct UseProfileFormResult {
    pub state: UseReducerHandle<ProfileFormState>,
    pub actions: UseProfileFormActions,
}

#[derive(Clone)]
pub struct UseProfileFormActions {
    pub on_input: Callback<InputEvent>,
    pub begin_edit: Callback<MouseEvent>,
    pub cancel: Callback<MouseEvent>,
    pub submit: Callback<SubmitEvent>,
}

/// Profile form bound to the context user. The draft is re-seeded whenever
/// that user changes.
#[hook]
pub fn use_profile_form(
    user: &Option<User>,
    updater: &ContextProfileUpdater,
    notifier: &Toaster,
    t: Translator,
) -> UseProfileFormResult {
    let form = use_reducer({
        let user = user.clone();
        move || ProfileFormState::new(user)
    });

    use_effect_with(user.clone(), {
        let dispatcher = form.dispatcher();
        move |user: &Option<User>| {
            dispatcher.dispatch(ProfileFormAction::SourceChanged(user.clone()));
            || ()
        }
    });

    let on_input = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(field) = ProfileField::from_name(&input.name()) {
                dispatcher.dispatch(ProfileFormAction::Edit(field, input.value()));
            }
        })
    };

    let begin_edit = {
        let dispatcher = form.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ProfileFormAction::BeginEdit))
    };

    let cancel = {
        let dispatcher = form.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ProfileFormAction::Cancel))
    };

    let submit = {
        let form = form.clone();
        let updater = updater.clone();
        let notifier = notifier.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let snapshot = (*form).clone();
            let dispatcher = form.dispatcher();
            let updater = updater.clone();
            let notifier = notifier.clone();
            spawn_local(async move {
                let dispatch = move |action| dispatcher.dispatch(action);
                submit_profile(&snapshot, &updater, &notifier, &t, &dispatch).await;
            });
        })
    };

    UseProfileFormResult {
        state: form,
        actions: UseProfileFormActions {
            on_input,
            begin_edit,
            cancel,
            submit,
        },
    }
}
