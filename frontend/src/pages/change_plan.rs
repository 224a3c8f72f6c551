use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::back_button::BackButton;
use crate::context::AppContext;

/// Placeholder until plan selection exists.
#[function_component(ChangePlanPage)]
pub fn change_plan_page() -> Html {
    let app = use_context::<AppContext>();
    let navigator = use_navigator();

    let Some(app) = app else {
        return html! {};
    };
    if !app.state.is_ready() {
        return html! {};
    }
    let t = app.state.translator();

    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.back();
        }
    });

    html! {
        <div class="profile-container">
            <div class="profile-header">
                <BackButton on_click={on_back} aria_label={t.t("profile.back")} />
                <h1 class="profile-title">{t.t("changePlan.title")}</h1>
            </div>
            <div class="profile-card">
                <p class="profile-section-desc">{t.t("changePlan.description")}</p>
            </div>
        </div>
    }
}
