use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::AppContext;
use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let t = use_context::<AppContext>()
        .map(|app| app.state.translator())
        .unwrap_or_default();

    html! {
        <div class="profile-container">
            <h1 class="profile-title">{t.t("app.notFound")}</h1>
            <Link<Route> to={Route::Profile}>{t.t("profile.title")}</Link<Route>>
        </div>
    }
}
