use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{ChangePlanPage, NotFoundPage, ProfilePage};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/profile")]
    Profile,
    #[at("/change-plan")]
    ChangePlan,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Profile} /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::ChangePlan => html! { <ChangePlanPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
