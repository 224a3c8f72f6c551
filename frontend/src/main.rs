use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod context;
mod hooks;
mod pages;
mod router;
mod services;
mod state;

use components::toast::ToastProvider;
use context::AppProvider;
use router::{switch, Route};
use services::{ApiClient, ClientConfig, Logger};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: ClientConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api = ApiClient::from_config(&props.config);

    html! {
        <BrowserRouter>
            <ToastProvider duration_ms={props.config.toast_duration_ms}>
                <AppProvider {api}>
                    <Switch<Route> render={switch} />
                </AppProvider>
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    let config = ClientConfig::default();
    Logger::init(config.log_level);
    log::info!("Starting folio frontend against {}", config.api_base_url);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
