use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::back_button::BackButton;
use crate::components::billing_panel::BillingPanel;
use crate::components::notifications_panel::NotificationsPanel;
use crate::components::password_form::PasswordForm;
use crate::components::preferences_panel::PreferencesPanel;
use crate::components::profile_form::ProfileForm;
use crate::components::tabs::{TabItem, TabList};
use crate::components::toast::Toaster;
use crate::context::AppContext;
use crate::router::Route;
use crate::state::preferences::PreferenceChange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Profile,
    Security,
    Preferences,
    Notifications,
    Billing,
}

impl ProfileTab {
    const ALL: [ProfileTab; 5] = [
        ProfileTab::Profile,
        ProfileTab::Security,
        ProfileTab::Preferences,
        ProfileTab::Notifications,
        ProfileTab::Billing,
    ];

    fn id(self) -> &'static str {
        match self {
            ProfileTab::Profile => "profile",
            ProfileTab::Security => "security",
            ProfileTab::Preferences => "preferences",
            ProfileTab::Notifications => "notifications",
            ProfileTab::Billing => "billing",
        }
    }

    fn from_id(id: &str) -> Option<Self> {
        ProfileTab::ALL.into_iter().find(|tab| tab.id() == id)
    }

    fn label_key(self) -> &'static str {
        match self {
            ProfileTab::Profile => "profile.tabs.profile",
            ProfileTab::Security => "profile.tabs.security",
            ProfileTab::Preferences => "profile.tabs.preferences",
            ProfileTab::Notifications => "profile.tabs.notifications",
            ProfileTab::Billing => "profile.tabs.billing",
        }
    }
}

/// Account settings page. Renders nothing until the session is restored
/// and a token is present.
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let app = use_context::<AppContext>();
    let toaster = use_context::<Toaster>();
    let navigator = use_navigator();
    let active_tab = use_state(|| ProfileTab::Profile);

    let (Some(app), Some(toaster)) = (app, toaster) else {
        return html! {};
    };
    if !app.state.is_ready() {
        return html! {};
    }

    let t = app.state.translator();
    let language = app.state.preferences.language;
    let token: AttrValue = app.state.token.clone().unwrap_or_default().into();

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.back();
            }
        })
    };

    let on_change_plan = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::ChangePlan);
            }
        })
    };

    let on_select_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |id: AttrValue| {
            if let Some(tab) = ProfileTab::from_id(&id) {
                active_tab.set(tab);
            }
        })
    };

    let on_preference_change = {
        let app = app.clone();
        Callback::from(move |change: PreferenceChange| app.set_preference(change))
    };

    let tabs: Vec<TabItem> = ProfileTab::ALL
        .into_iter()
        .map(|tab| TabItem {
            id: tab.id().into(),
            label: t.t(tab.label_key()).into(),
        })
        .collect();

    let content = match *active_tab {
        ProfileTab::Profile => html! {
            <>
                <h2 class="profile-section-title">{t.t("profile.personalInfoTitle")}</h2>
                <p class="profile-section-desc">{t.t("profile.personalInfoDesc")}</p>
                <ProfileForm
                    user={app.state.user.clone()}
                    {language}
                    updater={app.profile_updater()}
                    notifier={toaster.clone()}
                />
            </>
        },
        ProfileTab::Security => html! {
            <PasswordForm
                {language}
                {token}
                notifier={toaster.clone()}
                api={app.api.clone()}
            />
        },
        ProfileTab::Preferences => html! {
            <PreferencesPanel
                preferences={app.state.preferences}
                on_change={on_preference_change}
                updater={app.profile_updater()}
                notifier={toaster.clone()}
            />
        },
        ProfileTab::Notifications => html! { <NotificationsPanel {language} /> },
        ProfileTab::Billing => html! {
            <BillingPanel
                user={app.state.user.clone()}
                plan={app.state.plan()}
                {language}
                {on_change_plan}
            />
        },
    };

    html! {
        <div class="profile-container">
            <div class="profile-header">
                <BackButton on_click={on_back} aria_label={t.t("profile.back")} />
                <h1 class="profile-title">{t.t_or("profile.title", "Perfil y Configuración")}</h1>
            </div>
            <div class="space-y-6">
                <TabList
                    {tabs}
                    active={active_tab.id()}
                    on_select={on_select_tab}
                />
                <div class="profile-tab-content" role="tabpanel">
                    <div class="profile-card">
                        {content}
                    </div>
                </div>
            </div>
        </div>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::components::toast::ToastProvider;
    use crate::context::AppProvider;
    use crate::services::ApiClient;
    use gloo::storage::{LocalStorage, Storage};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(SignedOutHarness)]
    fn signed_out_harness() -> Html {
        html! {
            <ToastProvider duration_ms={1000}>
                <AppProvider api={ApiClient::with_base_url("http://127.0.0.1:9".to_string())}>
                    <ProfilePage />
                </AppProvider>
            </ToastProvider>
        }
    }

    #[wasm_bindgen_test]
    async fn test_renders_nothing_without_a_session() {
        LocalStorage::delete(crate::services::session::TOKEN_KEY);
        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        yew::Renderer::<SignedOutHarness>::with_root(root.clone()).render();
        gloo::timers::future::TimeoutFuture::new(50).await;

        assert!(root.query_selector(".profile-container").unwrap().is_none());
        assert!(root.query_selector("form").unwrap().is_none());
    }
}
