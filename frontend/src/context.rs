//! # Application Context
//!
//! Session-wide state shared by every page: the signed-in user, the bearer
//! token and the display preferences. Pages read it through
//! `use_context::<AppContext>()`; mutations go through [`AppAction`].

use std::rc::Rc;

use async_trait::async_trait;
use log::{info, warn};
use shared::{ApiError, PlanTier, Preferences, ProfileUpdate, Translator, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{session, ApiClient};
use crate::state::preferences::PreferenceChange;
use crate::state::ProfileUpdater;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub user: Option<User>,
    pub preferences: Preferences,
    pub token: Option<String>,
    /// Set once the stored session has been inspected
    pub initialized: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Startup finished: token read from storage, user fetched (if any)
    SessionRestored {
        token: Option<String>,
        user: Option<User>,
    },
    /// A profile update succeeded. `returned` is whatever the backend sent
    /// back; when it is not an account the sent fields are applied locally.
    ProfileSaved {
        sent: ProfileUpdate,
        returned: User,
    },
    SetPreference(PreferenceChange),
}

impl AppState {
    pub fn plan(&self) -> PlanTier {
        self.user
            .as_ref()
            .and_then(|user| user.plan)
            .unwrap_or_default()
    }

    /// Pages render only for an initialized, authenticated session.
    pub fn is_ready(&self) -> bool {
        self.initialized && self.token.as_deref().is_some_and(|token| !token.is_empty())
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.preferences.language)
    }

    pub fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::SessionRestored { token, user } => {
                // Stored preferences are the source of truth at load time.
                if let Some(user) = &user {
                    self.preferences.merge_from_user(user);
                }
                self.token = token;
                self.user = user;
                self.initialized = true;
            }
            AppAction::ProfileSaved { sent, returned } => {
                if returned.is_identified() {
                    self.user = Some(returned);
                } else if let Some(user) = self.user.as_mut() {
                    sent.apply_to(user);
                }
            }
            AppAction::SetPreference(change) => change.apply_to(&mut self.preferences),
        }
    }
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub state: UseReducerHandle<AppState>,
    pub api: ApiClient,
}

impl AppContext {
    pub fn set_preference(&self, change: PreferenceChange) {
        self.state.dispatch(AppAction::SetPreference(change));
    }

    /// Profile updater bound to the current token
    pub fn profile_updater(&self) -> ContextProfileUpdater {
        ContextProfileUpdater {
            api: self.api.clone(),
            token: self.state.token.clone().unwrap_or_default(),
            dispatcher: self.state.dispatcher(),
        }
    }
}

/// Sends partial updates to the backend and records the result in the
/// context, which re-seeds any form showing the user.
#[derive(Clone, PartialEq)]
pub struct ContextProfileUpdater {
    api: ApiClient,
    token: String,
    dispatcher: UseReducerDispatcher<AppState>,
}

#[async_trait(?Send)]
impl ProfileUpdater for ContextProfileUpdater {
    async fn update_profile(&self, update: ProfileUpdate) -> Result<(), ApiError> {
        let returned = self.api.update_profile(&self.token, &update).await?;
        if !returned.is_identified() {
            warn!(target: "profile", "Update response carried no account; applying sent fields");
        }
        self.dispatcher.dispatch(AppAction::ProfileSaved {
            sent: update,
            returned,
        });
        Ok(())
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProviderProps {
    pub api: ApiClient,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(AppProvider)]
pub fn app_provider(props: &AppProviderProps) -> Html {
    let state = use_reducer(AppState::default);

    // Restore the session once on startup
    use_effect_with((), {
        let dispatcher = state.dispatcher();
        let api = props.api.clone();
        move |_| {
            match session::load_token() {
                None => {
                    info!(target: "session", "No stored session");
                    dispatcher.dispatch(AppAction::SessionRestored {
                        token: None,
                        user: None,
                    });
                }
                Some(token) => {
                    spawn_local(async move {
                        let user = match api.current_user(&token).await {
                            Ok(user) => Some(user),
                            Err(e) => {
                                warn!(target: "session", "Failed to load current user: {}", e);
                                None
                            }
                        };
                        dispatcher.dispatch(AppAction::SessionRestored {
                            token: Some(token),
                            user,
                        });
                    });
                }
            }
            || ()
        }
    });

    let context = AppContext {
        state,
        api: props.api.clone(),
    };

    html! {
        <ContextProvider<AppContext> context={context}>
            { props.children.clone() }
        </ContextProvider<AppContext>>
    }
}
