use shared::{Language, Translator};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotificationsPanelProps {
    pub language: Language,
}

/// Notification settings are not configurable yet; the tab only explains that.
#[function_component(NotificationsPanel)]
pub fn notifications_panel(props: &NotificationsPanelProps) -> Html {
    let t = Translator::new(props.language);
    html! {
        <>
            <h2 class="profile-section-title">
                {t.t_or("profile.tabs.notifications", "Notificaciones")}
            </h2>
            <p class="profile-section-desc">{t.t("profile.tabs.notificationsContent")}</p>
        </>
    }
}
