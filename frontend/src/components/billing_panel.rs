use shared::{BillingSummary, Language, PlanTier, Translator, User};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BillingPanelProps {
    pub user: Option<User>,
    pub plan: PlanTier,
    pub language: Language,
    pub on_change_plan: Callback<MouseEvent>,
}

#[function_component(BillingPanel)]
pub fn billing_panel(props: &BillingPanelProps) -> Html {
    let t = Translator::new(props.language);
    let summary = BillingSummary::project(props.user.as_ref(), props.plan, &t);

    let row = |label: String, value: String| {
        html! {
            <div class="profile-plan-row">
                <span class="profile-plan-label">{label}</span>
                <span class="profile-plan-value">{value}</span>
            </div>
        }
    };

    html! {
        <>
            <h2 class="profile-section-title">{t.t_or("profile.tabs.billing", "Facturación")}</h2>
            <p class="profile-section-desc">{t.t("billing.description")}</p>

            <div class="profile-plan-info">
                <h3 class="profile-plan-title">{t.t("billing.currentPlan")}</h3>
                <div class="profile-plan-grid">
                    {row(t.t("billing.plan"), summary.plan_label.to_string())}
                    if let Some(period) = summary.billing_period.clone() {
                        {row(t.t("billing.billingPeriod"), period)}
                    }
                    if let Some(date) = summary.renewal_date.clone() {
                        {row(t.t("billing.nextRenewal"), date)}
                    }
                    if let Some(usage) = summary.optimizations.clone() {
                        {row(t.t("billing.optimizationsToday"), usage)}
                    }
                </div>
            </div>

            <div class="profile-features-container">
                <h3 class="profile-plan-title">{t.t("billing.planFeatures")}</h3>
                <div class="profile-features-grid">
                    {for summary.features.iter().map(|feature| html! {
                        <div class="profile-feature-item">
                            <span class="profile-feature-icon">{"✓"}</span>
                            <span class="profile-feature-text">{feature.clone()}</span>
                        </div>
                    })}
                </div>
            </div>

            <div class="flex justify-end">
                <button class="profile-change-plan-button" onclick={props.on_change_plan.clone()}>
                    {t.t("billing.changePlan")}
                </button>
            </div>
        </>
    }
}
