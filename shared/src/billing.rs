//! # Billing summary
//!
//! Read-only projection of the plan fields of a [`User`] into display
//! strings, plus the static feature table of each plan tier.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::i18n::Translator;
use crate::{Language, PlanTier, User};

/// One line of a plan's feature list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanFeature {
    pub key: &'static str,
    pub fallback: &'static str,
}

const FREE_FEATURES: &[PlanFeature] = &[
    PlanFeature {
        key: "plan.features.free.portfolios",
        fallback: "1 Portfolio",
    },
    PlanFeature {
        key: "plan.features.free.optimizations",
        fallback: "1 optimización diaria",
    },
];

const PRO_FEATURES: &[PlanFeature] = &[
    PlanFeature {
        key: "plan.features.pro.portfolios",
        fallback: "Hasta 3 portfolios",
    },
    PlanFeature {
        key: "plan.features.pro.optimizations",
        fallback: "3 optimizaciones diarias",
    },
];

const PREMIUM_FEATURES: &[PlanFeature] = &[
    PlanFeature {
        key: "plan.features.premium.portfolios",
        fallback: "Portfolios ilimitados",
    },
    PlanFeature {
        key: "plan.features.premium.optimizations",
        fallback: "10 optimizaciones diarias",
    },
];

impl PlanTier {
    pub fn features(self) -> &'static [PlanFeature] {
        match self {
            PlanTier::Free => FREE_FEATURES,
            PlanTier::Pro => PRO_FEATURES,
            PlanTier::Premium => PREMIUM_FEATURES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingPeriod {
    Monthly,
    Annual,
}

impl BillingPeriod {
    /// "monthly" is monthly; any other non-empty value is treated as annual.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            "monthly" => Some(BillingPeriod::Monthly),
            _ => Some(BillingPeriod::Annual),
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "billing.monthly",
            BillingPeriod::Annual => "billing.annual",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingSummary {
    pub plan_label: &'static str,
    pub billing_period: Option<String>,
    pub renewal_date: Option<String>,
    /// "<used> / <daily limit>"
    pub optimizations: Option<String>,
    pub features: Vec<String>,
}

impl BillingSummary {
    pub fn project(user: Option<&User>, plan: PlanTier, t: &Translator) -> Self {
        let billing_period = user
            .and_then(|u| u.billing_period.as_deref())
            .and_then(BillingPeriod::from_raw)
            .map(|period| t.t(period.label_key()));

        let renewal_date = user
            .and_then(|u| u.plan_end_date.as_deref())
            .filter(|raw| !raw.is_empty())
            .map(|raw| format_date(raw, t.language()));

        let optimizations = user
            .and_then(|u| u.optimizations_used_today)
            .map(|used| format!("{} / {}", used, plan.daily_optimization_limit()));

        let features = plan
            .features()
            .iter()
            .map(|feature| t.t_or(feature.key, feature.fallback))
            .collect();

        Self {
            plan_label: plan.label(),
            billing_period,
            renewal_date,
            optimizations,
            features,
        }
    }
}

/// Render a backend date as a short local date: `d/m/yyyy` in Spanish,
/// `m/d/yyyy` in English. Input that does not parse is returned unchanged.
pub fn format_date(raw: &str, language: Language) -> String {
    let Some(date) = parse_date(raw) else {
        return raw.to_string();
    };
    let pattern = match language {
        Language::Es => "%-d/%-m/%Y",
        Language::En => "%-m/%-d/%Y",
    };
    date.format(pattern).to_string()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pro_lists_only_pro_features() {
        let t = Translator::new(Language::Es);
        let summary = BillingSummary::project(None, PlanTier::Pro, &t);

        assert_eq!(
            summary.features,
            vec![
                "Hasta 3 portfolios".to_string(),
                "3 optimizaciones diarias".to_string(),
            ]
        );
        for other in [PlanTier::Free, PlanTier::Premium] {
            for feature in other.features() {
                assert!(!summary.features.contains(&t.t(feature.key)));
            }
        }
    }

    #[test]
    fn test_project_user_fields() {
        let t = Translator::new(Language::Es);
        let user = User {
            billing_period: Some("monthly".to_string()),
            plan_end_date: Some("2026-11-05T00:00:00Z".to_string()),
            optimizations_used_today: Some(2),
            ..User::default()
        };

        let summary = BillingSummary::project(Some(&user), PlanTier::Pro, &t);
        assert_eq!(summary.plan_label, "Pro");
        assert_eq!(summary.billing_period.as_deref(), Some("Mensual"));
        assert_eq!(summary.renewal_date.as_deref(), Some("5/11/2026"));
        assert_eq!(summary.optimizations.as_deref(), Some("2 / 3"));
    }

    #[test]
    fn test_absent_fields_are_hidden() {
        let t = Translator::new(Language::En);
        let user = User {
            billing_period: Some(String::new()),
            ..User::default()
        };

        let summary = BillingSummary::project(Some(&user), PlanTier::Free, &t);
        assert_eq!(summary.billing_period, None);
        assert_eq!(summary.renewal_date, None);
        assert_eq!(summary.optimizations, None);
    }

    #[test]
    fn test_non_monthly_period_is_annual() {
        assert_eq!(BillingPeriod::from_raw("yearly"), Some(BillingPeriod::Annual));
        assert_eq!(BillingPeriod::from_raw("annual"), Some(BillingPeriod::Annual));
        assert_eq!(BillingPeriod::from_raw("monthly"), Some(BillingPeriod::Monthly));
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date("2026-01-31", Language::En), "1/31/2026");
        assert_eq!(format_date("2026-01-31T10:15:00.123456", Language::Es), "31/1/2026");
        assert_eq!(format_date("2026-01-31T10:15:00+02:00", Language::Es), "31/1/2026");
        assert_eq!(format_date("next month", Language::Es), "next month");
    }
}
