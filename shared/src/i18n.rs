//! # Translations
//!
//! Static string tables for the two supported languages. Lookups fall back
//! to the caller-supplied literal and then to the key itself, so a missing
//! entry shows up on screen instead of failing.

use crate::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        match self.language {
            Language::Es => spanish(key),
            Language::En => english(key),
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }

    pub fn t_or(&self, key: &str, fallback: &str) -> String {
        self.lookup(key).unwrap_or(fallback).to_string()
    }
}

fn spanish(key: &str) -> Option<&'static str> {
    let text = match key {
        "app.spanish" => "Español",
        "app.english" => "Inglés",
        "profile.title" => "Perfil y Configuración",
        "profile.back" => "Volver",
        "profile.loading" => "Cargando...",
        "profile.tabs.profile" => "Perfil",
        "profile.tabs.security" => "Seguridad",
        "profile.tabs.preferences" => "Preferencias",
        "profile.tabs.preferencesContent" => "Personaliza tu experiencia en la aplicación",
        "profile.tabs.notifications" => "Notificaciones",
        "profile.tabs.notificationsContent" => "Próximamente podrás configurar tus notificaciones",
        "profile.tabs.billing" => "Facturación",
        "profile.personalInfoTitle" => "Información Personal",
        "profile.personalInfoDesc" => "Actualiza tus datos personales",
        "profile.firstName" => "Nombre",
        "profile.lastName" => "Apellidos",
        "profile.email" => "Correo electrónico",
        "profile.phone" => "Teléfono",
        "profile.required" => "Este campo es obligatorio",
        "profile.cancel" => "Cancelar",
        "profile.saveChanges" => "Guardar cambios",
        "profile.editProfile" => "Editar perfil",
        "profile.profileUpdated" => "Perfil actualizado correctamente",
        "profile.profileUpdateError" => "Error al actualizar el perfil",
        "profile.apiError" => "No se pudieron guardar los cambios. Inténtalo de nuevo.",
        "profile.changePasswordTitle" => "Cambiar Contraseña",
        "profile.changePasswordDesc" => "Actualiza tu contraseña para mantener tu cuenta segura",
        "profile.currentPassword" => "Contraseña Actual",
        "profile.currentPasswordPlaceholder" => "Ingresa tu contraseña actual",
        "profile.newPassword" => "Nueva Contraseña",
        "profile.newPasswordPlaceholder" => "Ingresa tu nueva contraseña",
        "profile.confirmNewPassword" => "Confirmar Nueva Contraseña",
        "profile.confirmNewPasswordPlaceholder" => "Confirma tu nueva contraseña",
        "profile.passwordRequired" => "Todos los campos son obligatorios",
        "profile.passwordsDontMatch" => "Las contraseñas no coinciden",
        "profile.passwordUpdated" => "Contraseña actualizada correctamente",
        "profile.passwordUpdateError" => "Error al actualizar la contraseña",
        "profile.updatePassword" => "Actualizar Contraseña",
        "profile.updatingPassword" => "Actualizando...",
        "profile.showPassword" => "Mostrar",
        "profile.hidePassword" => "Ocultar",
        "profile.theme" => "Tema",
        "profile.light" => "Claro",
        "profile.dark" => "Oscuro",
        "profile.language" => "Idioma",
        "profile.currency" => "Moneda",
        "profile.euro" => "Euro (€)",
        "profile.dollar" => "Dólar ($)",
        "profile.savePreferences" => "Guardar preferencias",
        "profile.preferencesUpdated" => "Preferencias actualizadas correctamente",
        "profile.preferencesUpdateError" => "Error al actualizar preferencias",
        "billing.description" => "Gestiona tu plan de suscripción y facturación",
        "billing.currentPlan" => "Plan Actual",
        "billing.plan" => "Plan:",
        "billing.billingPeriod" => "Facturación:",
        "billing.monthly" => "Mensual",
        "billing.annual" => "Anual",
        "billing.nextRenewal" => "Próxima renovación:",
        "billing.optimizationsToday" => "Optimizaciones hoy:",
        "billing.planFeatures" => "Características del Plan",
        "billing.changePlan" => "Cambiar Plan",
        "plan.features.free.portfolios" => "1 Portfolio",
        "plan.features.free.optimizations" => "1 optimización diaria",
        "plan.features.pro.portfolios" => "Hasta 3 portfolios",
        "plan.features.pro.optimizations" => "3 optimizaciones diarias",
        "plan.features.premium.portfolios" => "Portfolios ilimitados",
        "plan.features.premium.optimizations" => "10 optimizaciones diarias",
        "changePlan.title" => "Cambiar Plan",
        "changePlan.description" => "La selección de planes estará disponible pronto",
        "app.notFound" => "Página no encontrada",
        _ => return None,
    };
    Some(text)
}

fn english(key: &str) -> Option<&'static str> {
    let text = match key {
        "app.spanish" => "Spanish",
        "app.english" => "English",
        "profile.title" => "Profile & Settings",
        "profile.back" => "Back",
        "profile.loading" => "Loading...",
        "profile.tabs.profile" => "Profile",
        "profile.tabs.security" => "Security",
        "profile.tabs.preferences" => "Preferences",
        "profile.tabs.preferencesContent" => "Customize your experience in the app",
        "profile.tabs.notifications" => "Notifications",
        "profile.tabs.notificationsContent" => "Notification settings are coming soon",
        "profile.tabs.billing" => "Billing",
        "profile.personalInfoTitle" => "Personal Information",
        "profile.personalInfoDesc" => "Update your personal details",
        "profile.firstName" => "First name",
        "profile.lastName" => "Last name",
        "profile.email" => "Email",
        "profile.phone" => "Phone",
        "profile.required" => "This field is required",
        "profile.cancel" => "Cancel",
        "profile.saveChanges" => "Save changes",
        "profile.editProfile" => "Edit profile",
        "profile.profileUpdated" => "Profile updated successfully",
        "profile.profileUpdateError" => "Error updating profile",
        "profile.apiError" => "Your changes could not be saved. Please try again.",
        "profile.changePasswordTitle" => "Change Password",
        "profile.changePasswordDesc" => "Update your password to keep your account secure",
        "profile.currentPassword" => "Current Password",
        "profile.currentPasswordPlaceholder" => "Enter your current password",
        "profile.newPassword" => "New Password",
        "profile.newPasswordPlaceholder" => "Enter your new password",
        "profile.confirmNewPassword" => "Confirm New Password",
        "profile.confirmNewPasswordPlaceholder" => "Confirm your new password",
        "profile.passwordRequired" => "All fields are required",
        "profile.passwordsDontMatch" => "Passwords do not match",
        "profile.passwordUpdated" => "Password updated successfully",
        "profile.passwordUpdateError" => "Error updating password",
        "profile.updatePassword" => "Update Password",
        "profile.updatingPassword" => "Updating...",
        "profile.showPassword" => "Show",
        "profile.hidePassword" => "Hide",
        "profile.theme" => "Theme",
        "profile.light" => "Light",
        "profile.dark" => "Dark",
        "profile.language" => "Language",
        "profile.currency" => "Currency",
        "profile.euro" => "Euro (€)",
        "profile.dollar" => "Dollar ($)",
        "profile.savePreferences" => "Save preferences",
        "profile.preferencesUpdated" => "Preferences updated successfully",
        "profile.preferencesUpdateError" => "Error updating preferences",
        "billing.description" => "Manage your subscription plan and billing",
        "billing.currentPlan" => "Current Plan",
        "billing.plan" => "Plan:",
        "billing.billingPeriod" => "Billing:",
        "billing.monthly" => "Monthly",
        "billing.annual" => "Annual",
        "billing.nextRenewal" => "Next renewal:",
        "billing.optimizationsToday" => "Optimizations today:",
        "billing.planFeatures" => "Plan Features",
        "billing.changePlan" => "Change Plan",
        "plan.features.free.portfolios" => "1 Portfolio",
        "plan.features.free.optimizations" => "1 optimization per day",
        "plan.features.pro.portfolios" => "Up to 3 portfolios",
        "plan.features.pro.optimizations" => "3 optimizations per day",
        "plan.features.premium.portfolios" => "Unlimited portfolios",
        "plan.features.premium.optimizations" => "10 optimizations per day",
        "changePlan.title" => "Change Plan",
        "changePlan.description" => "Plan selection is coming soon",
        "app.notFound" => "Page not found",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_follows_language() {
        assert_eq!(Translator::new(Language::Es).t("profile.cancel"), "Cancelar");
        assert_eq!(Translator::new(Language::En).t("profile.cancel"), "Cancel");
    }

    #[test]
    fn test_missing_key_falls_back() {
        let t = Translator::new(Language::En);
        assert_eq!(t.t_or("profile.unknown", "Fallback"), "Fallback");
        assert_eq!(t.t("profile.unknown"), "profile.unknown");
        assert_eq!(t.t_or("profile.title", "Perfil y Configuración"), "Profile & Settings");
    }

    #[test]
    fn test_tables_cover_the_same_keys() {
        let keys = [
            "profile.required",
            "profile.passwordRequired",
            "profile.passwordsDontMatch",
            "profile.passwordUpdateError",
            "profile.preferencesUpdated",
            "billing.monthly",
            "billing.annual",
            "plan.features.pro.portfolios",
        ];
        for key in keys {
            assert!(spanish(key).is_some(), "missing es entry for {}", key);
            assert!(english(key).is_some(), "missing en entry for {}", key);
        }
    }
}
