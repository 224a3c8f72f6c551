pub mod back_button;
pub mod billing_panel;
pub mod notifications_panel;
pub mod password_form;
pub mod preferences_panel;
pub mod profile_form;
pub mod select;
pub mod tabs;
pub mod toast;
