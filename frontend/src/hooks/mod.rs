pub mod use_password_form;
pub mod use_profile_form;
