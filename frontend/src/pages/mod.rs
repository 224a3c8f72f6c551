pub mod change_plan;
pub mod not_found;
pub mod profile_page;

pub use change_plan::ChangePlanPage;
pub use not_found::NotFoundPage;
pub use profile_page::ProfilePage;
