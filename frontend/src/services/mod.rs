pub mod api;
pub mod config;
pub mod logging;
pub mod session;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use logging::Logger;
