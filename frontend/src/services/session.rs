use gloo::storage::{LocalStorage, Storage};

/// Local storage key holding the bearer token written at sign-in
pub const TOKEN_KEY: &str = "folio.token";

/// Read the stored bearer token. The token is stored as a raw string, not JSON.
pub fn load_token() -> Option<String> {
    LocalStorage::raw()
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
