//! Build-time endpoint configuration for the browser bundle.
//!
//! Values come from `SWOB_API_BASE_URL` / `SWOB_LOGIN_PATH` at compile time.
//! Both are public; never put secrets here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_LOGIN_PATH: &str = "/v1/login";

/// Endpoint configuration baked into the WASM bundle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin of the developer API. Empty means same-origin.
    pub api_base_url: String,
    pub login_path: String,
}

impl AppConfig {
    /// Load config from build-time environment variables.
    pub fn load() -> Self {
        Self::from_values(option_env!("SWOB_API_BASE_URL"), option_env!("SWOB_LOGIN_PATH"))
    }

    fn from_values(api_base_url: Option<&str>, login_path: Option<&str>) -> Self {
        let api_base_url = api_base_url.unwrap_or("").trim().trim_end_matches('/').to_owned();
        let login_path = match login_path.map(str::trim) {
            Some(path) if !path.is_empty() => {
                if path.starts_with('/') {
                    path.to_owned()
                } else {
                    format!("/{path}")
                }
            }
            _ => DEFAULT_LOGIN_PATH.to_owned(),
        };
        Self { api_base_url, login_path }
    }

    /// Absolute (or same-origin) URL of the authentication endpoint.
    pub fn login_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.login_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
