/// Default base URL of the Strapi instance.
const DEFAULT_STRAPI_URL: &str = "http://localhost:1337";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub strapi_url: String,
    pub api_token: String,
    pub dev_mode: bool,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `STRAPI_URL` (optional, default `http://localhost:1337`) — base URL of the backend
    /// - `STRAPI_API_TOKEN` (required) — bearer token for every backend call
    /// - `STRAPI_DEV_MODE` (optional, default false) — use the
    ///   content-type-builder metadata endpoint instead of the content-manager one
    pub fn from_env() -> Result<Self, String> {
        let strapi_url =
            std::env::var("STRAPI_URL").unwrap_or_else(|_| DEFAULT_STRAPI_URL.to_string());

        let api_token = std::env::var("STRAPI_API_TOKEN")
            .map_err(|_| "STRAPI_API_TOKEN environment variable is not set".to_string())?;
        if api_token.trim().is_empty() {
            return Err("STRAPI_API_TOKEN must not be blank".to_string());
        }

        let dev_mode = match std::env::var("STRAPI_DEV_MODE") {
            Ok(val) => matches!(val.as_str(), "true" | "1" | "yes"),
            Err(_) => false,
        };

        Ok(Self {
            strapi_url,
            api_token,
            dev_mode,
        })
    }
}
