/// Server configuration loaded from environment variables.
///
/// Constructed once at startup and shared through [`crate::state::AppState`]
/// so handlers never read the environment ad hoc.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Shared secret for the `X-Admin-Auth` header. Required.
    pub admin_password: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `HOST`                 | `0.0.0.0`   |
    /// | `PORT`                 | `3000`      |
    /// | `ADMIN_PASSWORD`       | *required*  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let admin_password =
            std::env::var("ADMIN_PASSWORD").expect("ADMIN_PASSWORD must be set");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            admin_password,
            request_timeout_secs,
        }
    }
}
