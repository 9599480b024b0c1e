//! Server configuration loaded from environment variables.

use vca_core::documents::DEFAULT_DUPLICATE_WINDOW_HOURS;
use vca_jobs::broker::DEFAULT_QUEUE_KEY;

/// Credentials injected into upstream requests.
///
/// The portal holds these server-side; clients never see them.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// `Authorization: Bearer <token>`.
    Bearer(String),
    /// HTTP basic auth.
    Basic { username: String, password: String },
    /// No credential injection (local development against stubs).
    None,
}

/// One external REST system the portal proxies to.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub credentials: Credentials,
}

/// Server configuration.
///
/// All fields have defaults suitable for local development; production
/// overrides via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Redis list jobs are appended to.
    pub job_queue_key: String,
    /// Hours within which an identical document counts as a duplicate.
    pub duplicate_window_hours: i64,
    /// Financing system passthrough.
    pub financing: UpstreamConfig,
    /// Inspection scheduling passthrough.
    pub inspections: UpstreamConfig,
    /// Customer/contract lookup passthrough.
    pub customers: UpstreamConfig,
    /// Headless-browser renderer service.
    pub renderer_url: String,
    /// Optional bearer token for the renderer.
    pub renderer_token: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                  |
    /// |---------------------------|--------------------------|
    /// | `HOST`                    | `0.0.0.0`                |
    /// | `PORT`                    | `3000`                   |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`  |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                     |
    /// | `JOB_QUEUE_KEY`           | `vca:jobs:simulation`    |
    /// | `DUPLICATE_WINDOW_HOURS`  | `24`                     |
    /// | `FINANCING_API_URL`       | `http://localhost:8081`  |
    /// | `FINANCING_API_TOKEN`     | (none)                   |
    /// | `INSPECTION_API_URL`      | `http://localhost:8082`  |
    /// | `INSPECTION_API_USER`     | (none)                   |
    /// | `INSPECTION_API_PASSWORD` | (none)                   |
    /// | `CUSTOMER_API_URL`        | `http://localhost:8083`  |
    /// | `CUSTOMER_API_TOKEN`      | (none)                   |
    /// | `RENDERER_URL`            | `http://localhost:9222`  |
    /// | `RENDERER_TOKEN`          | (none)                   |
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let job_queue_key = env_or("JOB_QUEUE_KEY", DEFAULT_QUEUE_KEY);

        let duplicate_window_hours: i64 =
            env_or("DUPLICATE_WINDOW_HOURS", &DEFAULT_DUPLICATE_WINDOW_HOURS.to_string())
                .parse()
                .expect("DUPLICATE_WINDOW_HOURS must be a valid i64");
        vca_core::documents::validate_window_hours(duplicate_window_hours)
            .expect("DUPLICATE_WINDOW_HOURS out of range");

        let financing = UpstreamConfig {
            base_url: env_or("FINANCING_API_URL", "http://localhost:8081"),
            credentials: bearer_from_env("FINANCING_API_TOKEN"),
        };

        let inspections = UpstreamConfig {
            base_url: env_or("INSPECTION_API_URL", "http://localhost:8082"),
            credentials: basic_from_env("INSPECTION_API_USER", "INSPECTION_API_PASSWORD"),
        };

        let customers = UpstreamConfig {
            base_url: env_or("CUSTOMER_API_URL", "http://localhost:8083"),
            credentials: bearer_from_env("CUSTOMER_API_TOKEN"),
        };

        let renderer_url = env_or("RENDERER_URL", "http://localhost:9222");
        let renderer_token = std::env::var("RENDERER_TOKEN").ok().filter(|t| !t.is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            job_queue_key,
            duplicate_window_hours,
            financing,
            inspections,
            customers,
            renderer_url,
            renderer_token,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

/// Bearer credentials from a single token variable; absent or empty means
/// no injection.
fn bearer_from_env(key: &str) -> Credentials {
    match std::env::var(key) {
        Ok(token) if !token.is_empty() => Credentials::Bearer(token),
        _ => Credentials::None,
    }
}

/// Basic credentials from a username/password pair; both must be present.
fn basic_from_env(user_key: &str, password_key: &str) -> Credentials {
    match (std::env::var(user_key), std::env::var(password_key)) {
        (Ok(username), Ok(password)) if !username.is_empty() => {
            Credentials::Basic { username, password }
        }
        _ => Credentials::None,
    }
}
