//! Network constants and environment configuration keys.

use std::time::Duration;

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.paylite.in/api/v1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "PAYLITE_API_URL";

/// Environment variable overriding the request timeout, in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "PAYLITE_HTTP_TIMEOUT_MS";
