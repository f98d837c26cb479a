//! Client configuration.
//!
//! Configuration is an explicit struct handed to [`TraceixClient::new`];
//! environment variables are consulted only in [`ClientConfig::from_env`] and
//! [`ClientConfig::resolve`], never inside the client itself. This keeps the
//! core logic environment-free and testable via direct injection.
//!
//! [`TraceixClient::new`]: crate::client::TraceixClient::new

use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::time::Duration;

use crate::core::error::{ClientError, ClientResult};

/// Base URL of the Traceix service.
pub const DEFAULT_BASE_URL: &str = "https://ai.perkinsfund.org";

/// Fixed SDK version token sent in the user-agent.
pub const SDK_VERSION: &str = "0.0.0.1";

/// Environment variable consulted for the API key when none is given.
pub const API_KEY_ENV: &str = "TRACEIX_API_KEY";

/// Environment variable that, when set to exactly `"1"`, strips platform
/// information from the user-agent.
pub const DISABLE_TELEMETRY_ENV: &str = "TRACEIX_DISABLE_TELEMETRY";

/// Traceix client configuration.
///
/// # Examples
///
/// ```rust
/// use traceix::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("my-api-key")
///     .with_timeout(Duration::from_secs(30))
///     .with_telemetry(false);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key (kept secret; never printed by `Debug`).
    pub api_key: SecretString,

    /// Base URL for the service.
    pub base_url: String,

    /// Request timeout applied to every operation.
    pub timeout: Duration,

    /// Whether the user-agent carries platform information.
    pub telemetry: bool,
}

impl ClientConfig {
    /// Creates a new configuration with the given API key.
    ///
    /// This constructor never touches the environment; telemetry defaults to
    /// enabled and the base URL to [`DEFAULT_BASE_URL`].
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into().into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
            telemetry: true,
        }
    }

    /// Builds a configuration entirely from the environment.
    ///
    /// Fails with [`ClientError::NoApiKey`] if `TRACEIX_API_KEY` is unset or
    /// empty.
    pub fn from_env() -> ClientResult<Self> {
        Self::resolve(None)
    }

    /// Resolves a configuration from an optional explicit key.
    ///
    /// An explicit non-empty key always wins; otherwise `TRACEIX_API_KEY` is
    /// read. Telemetry is disabled when `TRACEIX_DISABLE_TELEMETRY` is
    /// exactly `"1"`. Resolution happens once, here; the resulting config is
    /// immutable as far as the client is concerned.
    pub fn resolve(api_key: Option<String>) -> ClientResult<Self> {
        let key = match api_key {
            Some(k) if !k.is_empty() => k,
            _ => env::var(API_KEY_ENV).unwrap_or_default(),
        };
        if key.is_empty() {
            return Err(ClientError::NoApiKey);
        }

        let telemetry = env::var(DISABLE_TELEMETRY_ENV)
            .map(|v| v != "1")
            .unwrap_or(true);

        Ok(Self::new(key).with_telemetry(telemetry))
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets whether platform information is included in the user-agent.
    pub fn with_telemetry(mut self, telemetry: bool) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Returns `true` if the stored API key is empty.
    pub(crate) fn has_empty_key(&self) -> bool {
        self.api_key.expose_secret().is_empty()
    }

    /// Computes the user-agent string for this configuration.
    ///
    /// Always `Traceix/<SDK_VERSION>`; with telemetry enabled, an
    /// OS/arch/crate-version suffix is appended.
    pub fn user_agent(&self) -> String {
        let mut ua = format!("Traceix/{SDK_VERSION}");
        if self.telemetry {
            ua.push_str(&format!(
                " ({}-{} v{})",
                env::consts::OS,
                env::consts::ARCH,
                env!("CARGO_PKG_VERSION")
            ));
        }
        ua
    }
}
