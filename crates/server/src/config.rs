//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `NOVASTORE_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! ## Optional
//! - `NOVASTORE_HOST` - Bind address (default: 0.0.0.0)
//! - `NOVASTORE_PORT` - Listen port (default: 4000)
//! - `CONTACT_SMTP_HOST` - SMTP relay for the contact form (set together with user/pass)
//! - `CONTACT_SMTP_PORT` - SMTP port (default: 465)
//! - `CONTACT_SMTP_SECURE` - Implicit TLS; any value except `false` enables it (default: true)
//! - `CONTACT_USER` - SMTP authentication username
//! - `CONTACT_PASS` - SMTP authentication password
//! - `CONTACT_TO` - Recipient for contact mail (default: `CONTACT_USER`)
//! - `CONTACT_FROM` - From header for contact mail (default: `CONTACT_USER`)
//! - `SENTRY_DSN` - DSN for error tracking
//! - `SENTRY_ENVIRONMENT` - Sentry environment label (e.g., "development", "production")
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry traces sample rate (default: 1.0)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// A secret below this entropy reads as hand-typed, not generated.
const ENTROPY_FLOOR_BITS_PER_CHAR: f64 = 3.3;

/// Substrings that mark a secret as a placeholder (checked lowercase).
const PLACEHOLDER_MARKERS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "dummy",
    "sample",
    "xxx",
    "todo",
    "fixme",
];

/// Configuration errors surfaced during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` connection URL (carries the database password)
    pub database_url: SecretString,
    /// Address the listener binds to
    pub host: IpAddr,
    /// Port the listener binds to
    pub port: u16,
    /// SMTP relay for the contact form (optional - endpoint reports failure when unset)
    pub contact: Option<ContactConfig>,
    /// DSN for error tracking, absent in local development
    pub sentry_dsn: Option<String>,
    /// Environment label attached to Sentry events
    pub sentry_environment: Option<String>,
    /// Fraction of errors reported (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Fraction of requests traced (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// SMTP relay configuration for contact-form mail.
///
/// Implements `Debug` manually to redact the SMTP password.
#[derive(Clone)]
pub struct ContactConfig {
    /// SMTP relay hostname
    pub smtp_host: String,
    /// SMTP relay port
    pub smtp_port: u16,
    /// Use implicit TLS (SMTPS); when false the relay upgrades via STARTTLS
    pub smtp_secure: bool,
    /// Relay login username
    pub smtp_username: String,
    /// Relay login password
    pub smtp_password: SecretString,
    /// Inbox that receives contact messages
    pub to_address: String,
    /// Address in the From header of relayed mail
    pub from_address: String,
}

impl std::fmt::Debug for ContactConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_secure", &self.smtp_secure)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &"[REDACTED]")
            .field("to_address", &self.to_address)
            .field("from_address", &self.from_address)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration, reading `.env` first when one exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required variable is missing, a value
    /// fails to parse, or the SMTP password fails the placeholder and
    /// entropy checks.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let database_url = database_url_from_env("NOVASTORE_DATABASE_URL")?;
        let host = env_or("NOVASTORE_HOST", "0.0.0.0")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("NOVASTORE_HOST".to_string(), e.to_string()))?;
        let port = env_or("NOVASTORE_PORT", "4000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("NOVASTORE_PORT".to_string(), e.to_string()))?;

        let contact = ContactConfig::from_env()?;
        let sentry_dsn = env_opt("SENTRY_DSN");
        let sentry_environment = env_opt("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = env_opt("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = env_opt("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            database_url,
            host,
            port,
            contact,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Address the server listens on.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl ContactConfig {
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let smtp_host = env_opt("CONTACT_SMTP_HOST");
        let smtp_username = env_opt("CONTACT_USER");
        let smtp_password = env_opt("CONTACT_PASS");

        let (smtp_host, smtp_username, smtp_password) =
            match (smtp_host, smtp_username, smtp_password) {
                (Some(host), Some(user), Some(pass)) => (host, user, pass),
                (None, None, None) => return Ok(None),
                _ => {
                    return Err(ConfigError::InvalidEnvVar(
                        "CONTACT_*".to_string(),
                        "CONTACT_SMTP_HOST, CONTACT_USER and CONTACT_PASS must be set together"
                            .to_string(),
                    ));
                }
            };

        validate_secret_strength(&smtp_password, "CONTACT_PASS")?;

        let smtp_port = env_or("CONTACT_SMTP_PORT", "465").parse::<u16>().map_err(|e| {
            ConfigError::InvalidEnvVar("CONTACT_SMTP_PORT".to_string(), e.to_string())
        })?;
        let smtp_secure = parse_secure_flag(&env_or("CONTACT_SMTP_SECURE", "true"));
        let to_address = env_opt("CONTACT_TO").unwrap_or_else(|| smtp_username.clone());
        let from_address = env_opt("CONTACT_FROM").unwrap_or_else(|| smtp_username.clone());

        Ok(Some(Self {
            smtp_host,
            smtp_port,
            smtp_secure,
            smtp_username,
            smtp_password: SecretString::from(smtp_password),
            to_address,
            from_address,
        }))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Read the database URL, falling back to the plain `DATABASE_URL` name
/// that hosting platforms set when attaching a database.
fn database_url_from_env(primary_key: &str) -> Result<SecretString, ConfigError> {
    std::env::var(primary_key)
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Environment variable as `Option`, unset reads as `None`.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Environment variable with a fallback value.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse the implicit-TLS flag: every value except the literal string
/// `false` enables it.
fn parse_secure_flag(value: &str) -> bool {
    value != "false"
}

/// Shannon entropy of the string, in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    let mut freq: HashMap<char, usize> = HashMap::new();
    let mut total = 0usize;
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)] // Secrets are far shorter than 2^52 chars
    let total = total as f64;
    let mut bits = 0.0;
    for &count in freq.values() {
        #[allow(clippy::cast_precision_loss)]
        let p = count as f64 / total;
        bits -= p * p.log2();
    }
    bits
}

/// Reject secrets that look like placeholders or hand-typed strings.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for marker in PLACEHOLDER_MARKERS {
        if lower.contains(marker) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("looks like a placeholder (contains '{marker}')"),
            ));
        }
    }

    let entropy = shannon_entropy(secret);
    if entropy < ENTROPY_FLOOR_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy {entropy:.2} bits/char is below {ENTROPY_FLOOR_BITS_PER_CHAR:.1}; generate the secret randomly"
            ),
        ));
    }

    Ok(())
}
