//! Server configuration.
//!
//! Loaded from environment variables, with an optional `.env` file picked up
//! by `dotenvy` first.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Default upload ceiling for contest entries (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development; browser tests may be requested.
    #[default]
    Development,
    /// Production; browser tests are never shown and cookies are `Secure`.
    Production,
}

impl Environment {
    /// Returns `true` in production.
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        })
    }
}

/// Complete server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Deployment environment.
    pub environment: Environment,
    /// Directory served for paths no route claims.
    pub public_dir: PathBuf,
    /// Largest request body accepted, in bytes.
    pub max_upload_bytes: usize,
    /// Whether the session cookie carries the `Secure` attribute.
    pub secure_cookies: bool,
    /// Outgoing mail settings.
    pub mail: MailConfig,
}

/// Outgoing mail settings.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP relay; when absent, mail is written to the log instead.
    pub smtp: Option<SmtpConfig>,
    /// Sender address.
    pub from_email: String,
    /// Sender display name.
    pub from_name: String,
}

/// SMTP relay credentials.
#[derive(Clone)]
pub struct SmtpConfig {
    /// Relay host.
    pub host: String,
    /// Relay port.
    pub port: u16,
    /// Login user.
    pub username: String,
    /// Login password.
    pub password: String,
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Reads `.env` if present. Missing or unparseable values fall back to
    /// their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let environment = parsed(&lookup, "APP_ENV", Environment::Development);

        let smtp = lookup("SMTP_HOST")
            .filter(|host| !host.trim().is_empty())
            .map(|host| SmtpConfig {
                host,
                port: parsed(&lookup, "SMTP_PORT", 587),
                username: lookup("SMTP_USERNAME").unwrap_or_default(),
                password: lookup("SMTP_PASSWORD").unwrap_or_default(),
            });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parsed(&lookup, "PORT", 3000),
            environment,
            public_dir: lookup("PUBLIC_DIR").map_or_else(|| PathBuf::from("public"), PathBuf::from),
            max_upload_bytes: parsed(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
            secure_cookies: parsed(&lookup, "SECURE_COOKIES", environment.is_production()),
            mail: MailConfig {
                smtp,
                from_email: lookup("MAIL_FROM")
                    .unwrap_or_else(|| "noreply@meadowlarktravel.com".to_string()),
                from_name: lookup("MAIL_FROM_NAME")
                    .unwrap_or_else(|| "Meadowlark Travel".to_string()),
            },
        }
    }

    /// `host:port` to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key).and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert!(!config.secure_cookies);
        assert!(config.mail.smtp.is_none());
        assert_eq!(config.mail.from_name, "Meadowlark Travel");
    }

    #[test]
    fn test_port_override_and_bad_value() {
        assert_eq!(config(&[("PORT", "8080")]).port, 8080);
        assert_eq!(config(&[("PORT", "eighty")]).port, 3000);
    }

    #[test]
    fn test_production_turns_on_secure_cookies() {
        let config = config(&[("APP_ENV", "production")]);
        assert!(config.environment.is_production());
        assert!(config.secure_cookies);
    }

    #[test]
    fn test_smtp_only_when_host_set() {
        let config = config(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "user"),
            ("SMTP_PASSWORD", "hunter2"),
        ]);
        let smtp = config.mail.smtp.as_ref().map(|s| (s.host.as_str(), s.port));
        assert_eq!(smtp, Some(("smtp.example.com", 587)));
    }

    #[test]
    fn test_smtp_debug_redacts_password() {
        let config = config(&[("SMTP_HOST", "smtp.example.com"), ("SMTP_PASSWORD", "hunter2")]);
        let debug = format!("{:?}", config.mail);
        assert!(!debug.contains("hunter2"));
    }
}
