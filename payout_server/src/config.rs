use std::{env, time::Duration};

use log::*;
use nps_common::{
    helpers::{env_flag, env_parsed},
    Secret,
};
use payout_engine::SmtpConfig;
use rand::{distributions::Alphanumeric, Rng};

const DEFAULT_NPS_HOST: &str = "127.0.0.1";
const DEFAULT_NPS_PORT: u16 = 8360;
const DEFAULT_DATABASE_URL: &str = "sqlite://data/nps_store.db";
const DEFAULT_EMAIL_PORT: u16 = 465;
const DEFAULT_EMAIL_FROM_NAME: &str = "Nile Payout System";
const DEFAULT_NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(120);
const SMTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(60 * 60);
const GENERATED_SECRET_LENGTH: usize = 64;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// If true, pending database migrations are applied at start-up.
    pub auto_migrate: bool,
    /// Upper bound on how long the background render-and-email task for a payout may take. `None` means no limit.
    pub notification_timeout: Option<Duration>,
    pub email: EmailConfig,
    pub auth: AuthConfig,
}

/// Access token settings.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// HMAC key that access tokens are signed with.
    pub jwt_secret: Secret<String>,
    /// How long an issued access token stays valid.
    pub token_lifetime: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        warn!(
            "🚨️🚨️🚨️ The JWT signing secret has not been set. I'm using a random value for this session. Tokens issued \
             now will be rejected after a restart. Set NPS_JWT_SECRET in production. 🚨️🚨️🚨️"
        );
        let secret: String =
            rand::thread_rng().sample_iter(&Alphanumeric).take(GENERATED_SECRET_LENGTH).map(char::from).collect();
        Self { jwt_secret: Secret::new(secret), token_lifetime: DEFAULT_TOKEN_LIFETIME }
    }
}

impl AuthConfig {
    pub fn new(jwt_secret: &str, token_lifetime: Duration) -> Self {
        Self { jwt_secret: Secret::new(jwt_secret.to_string()), token_lifetime }
    }

    pub fn from_env_or_default() -> Self {
        let token_lifetime = match env_parsed::<u64>("NPS_JWT_LIFETIME") {
            Some(Ok(secs)) if secs > 0 => Duration::from_secs(secs),
            Some(Ok(_)) => {
                let default = DEFAULT_TOKEN_LIFETIME.as_secs();
                warn!("🪛️ NPS_JWT_LIFETIME must be positive. Using the default of {default}s.");
                DEFAULT_TOKEN_LIFETIME
            },
            Some(Err(e)) => {
                warn!("🪛️ {e} Using the default of {}s.", DEFAULT_TOKEN_LIFETIME.as_secs());
                DEFAULT_TOKEN_LIFETIME
            },
            None => DEFAULT_TOKEN_LIFETIME,
        };
        match env::var("NPS_JWT_SECRET").ok().filter(|s| !s.trim().is_empty()) {
            Some(secret) => Self { jwt_secret: Secret::new(secret), token_lifetime },
            None => Self { token_lifetime, ..Self::default() },
        }
    }
}

/// SMTP settings for payout summary emails. If `host` is not set, emails are not sent.
#[derive(Clone, Debug)]
pub struct EmailConfig {
    pub host: Option<String>,
    pub port: u16,
    pub user: String,
    pub password: Secret<String>,
    pub from_name: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_EMAIL_PORT,
            user: String::default(),
            password: Secret::default(),
            from_name: DEFAULT_EMAIL_FROM_NAME.to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_NPS_HOST.to_string(),
            port: DEFAULT_NPS_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            auto_migrate: true,
            notification_timeout: Some(DEFAULT_NOTIFICATION_TIMEOUT),
            email: EmailConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("NPS_HOST").ok().unwrap_or_else(|| DEFAULT_NPS_HOST.into());
        let port = match env_parsed::<u16>("NPS_PORT") {
            Some(Ok(port)) => port,
            Some(Err(e)) => {
                error!("🪛️ {e} Using the default, {DEFAULT_NPS_PORT}, instead.");
                DEFAULT_NPS_PORT
            },
            None => DEFAULT_NPS_PORT,
        };
        let database_url = env::var("NPS_DATABASE_URL").ok().unwrap_or_else(|| {
            info!("🪛️ NPS_DATABASE_URL is not set. Using the default, {DEFAULT_DATABASE_URL}.");
            DEFAULT_DATABASE_URL.to_string()
        });
        let auto_migrate = env_flag("NPS_AUTO_MIGRATE", true);
        let notification_timeout = configure_notification_timeout();
        let email = EmailConfig::from_env_or_default();
        let auth = AuthConfig::from_env_or_default();
        Self { host, port, database_url, auto_migrate, notification_timeout, email, auth }
    }
}

impl EmailConfig {
    pub fn from_env_or_default() -> Self {
        let host = env::var("NPS_EMAIL_HOST").ok().filter(|s| !s.trim().is_empty());
        if host.is_none() {
            warn!("🪛️ NPS_EMAIL_HOST is not set. Payout summaries will not be emailed to vendors.");
        }
        let port = match env_parsed::<u16>("NPS_EMAIL_PORT") {
            Some(Ok(port)) => port,
            Some(Err(e)) => {
                error!("🪛️ {e} Using the default, {DEFAULT_EMAIL_PORT}, instead.");
                DEFAULT_EMAIL_PORT
            },
            None => DEFAULT_EMAIL_PORT,
        };
        let user = env::var("NPS_EMAIL_USER").ok().unwrap_or_else(|| {
            if host.is_some() {
                error!("🪛️ NPS_EMAIL_USER is not set. Please set it to the SMTP account payout emails are sent from.");
            }
            String::default()
        });
        let password = Secret::new(env::var("NPS_EMAIL_PASS").ok().unwrap_or_default());
        let from_name = env::var("NPS_EMAIL_FROM_NAME").ok().unwrap_or_else(|| DEFAULT_EMAIL_FROM_NAME.into());
        Self { host, port, user, password, from_name }
    }

    /// The SMTP transport settings, or `None` if email delivery is switched off.
    pub fn smtp_config(&self) -> Option<SmtpConfig> {
        self.host.as_ref().map(|host| SmtpConfig {
            host: host.clone(),
            port: self.port,
            username: self.user.clone(),
            password: self.password.clone(),
            from_name: self.from_name.clone(),
            timeout: Some(SMTP_CONNECT_TIMEOUT),
        })
    }
}

fn configure_notification_timeout() -> Option<Duration> {
    match env_parsed::<u64>("NPS_NOTIFICATION_TIMEOUT") {
        Some(Ok(0)) => {
            info!("🪛️ Payout notifications have no time limit.");
            None
        },
        Some(Ok(secs)) => Some(Duration::from_secs(secs)),
        Some(Err(e)) => {
            warn!("🪛️ {e} Using the default of {}s.", DEFAULT_NOTIFICATION_TIMEOUT.as_secs());
            Some(DEFAULT_NOTIFICATION_TIMEOUT)
        },
        None => Some(DEFAULT_NOTIFICATION_TIMEOUT),
    }
}
