use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use finboard_core::subscription::{StripeConfig, DEFAULT_API_BASE_URL};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    /// Base64 encoded 32-byte key used to sign session tokens.
    pub secret_key: Option<String>,
    pub token_ttl: Duration,
    /// When false, data routes are served without a paid subscription.
    pub subscription_required: bool,
    pub stripe: Option<StripeConfig>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("FB_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid FB_LISTEN_ADDR")?;
        let db_path = env_or("FB_DB_PATH", "./db/finboard.db");
        let cors_allow = env_or("FB_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("FB_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .unwrap_or(30000);
        let static_dir = env_or("FB_STATIC_DIR", "dist");
        let secret_key = std::env::var("FB_SECRET_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let token_ttl_secs: u64 = env_or("FB_TOKEN_TTL_SECS", "604800")
            .parse()
            .unwrap_or(604800);
        let subscription_required = parse_flag(&env_or("FB_SUBSCRIPTION_REQUIRED", "true"));
        let public_url = env_or("FB_PUBLIC_URL", "http://localhost:8080");

        let stripe = match std::env::var("FB_STRIPE_SECRET_KEY") {
            Ok(secret_key) if !secret_key.trim().is_empty() => {
                let price_id = std::env::var("FB_STRIPE_PRICE_ID")
                    .context("FB_STRIPE_PRICE_ID is required when FB_STRIPE_SECRET_KEY is set")?;
                Some(StripeConfig {
                    secret_key,
                    price_id,
                    public_url: public_url.trim_end_matches('/').to_string(),
                    api_base_url: env_or("FB_STRIPE_API_BASE", DEFAULT_API_BASE_URL),
                })
            }
            _ => None,
        };

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            secret_key,
            token_ttl: Duration::from_secs(token_ttl_secs),
            subscription_required,
            stripe,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
