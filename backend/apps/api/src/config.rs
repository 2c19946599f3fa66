//! Server Configuration
//!
//! Everything the binary needs is read once at startup from the process
//! environment (after `.env` is loaded) into plain values.

use anyhow::{Context, bail};
use auth::AuthConfig;
use axum::http::{HeaderValue, Method, header};
use donation::{CloudinaryConfig, DonationConfig};
use std::env;
use std::fmt;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub const DEFAULT_PORT: u16 = 8080;

pub const DEFAULT_FRONTEND_ORIGINS: &[&str] = &[
    "http://localhost:3001",
    "http://localhost:3002",
    "http://localhost:3003",
    "https://example.co",
    "https://www.exaple.co",
    "https://www.khokharwelfarefoundaion.com",
    "https://khokhar-welfare-frontend.vercel.app",
];

// ============================================================================
// CORS
// ============================================================================

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<HeaderValue>,
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: parse_origins(DEFAULT_FRONTEND_ORIGINS.iter().copied()),
            allow_credentials: true,
        }
    }
}

impl CorsConfig {
    pub fn layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.allowed_origins.clone()))
            .allow_methods(AllowMethods::list([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ]))
            .allow_headers(AllowHeaders::list([
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
            ]))
            .allow_credentials(self.allow_credentials)
    }
}

fn parse_origins<'a>(origins: impl Iterator<Item = &'a str>) -> Vec<HeaderValue> {
    origins
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect()
}

// ============================================================================
// App
// ============================================================================

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub auth: AuthConfig,
    pub donation: DonationConfig,
    pub cloudinary: CloudinaryConfig,
    pub cors: CorsConfig,
}

impl fmt::Debug for AppConfig {
    /// The database URL usually embeds credentials; secrets inside
    /// `auth` and `cloudinary` are redacted by their own impls.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &"[REDACTED]")
            .field("port", &self.port)
            .field("auth", &self.auth)
            .field("donation", &self.donation)
            .field("cloudinary", &self.cloudinary)
            .field("cors", &self.cors)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &str| get(key).with_context(|| format!("{key} must be set"));

        let database_url = require("DATABASE_URL")?;

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let mut auth = match get("JWT_SECRET") {
            Some(secret) => AuthConfig::with_secret(secret.into_bytes()),
            None if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using a random secret for this run");
                AuthConfig::development()
            }
            None => bail!("JWT_SECRET must be set in production"),
        };
        if let Some(raw) = get("PASSWORD_HASH_ITERATIONS") {
            auth.password_hash.iterations = raw
                .trim()
                .parse()
                .with_context(|| format!("PASSWORD_HASH_ITERATIONS is not a number: {raw}"))?;
        }
        if let Some(raw) = get("PASSWORD_HASH_MEMORY_KIB") {
            auth.password_hash.memory_kib = raw
                .trim()
                .parse()
                .with_context(|| format!("PASSWORD_HASH_MEMORY_KIB is not a number: {raw}"))?;
        }

        let cloudinary = CloudinaryConfig::new(
            require("CLOUDINARY_CLOUD_NAME")?,
            require("CLOUDINARY_API_KEY")?,
            require("CLOUDINARY_API_SECRET")?,
        );

        let mut cors = CorsConfig::default();
        if let Some(raw) = get("FRONTEND_ORIGINS") {
            cors.allowed_origins = parse_origins(raw.split(','));
        }
        if let Some(raw) = get("CORS_ALLOW_CREDENTIALS") {
            cors.allow_credentials = match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => bail!("CORS_ALLOW_CREDENTIALS must be true or false: {raw}"),
            };
        }

        Ok(Self {
            database_url,
            port,
            auth,
            donation: DonationConfig::default(),
            cloudinary,
            cors,
        })
    }
}
