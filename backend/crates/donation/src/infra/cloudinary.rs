//! Reqwest-backed Cloudinary image host adapter.
//!
//! Owns transport details only: request signing, multipart encoding,
//! timeout and HTTP error mapping, and reading `secure_url` back.

use std::fmt;
use std::time::Duration;

use platform::crypto::sha1_hex;
use platform::token::unix_now;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::domain::repository::{ImageHost, UploadError};
use crate::domain::value_objects::ProofImage;

const DEFAULT_API_BASE: &str = "https://api.cloudinary.com";
const DEFAULT_UPLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Cloudinary account settings
#[derive(Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Overridable for tests and proxies
    pub api_base: String,
    pub upload_timeout: Duration,
}

impl CloudinaryConfig {
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            api_base: DEFAULT_API_BASE.to_owned(),
            upload_timeout: DEFAULT_UPLOAD_TIMEOUT,
        }
    }

    fn upload_url(&self) -> String {
        format!(
            "{}/v1_1/{}/image/upload",
            self.api_base.trim_end_matches('/'),
            self.cloud_name
        )
    }
}

impl fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("upload_timeout", &self.upload_timeout)
            .finish()
    }
}

/// Signed-upload client
#[derive(Clone)]
pub struct CloudinaryClient {
    client: Client,
    config: CloudinaryConfig,
}

impl CloudinaryClient {
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: CloudinaryConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.upload_timeout).build()?;
        Ok(Self { client, config })
    }
}

impl ImageHost for CloudinaryClient {
    async fn upload(&self, image: ProofImage, folder: &str) -> Result<String, UploadError> {
        let timestamp = unix_now().to_string();
        let signature = sign_upload(folder, &timestamp, &self.config.api_secret);

        let image_type = image.image_type();
        let file = Part::bytes(image.into_bytes())
            .file_name(format!("proof.{}", image_type.extension()))
            .mime_str(image_type.mime())
            .map_err(|e| UploadError(e.to_string()))?;

        let form = Form::new()
            .part("file", file)
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", folder.to_owned())
            .text("signature", signature);

        let response = self
            .client
            .post(self.config.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        parse_upload_response(status, body.as_ref())
    }
}

/// `sha1("folder=<folder>&timestamp=<ts>" + secret)` as lowercase hex.
/// Parameters are in alphabetical order, as Cloudinary requires.
fn sign_upload(folder: &str, timestamp: &str, api_secret: &str) -> String {
    let to_sign = format!("folder={folder}&timestamp={timestamp}{api_secret}");
    sha1_hex(to_sign.as_bytes())
}

#[derive(Deserialize)]
struct UploadResponseDto {
    secure_url: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponseDto {
    error: ErrorBodyDto,
}

#[derive(Deserialize)]
struct ErrorBodyDto {
    message: String,
}

fn parse_upload_response(status: StatusCode, body: &[u8]) -> Result<String, UploadError> {
    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorResponseDto>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body_preview(body));
        return Err(UploadError(format!("status {}: {}", status.as_u16(), message)));
    }

    let decoded: UploadResponseDto = serde_json::from_slice(body)
        .map_err(|e| UploadError(format!("invalid upload response: {e}")))?;

    decoded
        .secure_url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| UploadError("upload response has no secure_url".to_owned()))
}

fn map_transport_error(error: reqwest::Error) -> UploadError {
    if error.is_timeout() {
        UploadError(format!("upload timed out: {error}"))
    } else {
        UploadError(error.to_string())
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    compact.chars().take(PREVIEW_CHAR_LIMIT).collect()
}
