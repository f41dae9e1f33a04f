use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::config::UploadConfig;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("object storage credentials are not configured")]
    NotConfigured,

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("upload rejected: {0}")]
    Rejected(String),
}

/// A file received from a multipart form.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Stores an uploaded file and returns its durable public URL.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn upload(&self, file: UploadFile) -> Result<String, UploadError>;
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Signed uploads to Cloudinary's image endpoint.
pub struct CloudinaryStorage {
    client: reqwest::Client,
    base_url: String,
    cloud_name: Option<String>,
    api_key: Option<String>,
    api_secret: Option<String>,
}

impl CloudinaryStorage {
    pub fn from_config(config: &UploadConfig) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cloud_name: config.cloud_name.clone(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
        })
    }
}

/// Hex SHA-256 over the `&`-joined, key-sorted params followed by the secret.
pub fn sign(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    let joined = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[async_trait]
impl ObjectStorage for CloudinaryStorage {
    async fn upload(&self, file: UploadFile) -> Result<String, UploadError> {
        let (Some(cloud_name), Some(api_key), Some(api_secret)) =
            (&self.cloud_name, &self.api_key, &self.api_secret)
        else {
            return Err(UploadError::NotConfigured);
        };

        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = sign(&[("timestamp", timestamp.clone())], api_secret);

        let mut part = Part::bytes(file.bytes).file_name(file.file_name.clone());
        if let Some(content_type) = &file.content_type {
            part = part.mime_str(content_type)?;
        }

        let form = Form::new()
            .text("api_key", api_key.clone())
            .text("timestamp", timestamp)
            .text("signature", signature)
            .part("file", part);

        let url = format!("{}/v1_1/{}/image/upload", self.base_url, cloud_name);
        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error.message,
                Err(_) => status.to_string(),
            };
            tracing::error!("Upload of '{}' rejected: {}", file.file_name, message);
            return Err(UploadError::Rejected(message));
        }

        let body: UploadResponse = response.json().await?;
        tracing::debug!("Uploaded '{}' to {}", file.file_name, body.secure_url);
        Ok(body.secure_url)
    }
}
