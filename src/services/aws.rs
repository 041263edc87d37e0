// src/services/aws.rs

use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client as S3Client;
use chrono::Utc;
use std::env;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::common::id_generator::generate_token;

/// Presigned upload URLs stay valid for this long
const UPLOAD_URL_EXPIRY_SECS: u64 = 1000;

/// Length of the random part of an uploaded object key
const UPLOAD_KEY_TOKEN_LEN: usize = 21;

#[derive(Debug, Error)]
pub enum AwsError {
    #[error("AWS credentials not configured")]
    NotConfigured,

    #[error("S3 operation failed: {0}")]
    S3Error(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Clone)]
pub struct AwsConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub bucket: String,
}

impl AwsConfig {
    /// Read S3 credentials and bucket configuration from the environment
    pub fn from_env() -> Result<Self, AwsError> {
        let access_key_id = env::var("AWS_ACCESS_KEY_ID").map_err(|_| AwsError::NotConfigured)?;
        let secret_access_key =
            env::var("AWS_SECRET_ACCESS_KEY").map_err(|_| AwsError::NotConfigured)?;
        let region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
        let bucket = env::var("AWS_S3_BUCKET_NAME")
            .map_err(|_| AwsError::InvalidConfig("S3 bucket name not configured".to_string()))?;

        Ok(Self {
            access_key_id,
            secret_access_key,
            region,
            bucket,
        })
    }
}

/// Issues presigned S3 PUT URLs so banner images go straight from the
/// browser to the bucket without passing through this server
#[derive(Debug)]
pub struct AwsService {
    config: Option<AwsConfig>,
}

impl AwsService {
    pub fn new(config: Option<AwsConfig>) -> Self {
        if config.is_none() {
            info!("AWS credentials absent; upload URLs will be unavailable");
        }
        Self { config }
    }

    /// Build an S3 client from the configured credentials
    async fn s3_client(&self) -> Result<(S3Client, String), AwsError> {
        let config = self.config.as_ref().ok_or(AwsError::NotConfigured)?;

        let credentials = Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            "env",
        );

        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        Ok((S3Client::new(&aws_config), config.bucket.clone()))
    }

    /// Presign a PUT for a fresh JPEG object key. The key embeds a random
    /// token plus the current epoch millis so concurrent uploads never
    /// collide.
    pub async fn presigned_upload_url(&self) -> Result<String, AwsError> {
        let (client, bucket) = self.s3_client().await?;

        let key = format!(
            "{}-{}.jpeg",
            generate_token(UPLOAD_KEY_TOKEN_LEN),
            Utc::now().timestamp_millis()
        );

        let presigning = PresigningConfig::expires_in(Duration::from_secs(UPLOAD_URL_EXPIRY_SECS))
            .map_err(|e| AwsError::InvalidConfig(e.to_string()))?;

        let presigned = client
            .put_object()
            .bucket(&bucket)
            .key(&key)
            .content_type("image/jpeg")
            .presigned(presigning)
            .await
            .map_err(|e| {
                error!(error = %e, key = %key, "Failed to presign upload URL");
                AwsError::S3Error(format!("Presign failed: {}", e))
            })?;

        debug!(key = %key, bucket = %bucket, "Presigned upload URL issued");
        Ok(presigned.uri().to_string())
    }
}
