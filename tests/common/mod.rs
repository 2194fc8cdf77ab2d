//! Common test helpers for e2e tests
//!
//! - `MinioContext`: external `MinIO` (`MINIO_ENDPOINT`) or a testcontainer
//! - signed bucket and object creation, the crate itself only handles ACLs
//! - s3acl binary helpers

#![allow(
    dead_code,
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod helpers {
    pub mod minio;
}

pub use helpers::minio::{MINIO_ROOT_PASSWORD, MINIO_ROOT_USER, MinioContainer};

use anyhow::{Result, anyhow};
use reqwest::Method;
use s3acl::s3::{Credentials, Region, S3, Signature, request, tools};
use secrecy::SecretString;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::NamedTempFile;

/// Create a temporary config.yml with a single `s3` host
pub fn create_config_file(endpoint: &str, access_key: &str, secret_key: &str) -> NamedTempFile {
    let config_content = format!(
        r"---
hosts:
  s3:
    endpoint: {endpoint}
    access_key: {access_key}
    secret_key: {secret_key}
"
    );

    let mut config_file = NamedTempFile::new().expect("Failed to create temp config file");
    config_file
        .write_all(config_content.as_bytes())
        .expect("Failed to write config");
    config_file.flush().expect("Failed to flush config");
    config_file
}

/// `MinIO` test context - either external or testcontainer-based
pub enum MinioContext {
    External {
        endpoint: String,
        access_key: String,
        secret_key: String,
    },
    Container(Box<MinioContainer>),
}

impl MinioContext {
    /// Uses external `MinIO` if `MINIO_ENDPOINT` is set, otherwise starts a container
    pub async fn get_or_start() -> Self {
        if let Ok(endpoint) = env::var("MINIO_ENDPOINT") {
            let access_key =
                env::var("MINIO_ACCESS_KEY").unwrap_or_else(|_| MINIO_ROOT_USER.to_string());
            let secret_key =
                env::var("MINIO_SECRET_KEY").unwrap_or_else(|_| MINIO_ROOT_PASSWORD.to_string());

            println!("Using external MinIO at {endpoint}");

            Self::External {
                endpoint,
                access_key,
                secret_key,
            }
        } else {
            println!("Starting MinIO testcontainer");
            let container = MinioContainer::start().await;
            container.wait_for_ready().await.expect("MinIO ready");
            Self::Container(Box::new(container))
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            Self::External { endpoint, .. } => endpoint,
            Self::Container(c) => c.endpoint(),
        }
    }

    pub fn access_key(&self) -> &str {
        match self {
            Self::External { access_key, .. } => access_key,
            Self::Container(c) => &c.access_key,
        }
    }

    pub fn secret_key(&self) -> &str {
        match self {
            Self::External { secret_key, .. } => secret_key,
            Self::Container(c) => &c.secret_key,
        }
    }

    /// `S3` handle for the bucket, `MinIO` doesn't care about the region
    pub fn s3(&self, bucket: &str) -> S3 {
        S3::new(
            &Credentials::new(
                self.access_key(),
                &SecretString::new(self.secret_key().into()),
            ),
            &Region::Custom {
                name: String::new(),
                endpoint: self.endpoint().to_string(),
            },
            Some(bucket.to_string()),
            false,
        )
    }

    /// Create the bucket, an existing bucket owned by us is fine
    pub async fn create_bucket(&self, bucket: &str) -> Result<()> {
        let status = signed_put(&self.s3(bucket), None, "").await?;
        if status.is_success() || status.as_u16() == 409 {
            Ok(())
        } else {
            Err(anyhow!("Failed to create bucket {bucket}: {status}"))
        }
    }

    /// Upload a small object
    pub async fn put_object(&self, bucket: &str, key: &str, body: &str) -> Result<()> {
        let status = signed_put(&self.s3(bucket), Some(key), body).await?;
        if status.is_success() {
            Ok(())
        } else {
            Err(anyhow!("Failed to put object {bucket}/{key}: {status}"))
        }
    }
}

async fn signed_put(s3: &S3, key: Option<&str>, body: &str) -> Result<reqwest::StatusCode> {
    let mut url = s3.endpoint()?;

    if let Some(key) = key {
        url.path_segments_mut()
            .map_err(|()| anyhow!("cannot be base"))?
            .extend(key.split('/'));
    }

    let mut signature = Signature::new(s3, "s3", Method::PUT);
    let headers = signature.sign(
        &url,
        tools::sha256_digest(body).as_ref(),
        None,
        Some(body.len()),
        None,
    );

    let response = request::request(url, Method::PUT, &headers, Some(body.to_string())).await?;

    Ok(response.status())
}

/// Get the path to the s3acl binary (builds it if needed)
pub fn get_s3acl_binary() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("s3acl");

    if !path.exists() {
        let output = Command::new("cargo")
            .args(["build", "--bin", "s3acl"])
            .output()
            .expect("Failed to build s3acl binary");

        assert!(
            output.status.success(),
            "Failed to build s3acl: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    path
}

/// Run s3acl with a config file pointing to `MinIO`
pub fn run_s3acl_with_minio(minio: &MinioContext, args: &[&str]) -> std::process::Output {
    let config_file = create_config_file(minio.endpoint(), minio.access_key(), minio.secret_key());
    let config_path = config_file.path().to_str().expect("Invalid config path");

    let output = Command::new(get_s3acl_binary())
        .arg("--config")
        .arg(config_path)
        .args(args)
        .env_remove("AWS_ACCESS_KEY_ID")
        .env_remove("AWS_SECRET_ACCESS_KEY")
        .output()
        .expect("Failed to execute s3acl");

    // Keep config_file alive until command completes
    drop(config_file);

    output
}

/// Run s3acl without config (for --version, --help, etc.)
pub fn run_s3acl(args: &[&str]) -> std::process::Output {
    Command::new(get_s3acl_binary())
        .args(args)
        .output()
        .expect("Failed to execute s3acl")
}
