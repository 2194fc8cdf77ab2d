//! `MinIO` test helper for e2e tests
//!
//! Supports both Docker and Podman container runtimes, for Podman set:
//! ```bash
//! export DOCKER_HOST=unix:///run/user/$(id -u)/podman/podman.sock
//! export TESTCONTAINERS_DOCKER_SOCKET_OVERRIDE=/run/user/$(id -u)/podman/podman.sock
//! cargo test --test e2e_acl -- --ignored
//! ```

#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use testcontainers::{
    ContainerAsync, GenericImage, ImageExt,
    core::{ContainerPort, WaitFor},
    runners::AsyncRunner,
};

/// Default `MinIO` credentials for testing
pub const MINIO_ROOT_USER: &str = "minioadmin";
pub const MINIO_ROOT_PASSWORD: &str = "minioadmin";

/// `MinIO` test fixture that manages container lifecycle
pub struct MinioContainer {
    #[allow(dead_code)]
    container: ContainerAsync<GenericImage>,
    pub endpoint: String,
    pub access_key: String,
    pub secret_key: String,
}

impl MinioContainer {
    /// Start a new `MinIO` container and wait for the S3 port
    pub async fn start() -> Self {
        let image = GenericImage::new("minio/minio", "latest")
            .with_wait_for(WaitFor::message_on_stderr("MinIO Object Storage Server"))
            .with_env_var("MINIO_ROOT_USER", MINIO_ROOT_USER)
            .with_env_var("MINIO_ROOT_PASSWORD", MINIO_ROOT_PASSWORD)
            .with_cmd(vec!["server", "/data", "--console-address", ":9001"]);

        let container = image
            .start()
            .await
            .expect("Failed to start MinIO container");

        let port = container
            .get_host_port_ipv4(ContainerPort::Tcp(9000))
            .await
            .expect("Failed to get MinIO port");

        Self {
            container,
            endpoint: format!("http://127.0.0.1:{port}"),
            access_key: MINIO_ROOT_USER.to_string(),
            secret_key: MINIO_ROOT_PASSWORD.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Wait for `MinIO` to be ready to accept connections
    pub async fn wait_for_ready(&self) -> anyhow::Result<()> {
        use std::time::Duration;
        use tokio::time::sleep;

        let max_attempts = 30;

        for _ in 0..max_attempts {
            let url = format!("{}/minio/health/live", self.endpoint);
            match reqwest::Client::new().get(&url).send().await {
                Ok(response) if response.status().is_success() => return Ok(()),
                _ => sleep(Duration::from_millis(500)).await,
            }
        }

        Err(anyhow::anyhow!(
            "MinIO did not become ready after {max_attempts} attempts"
        ))
    }
}
