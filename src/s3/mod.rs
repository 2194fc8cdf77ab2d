pub mod acl;
pub mod actions;
pub mod credentials;
pub mod object_info;
pub mod region;
pub mod request;
pub mod responses;
pub mod signature;
pub mod tools;
pub use self::{credentials::Credentials, region::Region, signature::Signature};

use anyhow::{Context, Result, anyhow};
use std::fmt;
use url::Url;

#[derive(Debug, Clone)]
pub struct S3 {
    // AWS Credentials
    credentials: Credentials,
    // AWS Region
    region: Region,
    // bucket name
    bucket: Option<String>,
    // anonymous requests, no Authorization header
    no_sign_request: bool,
}

// Amazon S3 API Reference
// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_Operations.html>
impl S3 {
    #[must_use]
    pub fn new(
        credentials: &Credentials,
        region: &Region,
        bucket: Option<String>,
        no_sign_request: bool,
    ) -> Self {
        Self {
            credentials: credentials.clone(),
            region: region.clone(),
            bucket,
            no_sign_request,
        }
    }

    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[must_use]
    pub const fn region(&self) -> &Region {
        &self.region
    }

    #[must_use]
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    #[must_use]
    pub const fn no_sign_request(&self) -> bool {
        self.no_sign_request
    }

    /// Path-style URL of the bucket, `https://<endpoint>/<bucket>`
    ///
    /// # Errors
    ///
    /// Will return `Err` if the endpoint is not a valid URL
    pub fn endpoint(&self) -> Result<Url> {
        let endpoint = self.region.endpoint();

        let mut url = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            Url::parse(&endpoint)
        } else {
            Url::parse(&format!("https://{endpoint}"))
        }
        .with_context(|| format!("invalid endpoint: {endpoint}"))?;

        if let Some(bucket) = &self.bucket {
            url.path_segments_mut()
                .map_err(|()| anyhow!("cannot be base: {endpoint}"))?
                .pop_if_empty()
                .push(bucket);
        }

        Ok(url)
    }
}

impl fmt::Display for S3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "access key: {}", self.credentials.aws_access_key_id())?;
        writeln!(f, "region: {}", self.region.name())?;
        writeln!(f, "endpoint: {}", self.region.endpoint())?;
        writeln!(f, "bucket: {}", self.bucket.as_deref().unwrap_or_default())?;
        write!(f, "no sign request: {}", self.no_sign_request)
    }
}
