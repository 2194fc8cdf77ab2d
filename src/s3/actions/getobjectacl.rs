use crate::{
    s3::acl::AccessControlPolicy,
    s3::actions::{Action, bucket, key_path, response_error},
    s3::{S3, request, tools},
};
use anyhow::Result;
use reqwest::Method;
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct GetObjectAcl<'a> {
    key: &'a str,
    pub version_id: Option<String>,
}

impl<'a> GetObjectAcl<'a> {
    #[must_use]
    pub const fn new(key: &'a str) -> Self {
        Self {
            key,
            version_id: None,
        }
    }

    /// Returns the `AccessControlPolicy` XML document as sent by the server
    ///
    /// # Errors
    ///
    /// Will return `Err` if can not make the request or the response is not a success
    pub async fn request(&self, s3: &S3) -> Result<String> {
        let bucket = bucket(s3)?;
        let (url, headers) = &self.sign(s3, tools::sha256_digest("").as_ref(), None, None)?;
        let response = request::request(url.clone(), self.http_method()?, headers, None).await?;

        if response.status().is_success() {
            Ok(response.text().await?)
        } else {
            Err(response_error(response, bucket, Some(self.key)).await?.into())
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if can not make the request or the response is not a valid
    /// `AccessControlPolicy`
    pub async fn policy(&self, s3: &S3) -> Result<AccessControlPolicy> {
        AccessControlPolicy::from_xml(&self.request(s3).await?)
    }
}

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetObjectAcl.html>
impl Action for GetObjectAcl<'_> {
    fn http_method(&self) -> Result<Method> {
        Ok(Method::from_bytes(b"GET")?)
    }

    fn headers(&self) -> Option<BTreeMap<&str, &str>> {
        None
    }

    fn query_pairs(&self) -> Option<BTreeMap<&str, &str>> {
        let mut map: BTreeMap<&str, &str> = BTreeMap::new();

        map.insert("acl", "");

        if let Some(vid) = &self.version_id {
            map.insert("versionId", vid);
        }

        Some(map)
    }

    fn path(&self) -> Option<Vec<&str>> {
        Some(key_path(self.key))
    }
}
