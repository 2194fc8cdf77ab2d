use crate::{
    s3::actions::{AclBody, Action, bucket, response_error},
    s3::{S3, request, tools},
};
use anyhow::Result;
use reqwest::Method;
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct PutBucketAcl {
    acl: AclBody,
}

impl PutBucketAcl {
    #[must_use]
    pub const fn new(acl: AclBody) -> Self {
        Self { acl }
    }

    /// # Errors
    ///
    /// Will return `Err` if can not make the request or the response is not a success
    pub async fn request(&self, s3: &S3) -> Result<()> {
        let bucket = bucket(s3)?;
        let body = self.acl.body();
        let digest = tools::sha256_digest(body);
        let md5 = md5::compute(body.as_bytes());

        let (url, headers) = &self.sign(s3, digest.as_ref(), Some(md5.as_ref()), Some(body.len()))?;

        let response = request::request(
            url.clone(),
            self.http_method()?,
            headers,
            match &self.acl {
                AclBody::Canned(_) => None,
                AclBody::Xml(xml) => Some(xml.clone()),
            },
        )
        .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(response_error(response, bucket, None).await?.into())
        }
    }
}

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutBucketAcl.html>
impl Action for PutBucketAcl {
    fn http_method(&self) -> Result<Method> {
        Ok(Method::from_bytes(b"PUT")?)
    }

    fn headers(&self) -> Option<BTreeMap<&str, &str>> {
        self.acl.headers()
    }

    fn query_pairs(&self) -> Option<BTreeMap<&str, &str>> {
        let mut map: BTreeMap<&str, &str> = BTreeMap::new();

        map.insert("acl", "");

        Some(map)
    }

    fn path(&self) -> Option<Vec<&str>> {
        None
    }
}
