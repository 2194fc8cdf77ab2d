use crate::{
    s3::actions::{Action, bucket, key_path, response_error},
    s3::{S3, request, tools},
};
use anyhow::Result;
use reqwest::{Method, header::HeaderMap};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct HeadObject<'a> {
    key: &'a str,
    pub version_id: Option<String>,
}

impl<'a> HeadObject<'a> {
    #[must_use]
    pub fn new(key: &'a str) -> Self {
        Self {
            key,
            ..Self::default()
        }
    }

    /// Returns the response headers with lowercase names, empty values are skipped
    ///
    /// # Errors
    ///
    /// Will return `Err` if can not make the request or the response is not a success
    pub async fn request(&self, s3: &S3) -> Result<BTreeMap<String, Vec<String>>> {
        let bucket = bucket(s3)?;
        let (url, headers) = &self.sign(s3, tools::sha256_digest("").as_ref(), None, None)?;
        let response = request::request(url.clone(), self.http_method()?, headers, None).await?;

        if response.status().is_success() {
            Ok(header_map(response.headers()))
        } else {
            Err(response_error(response, bucket, Some(self.key)).await?.into())
        }
    }
}

// repeated headers keep every value, user metadata may carry raw UTF-8
fn header_map(headers: &HeaderMap) -> BTreeMap<String, Vec<String>> {
    let mut h: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in headers {
        if !value.is_empty() {
            h.entry(key.as_str().to_string())
                .or_default()
                .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }
    }
    h
}

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_HeadObject.html>
impl Action for HeadObject<'_> {
    fn http_method(&self) -> Result<Method> {
        Ok(Method::from_bytes(b"HEAD")?)
    }

    fn headers(&self) -> Option<BTreeMap<&str, &str>> {
        None
    }

    fn query_pairs(&self) -> Option<BTreeMap<&str, &str>> {
        let vid = self.version_id.as_deref()?;

        let mut map: BTreeMap<&str, &str> = BTreeMap::new();
        map.insert("versionId", vid);

        Some(map)
    }

    fn path(&self) -> Option<Vec<&str>> {
        Some(key_path(self.key))
    }
}
