//! Actions
//! <https://docs.aws.amazon.com/AmazonS3/latest/API/API_Operations.html>

use crate::s3::{
    S3, Signature,
    acl::{AccessControlPolicy, CannedAcl},
    responses::{ErrorResponse, ResponseError},
};
use anyhow::{Context, Result, anyhow};
use quick_xml::de::from_str;
use reqwest::{Method, Response, header::HeaderMap};
use std::collections::BTreeMap;
use url::Url;

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_HeadObject.html>
mod headobject;
pub use self::headobject::HeadObject;

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetObjectAcl.html>
mod getobjectacl;
pub use self::getobjectacl::GetObjectAcl;

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_GetBucketAcl.html>
mod getbucketacl;
pub use self::getbucketacl::GetBucketAcl;

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutObjectAcl.html>
mod putobjectacl;
pub use self::putobjectacl::PutObjectAcl;

// <https://docs.aws.amazon.com/AmazonS3/latest/API/API_PutBucketAcl.html>
mod putbucketacl;
pub use self::putbucketacl::PutBucketAcl;

pub trait Action {
    // headers to send in the request
    fn headers(&self) -> Option<BTreeMap<&str, &str>>;

    // method to use GET/PUT...
    fn http_method(&self) -> Result<Method>;

    // URL query pairs
    fn query_pairs(&self) -> Option<BTreeMap<&str, &str>>;

    // URL path
    fn path(&self) -> Option<Vec<&str>>;

    /// # Errors
    ///
    /// Will return `Err` if the signature can not be created
    fn sign(
        &self,
        s3: &S3,
        hash_payload: &[u8],
        md5: Option<&[u8]>,
        content_length: Option<usize>,
    ) -> Result<(Url, BTreeMap<String, String>)> {
        let mut url = s3.endpoint()?;

        // object key
        if let Some(path) = self.path() {
            for p in path {
                url.path_segments_mut()
                    .map_err(|()| anyhow!("cannot be base"))?
                    .push(p);
            }
        }

        if let Some(pairs) = &self.query_pairs() {
            for (k, v) in pairs {
                url.query_pairs_mut().append_pair(k, v);
            }
        }

        let mut signature = Signature::new(s3, "s3", self.http_method()?);
        let headers = signature.sign(&url, hash_payload, md5, content_length, self.headers());

        log::debug!("signed url: {url}, headers: {headers:#?}");

        Ok((url, headers))
    }
}

/// Payload of a `PUT ?acl` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AclBody {
    /// canned ACL sent in the `x-amz-acl` header, no body
    Canned(CannedAcl),
    /// `AccessControlPolicy` XML document
    Xml(String),
}

impl AclBody {
    /// # Errors
    ///
    /// Will return `Err` if the policy can not be serialized
    pub fn from_policy(policy: &AccessControlPolicy) -> Result<Self> {
        Ok(Self::Xml(policy.to_xml()?))
    }

    // request body, empty for canned ACLs
    fn body(&self) -> &str {
        match self {
            Self::Canned(_) => "",
            Self::Xml(xml) => xml,
        }
    }

    fn headers(&self) -> Option<BTreeMap<&str, &str>> {
        match self {
            Self::Canned(acl) => {
                let mut map: BTreeMap<&str, &str> = BTreeMap::new();
                map.insert("x-amz-acl", acl.as_str());
                Some(map)
            }
            Self::Xml(_) => None,
        }
    }
}

/// Bucket of the `S3` handle, required by every ACL action
///
/// # Errors
///
/// Will return `Err` if the handle has no bucket
pub fn bucket(s3: &S3) -> Result<&str> {
    s3.bucket()
        .context("bucket name missing, try: <s3 provider>/<bucket name>")
}

// split the key into path segments, remove leading / or //
fn key_path(key: &str) -> Vec<&str> {
    key.split('/').filter(|p| !p.is_empty()).collect()
}

// None when missing or not visible ASCII
fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string)
}

/// Builds the provider error from a non-success response, the body is read to completion
///
/// # Errors
///
/// Will return `Err` if the response body can not be read
pub async fn response_error(
    response: Response,
    bucket: &str,
    key: Option<&str>,
) -> Result<ResponseError> {
    let mut error = ResponseError::new(response.status(), bucket, key);

    error.host_id = header_str(response.headers(), "x-amz-id-2");
    error.request_id = header_str(response.headers(), "x-amz-request-id");

    let body = response.text().await?;

    if let Ok(e) = from_str::<ErrorResponse>(&body) {
        error.code = Some(e.code);
        error.message = Some(e.message);
        if error.request_id.is_none() {
            error.request_id = e.request_id;
        }
        if error.host_id.is_none() {
            error.host_id = e.host_id;
        }
    } else if !body.is_empty() {
        error.body = Some(body);
    }

    log::debug!("{error:#?}");

    Ok(error)
}
