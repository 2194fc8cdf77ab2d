use http::StatusCode;
use serde::Deserialize;

/// S3 error document returned with non-success responses
/// <https://docs.aws.amazon.com/AmazonS3/latest/API/ErrorResponses.html>
#[derive(Deserialize, Debug)]
pub struct ErrorResponse {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Resource")]
    pub resource: Option<String>,
    #[serde(rename = "RequestId")]
    pub request_id: Option<String>,
    #[serde(rename = "HostId")]
    pub host_id: Option<String>,
}

/// Error returned by the provider for a bucket or object request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "HTTP Status Code: {status}, Bucket: {bucket}, Key: {}, Code: {}, Message: {}",
    or_none(.key.as_deref()),
    or_none(.code.as_deref()),
    or_none(message_or_body(.message, .body))
)]
pub struct ResponseError {
    pub status: StatusCode,
    pub bucket: String,
    pub key: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
    pub request_id: Option<String>,
    // x-amz-id-2
    pub host_id: Option<String>,
    // raw body when it is not an S3 error document
    pub body: Option<String>,
}

impl ResponseError {
    #[must_use]
    pub fn new(status: StatusCode, bucket: &str, key: Option<&str>) -> Self {
        Self {
            status,
            bucket: bucket.to_string(),
            key: key.map(ToString::to_string),
            code: None,
            message: None,
            request_id: None,
            host_id: None,
            body: None,
        }
    }
}

fn message_or_body<'a>(message: &'a Option<String>, body: &'a Option<String>) -> Option<&'a str> {
    message.as_deref().or(body.as_deref())
}

fn or_none(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}
