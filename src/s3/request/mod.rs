use anyhow::Result;
use reqwest::{
    Client, Method, Response,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use std::collections::BTreeMap;
use url::Url;

/// Sends a single signed request, `body` is sent as is, `content-length` is expected to be
/// part of the signed headers.
///
/// # Errors
///
/// Will return `Err` if can not make the request
pub async fn request(
    url: Url,
    method: Method,
    headers: &BTreeMap<String, String>,
    body: Option<String>,
) -> Result<Response> {
    let headers = headers
        .iter()
        .map(|(k, v)| Ok((k.parse::<HeaderName>()?, v.parse::<HeaderValue>()?)))
        .collect::<Result<HeaderMap>>()?;

    log::debug!("{method} {url}");

    let client = Client::builder().build()?;

    let request = client.request(method, url).headers(headers);

    let request = match body {
        Some(body) => request.body(body),
        None => request,
    };

    Ok(request.send().await?)
}
