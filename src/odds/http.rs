use reqwest::{header::HeaderMap, Client};

use crate::Result;

/// Fetch the raw snapshot document from `url`.
///
/// The body is returned as text so it can be cached verbatim.
pub async fn fetch_snapshot(
    client: &Client,
    url: &str,
    headers: Option<HeaderMap>,
) -> Result<String> {
    let mut request = client.get(url);
    if let Some(headers) = headers {
        request = request.headers(headers);
    }

    let body = request
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(body)
}
