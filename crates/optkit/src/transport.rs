use std::future::Future;

use optkit_core::{Error, RawResponse};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// The HTTP client `fetch_with_option` sends through.
///
/// `headers` arrive already merged and `method` already normalised. A failure
/// to reach the server, or to read the body, is an `Err`; any status code
/// that came back is a successful exchange.
pub trait Transport {
    fn send(
        &self,
        method: &str,
        url: &str,
        headers: &[(String, String)],
        body: Option<&str>,
    ) -> impl Future<Output = Result<RawResponse, Error>> + Send;
}

impl Transport for reqwest::Client {
    fn send(
        &self,
        method: &str,
        url: &str,
        headers: &[(String, String)],
        body: Option<&str>,
    ) -> impl Future<Output = Result<RawResponse, Error>> + Send {
        let request = build_request(self, method, url, headers, body);

        async move {
            let response = request?
                .send()
                .await
                .map_err(|e| Error::Transport(e.to_string()))?;

            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|e| Error::Transport(e.to_string()))?;

            Ok::<_, Error>(RawResponse {
                status,
                body: body.to_vec(),
            })
        }
    }
}

fn build_request(
    client: &reqwest::Client,
    method: &str,
    url: &str,
    headers: &[(String, String)],
    body: Option<&str>,
) -> Result<reqwest::RequestBuilder, Error> {
    let method = reqwest::Method::from_bytes(method.as_bytes())
        .map_err(|e| Error::Transport(format!("Invalid method {method}: {e}")))?;

    let mut header_map = HeaderMap::new();
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::InvalidHeader(format!("{name}: {e}")))?;
        let header_value =
            HeaderValue::from_str(value).map_err(|e| Error::InvalidHeader(format!("{name}: {e}")))?;
        header_map.insert(header_name, header_value);
    }

    let mut builder = client.request(method, url).headers(header_map);
    if let Some(body) = body {
        builder = builder.body(body.to_string());
    }

    Ok(builder)
}
