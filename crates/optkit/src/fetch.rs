use optkit_core::http::{interpret_response, merged_headers, request_method};
use optkit_core::{Error, HttpRequest, Maybe};
use serde::de::DeserializeOwned;

use crate::transport::Transport;

/// Perform `request` and decode the JSON body.
///
/// A transport failure, a status outside 2xx, or a body that does not parse
/// as `T` all come back as `None`; which one happened is not observable.
pub async fn fetch_with_option<T, C>(transport: &C, request: &HttpRequest) -> Maybe<T>
where
    T: DeserializeOwned,
    C: Transport,
{
    fetch(transport, request).await.ok().into()
}

/// [`fetch_with_option`] over a default `reqwest::Client`.
pub async fn fetch_with_option_default<T: DeserializeOwned>(request: &HttpRequest) -> Maybe<T> {
    fetch_with_option(&reqwest::Client::new(), request).await
}

async fn fetch<T, C>(transport: &C, request: &HttpRequest) -> Result<T, Error>
where
    T: DeserializeOwned,
    C: Transport,
{
    let headers = merged_headers(request);
    let method = request_method(request);

    let response = transport
        .send(&method, &request.url, &headers, request.body.as_deref())
        .await?;

    interpret_response(&response)
}
