//! Page fetching.
//!
//! One GET per source document. The client carries the User-Agent and the
//! request deadline (see `initialization::init_client`); anything other than a
//! 200 response is an error. There are no retries.

use log::{debug, info};

use crate::config::HTTP_STATUS_OK;
use crate::error_handling::FetchError;

/// Fetches `url` and returns the full response body.
///
/// The response (and its connection) is released when this function returns,
/// whether the body was read or an error occurred.
///
/// # Errors
///
/// - `FetchError::Network` if the request or body read fails (including timeouts)
/// - `FetchError::UnexpectedStatus` if the server does not answer 200
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, FetchError> {
    info!("Fetching {}", url);

    let network = |source| FetchError::Network {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(network)?;

    let status = response.status().as_u16();
    if status != HTTP_STATUS_OK {
        return Err(FetchError::UnexpectedStatus {
            url: url.to_string(),
            status,
        });
    }

    let body = response.bytes().await.map_err(network)?;
    debug!("Fetched {} bytes from {}", body.len(), url);

    Ok(body.to_vec())
}
