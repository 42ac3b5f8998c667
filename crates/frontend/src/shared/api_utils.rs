//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.
//! Every helper returns [`FetchError`] so screens translate failures the same way.

use super::config::{config, resolve_base_url, BACKEND_PORT};
use super::error::{backend_message, FetchError};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// # Returns
/// - the configured base URL, or one derived from the current window location
///   like "http://localhost:3000"
/// - Empty string if neither is available
pub fn api_base() -> String {
    resolve_base_url(
        option_env!("RESTO_API_BASE_URL"),
        &config().api.base_url,
        location_base,
    )
}

fn location_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/dashboard-stats/42");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Path with one identifier segment, e.g. `/restaurants/{id}`.
///
/// An empty identifier is an input error: the request is never issued.
pub fn id_path(prefix: &str, id: &str) -> Result<String, FetchError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(FetchError::MissingParameter("id"));
    }
    Ok(format!("{}/{}", prefix, urlencoding::encode(id)))
}

/// Path with a serialized query string
pub fn query_path<Q: Serialize>(path: &str, query: &Q) -> Result<String, FetchError> {
    let qs = serde_qs::to_string(query).map_err(|e| FetchError::Decode(e.to_string()))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

async fn check(response: Response) -> Result<Response, FetchError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(FetchError::Status {
        status,
        message: backend_message(&body),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    decode(check(response).await?).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, FetchError> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| FetchError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    decode(check(response).await?).await
}

/// PUT that ignores the response body
pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), FetchError> {
    let response = Request::put(&api_url(path))
        .json(body)
        .map_err(|e| FetchError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    check(response).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), FetchError> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    check(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d101_sales_report::ReportQuery;

    #[test]
    fn test_id_path_encodes_segment() {
        assert_eq!(id_path("/orders", "a b").unwrap(), "/orders/a%20b");
    }

    #[test]
    fn test_id_path_rejects_blank() {
        assert_eq!(
            id_path("/dashboard-stats", "  "),
            Err(FetchError::MissingParameter("id"))
        );
    }

    #[test]
    fn test_report_query_string() {
        let q = ReportQuery::for_restaurant("r7");
        assert_eq!(query_path("/reports/graph", &q).unwrap(), "/reports/graph?resId=r7");

        let q = ReportQuery::for_restaurant("r7")
            .with_range(Some("2024-01-01".into()), Some("2024-03-31".into()));
        assert_eq!(
            query_path("/reports/graph", &q).unwrap(),
            "/reports/graph?resId=r7&from=2024-01-01&to=2024-03-31"
        );
    }
}
