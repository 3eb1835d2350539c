//! Shared HTTP response helpers for the catalog client.
//!
//! Centralizes status-code checks (404 → [`ClientError::NotFound`] for
//! single-record reads, other non-success → [`ClientError::Api`]) so the
//! catalog methods stay focused on request construction.

use crate::error::ClientError;

/// Check an HTTP response for non-success status codes.
///
/// Returns the response unchanged on success, otherwise
/// [`ClientError::Api`] with the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if !resp.status().is_success() {
        return Err(ClientError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Like [`check_response`], but maps 404 to [`ClientError::NotFound`] for `entity`/`id`.
pub async fn check_found(
    resp: reqwest::Response,
    entity: &str,
    id: &str,
) -> Result<reqwest::Response, ClientError> {
    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(ClientError::not_found(entity, id));
    }
    check_response(resp).await
}

/// Decode a JSON body, reporting the target type on failure.
pub async fn decode<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let body = resp.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| {
        ClientError::Parse(format!(
            "expected {}: {e}",
            std::any::type_name::<T>().rsplit("::").next().unwrap_or("value")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_body() {
        let resp = mock_response(500, "database offline");
        let err = check_response(resp).await.unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "database offline");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "[]");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_found_maps_404() {
        let resp = mock_response(404, "");
        let err = check_found(resp, "lecture", "12").await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::NotFound { ref entity, ref id } if entity == "lecture" && id == "12"
        ));
    }

    #[tokio::test]
    async fn check_found_passes_other_errors_through() {
        let resp = mock_response(403, "forbidden");
        let err = check_found(resp, "lecture", "12").await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 403, .. }));
    }

    #[tokio::test]
    async fn decode_reports_parse_errors() {
        let resp = mock_response(200, "{\"not\": \"a list\"}");
        let err = decode::<Vec<u64>>(resp).await.unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }
}
