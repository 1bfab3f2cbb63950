//! Generic HTTP request handling
//!
//! Sending, logging, status mapping and JSON parsing shared by every
//! [`HttpAdminApi`](crate::HttpAdminApi) endpoint. Endpoints build their own
//! `RequestBuilder` and hand it over here.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the body of a successful response.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, query)
    /// * `method_name` - request method name, for logs
    /// * `resource` - resource path such as `user/7`, for logs and `NotFound` errors
    ///
    /// # Returns
    /// * `Ok(body)` for 2xx responses
    /// * `Err(ClientError)` mapped from transport failures or the status code
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        resource: &str,
    ) -> Result<String> {
        log::debug!("{method_name} {resource}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ClientError::Network {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("{method_name} {resource} -> {status_code}");

        let body = response.text().await.map_err(|e| ClientError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&body));

        Self::check_status(status_code, body, resource)
    }

    /// Map a status code to either the body or a typed error.
    pub fn check_status(status_code: u16, body: String, resource: &str) -> Result<String> {
        match status_code {
            200..=299 => Ok(body),
            401 | 403 => {
                log::warn!("Unauthorized (HTTP {status_code}) for {resource}");
                Err(ClientError::Unauthorized {
                    raw_message: error_message(&body),
                })
            }
            404 => Err(ClientError::NotFound {
                resource: resource.to_string(),
                raw_message: error_message(&body),
            }),
            _ => {
                log::error!(
                    "Unexpected HTTP {status_code} for {resource}: {}",
                    truncate_for_log(&body)
                );
                Err(ClientError::Http {
                    status: status_code,
                    body,
                })
            }
        }
    }

    /// Parse JSON response
    pub fn parse_json<T>(response_text: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ClientError::Parse {
                detail: e.to_string(),
            }
        })
    }
}

/// The service reports failures as `{ "message": ... }` or `{ "error": ... }`.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_passes_body_through() {
        let body = HttpUtils::check_status(200, "{}".to_string(), "user").unwrap();
        assert_eq!(body, "{}");
    }

    #[test]
    fn unauthorized_statuses() {
        for status in [401, 403] {
            let err = HttpUtils::check_status(
                status,
                r#"{"error":"Unauthorized"}"#.to_string(),
                "user",
            )
            .unwrap_err();
            assert_eq!(
                err,
                ClientError::Unauthorized {
                    raw_message: Some("Unauthorized".to_string())
                }
            );
        }
    }

    #[test]
    fn not_found_keeps_resource() {
        let err = HttpUtils::check_status(404, "not json".to_string(), "user/3").unwrap_err();
        assert_eq!(
            err,
            ClientError::NotFound {
                resource: "user/3".to_string(),
                raw_message: None
            }
        );
    }

    #[test]
    fn other_status_is_http_error() {
        let err = HttpUtils::check_status(500, "boom".to_string(), "franchise").unwrap_err();
        assert!(err.is_transient());
        assert!(matches!(err, ClientError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_error_is_typed() {
        let err = HttpUtils::parse_json::<serde_json::Value>("{oops").unwrap_err();
        assert!(matches!(err, ClientError::Parse { .. }));
    }
}
