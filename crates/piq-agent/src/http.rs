//! Shared HTTP response helpers.

use crate::error::AgentError;

/// Return the response unchanged on success.
///
/// - **429 Too Many Requests** becomes [`AgentError::RateLimited`], honoring
///   `Retry-After` (60 s when absent or unparseable).
/// - Any other non-success status becomes [`AgentError::Api`] carrying the
///   response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, AgentError> {
    if resp.status() == 429 {
        return Err(AgentError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(AgentError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(::http::Response::builder().status(status).body(body).unwrap())
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = check_response(mock_response(200, "{}")).await.unwrap();
        assert_eq!(resp.status(), 200);
    }

    #[tokio::test]
    async fn server_error_carries_body() {
        let err = check_response(mock_response(502, "upstream down")).await.unwrap_err();
        assert!(matches!(err, AgentError::Api { status: 502, ref message } if message == "upstream down"));
    }

    #[tokio::test]
    async fn rate_limit_uses_retry_after() {
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(429)
                .header("Retry-After", "30")
                .body("")
                .unwrap(),
        );
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, AgentError::RateLimited { retry_after_secs: 30 }));
    }

    #[tokio::test]
    async fn rate_limit_defaults_to_sixty_seconds() {
        let err = check_response(mock_response(429, "")).await.unwrap_err();
        assert!(matches!(err, AgentError::RateLimited { retry_after_secs: 60 }));
    }
}
