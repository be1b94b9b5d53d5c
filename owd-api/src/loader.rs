//! One-shot JSON loader shared by every read-only panel.
//!
//! A load is a single `GET`: no retry, no timeout, no cancellation. Calling
//! it twice for the same endpoint makes two unrelated attempts.

use crate::error::LoadError;
use crate::fetch::Fetch;
use serde::de::DeserializeOwned;

/// GET `url`, reject non-2xx statuses, and parse the body as `T`.
pub async fn fetch_json<T, F>(fetch: &F, url: &str) -> Result<T, LoadError>
where
    T: DeserializeOwned,
    F: Fetch + ?Sized,
{
    log::debug!("GET request to: {}", url);
    let response = fetch.get(url).await?;
    if !response.is_success() {
        return Err(LoadError::HttpStatus(response.status));
    }
    Ok(serde_json::from_str(&response.body)?)
}

/// GET `url` and hand the parsed payload to `on_success`.
///
/// Failures are written to the log and go no further. `on_success` runs at
/// most once, straight after the response is parsed. Returns whether it ran.
pub async fn load<T, F, C>(fetch: &F, url: &str, on_success: C) -> bool
where
    T: DeserializeOwned,
    F: Fetch + ?Sized,
    C: FnOnce(T),
{
    match fetch_json::<T, F>(fetch, url).await {
        Ok(payload) => {
            log::debug!("GET {} - Success", url);
            on_success(payload);
            true
        }
        Err(e) => {
            log::error!("Error loading data from {}: {}", url, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrendPoint;
    use crate::testing::ScriptedFetch;

    const URL: &str = "http://127.0.0.1:5000/api/trends";

    #[tokio::test]
    async fn delivers_payload_once() {
        let fetch = ScriptedFetch::new();
        fetch.respond(URL, 200, r#"[{"year": 2020, "total_oil_production": 1.5}]"#);

        let mut delivered = Vec::new();
        let ran = load(&fetch, URL, |points: Vec<TrendPoint>| delivered.push(points)).await;

        assert!(ran);
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0][0].year, 2020);
        assert_eq!(fetch.call_count(URL), 1);
    }

    #[tokio::test]
    async fn bad_status_is_reported_with_code() {
        let fetch = ScriptedFetch::new();
        fetch.respond(URL, 500, r#"{"error": "db down"}"#);

        let result = fetch_json::<Vec<TrendPoint>, _>(&fetch, URL).await;
        assert!(matches!(result, Err(LoadError::HttpStatus(500))));
    }

    #[tokio::test]
    async fn bad_status_skips_continuation_without_retry() {
        let fetch = ScriptedFetch::new();
        fetch.respond(URL, 404, "not found");

        let mut called = false;
        let ran = load(&fetch, URL, |_: Vec<TrendPoint>| called = true).await;

        assert!(!ran);
        assert!(!called);
        assert_eq!(fetch.call_count(URL), 1);
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() {
        let fetch = ScriptedFetch::new();
        fetch.respond(URL, 200, "<html>oops</html>");

        let result = fetch_json::<Vec<TrendPoint>, _>(&fetch, URL).await;
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[tokio::test]
    async fn non_sequence_payload_is_a_parse_error() {
        let fetch = ScriptedFetch::new();
        fetch.respond(URL, 200, r#"{"error": "something"}"#);

        let mut called = false;
        let ran = load(&fetch, URL, |_: Vec<TrendPoint>| called = true).await;
        assert!(!ran);
        assert!(!called);
    }

    #[tokio::test]
    async fn transport_failure_is_recovered() {
        let fetch = ScriptedFetch::new();
        fetch.fail(URL, "connection refused");

        let result = fetch_json::<Vec<TrendPoint>, _>(&fetch, URL).await;
        match result {
            Err(LoadError::Transport(e)) => assert_eq!(e.to_string(), "connection refused"),
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn repeated_loads_are_independent_attempts() {
        let fetch = ScriptedFetch::new();
        fetch
            .respond(URL, 503, "")
            .respond(URL, 200, r#"[{"year": 2021, "total_oil_production": 2}]"#);

        let first = load(&fetch, URL, |_: Vec<TrendPoint>| {}).await;
        let second = load(&fetch, URL, |_: Vec<TrendPoint>| {}).await;

        assert!(!first);
        assert!(second);
        assert_eq!(fetch.call_count(URL), 2);
    }
}
