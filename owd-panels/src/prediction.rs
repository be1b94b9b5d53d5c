//! Prediction form handling.
//!
//! Unlike the read-only panels, every failure here reaches the user: bad
//! input is rejected before any request, a server `error` is shown verbatim,
//! and transport/parse failures get a generic message.

use owd_api::models::{Prediction, PredictionRequest, PredictionResponse};
use owd_api::{ApiConfig, Endpoint, Fetch, TransportError};
use thiserror::Error;

/// Earliest year the model accepts.
pub const MIN_PREDICTION_YEAR: i32 = 2024;

pub const FAILURE_MESSAGE: &str = "Failed to get prediction. Check API connection.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please enter a valid future year (2024 or later) and a positive well count.")]
pub struct ValidationError;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("invalid prediction response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where prediction feedback is shown.
pub trait PredictionView {
    /// Blocking, user-facing message.
    fn alert(&self, message: &str);
    /// Replace the results region with `prediction`.
    fn show_results(&self, prediction: &Prediction);
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Input failed validation; nothing was sent.
    Invalid,
    /// The service answered with an `error` field.
    Rejected(String),
    Displayed(Prediction),
    /// Transport or parse failure.
    Failed,
}

/// Parse and check the raw form inputs.
pub fn validate(year: &str, total_wells: &str) -> Result<PredictionRequest, ValidationError> {
    let year: i32 = year.trim().parse().map_err(|_| ValidationError)?;
    let total_wells: i64 = total_wells.trim().parse().map_err(|_| ValidationError)?;

    if year < MIN_PREDICTION_YEAR || total_wells <= 0 {
        return Err(ValidationError);
    }
    Ok(PredictionRequest { year, total_wells })
}

/// POST `request` and parse whatever body comes back.
///
/// The HTTP status is not checked: the service reports rejected input as an
/// `error` body with a 4xx/5xx status.
pub async fn request_prediction<F>(
    fetch: &F,
    url: &str,
    request: &PredictionRequest,
) -> Result<PredictionResponse, PredictionError>
where
    F: Fetch + ?Sized,
{
    let body = serde_json::to_string(request)?;
    log::debug!("POST request to: {}", url);
    let response = fetch.post_json(url, &body).await?;
    Ok(serde_json::from_str(&response.body)?)
}

/// Handle one form submission end to end.
pub async fn submit_prediction<F, V>(
    fetch: &F,
    view: &V,
    config: &ApiConfig,
    year_input: &str,
    wells_input: &str,
) -> SubmitOutcome
where
    F: Fetch + ?Sized,
    V: PredictionView + ?Sized,
{
    let request = match validate(year_input, wells_input) {
        Ok(request) => request,
        Err(e) => {
            view.alert(&e.to_string());
            return SubmitOutcome::Invalid;
        }
    };

    let url = config.url(Endpoint::PredictWellPerformance);
    match request_prediction(fetch, &url, &request).await {
        Ok(PredictionResponse::Rejected { error }) => {
            log::warn!("Prediction rejected: {}", error);
            view.alert(&format!("Error: {}", error));
            SubmitOutcome::Rejected(error)
        }
        Ok(PredictionResponse::Predicted(prediction)) => {
            view.show_results(&prediction);
            SubmitOutcome::Displayed(prediction)
        }
        Err(e) => {
            log::error!("Error fetching prediction: {}", e);
            view.alert(FAILURE_MESSAGE);
            SubmitOutcome::Failed
        }
    }
}

/// `(label, value)` rows for a results region.
pub fn result_rows(prediction: &Prediction) -> Vec<(&'static str, String)> {
    vec![
        ("Year", prediction.year.to_string()),
        ("Total Wells", prediction.total_wells.to_string()),
        (
            "Predicted Oil Production",
            format!("{} millions of barrels", prediction.predicted_oil_production),
        ),
        (
            "Predicted Gas Production",
            format!("{} millions of barrels", prediction.predicted_gas_production),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use owd_api::testing::ScriptedFetch;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeView {
        alerts: RefCell<Vec<String>>,
        results: RefCell<Option<Prediction>>,
    }

    impl PredictionView for FakeView {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn show_results(&self, prediction: &Prediction) {
            *self.results.borrow_mut() = Some(prediction.clone());
        }
    }

    fn predict_url() -> String {
        ApiConfig::default().url(Endpoint::PredictWellPerformance)
    }

    fn earlier() -> Prediction {
        Prediction {
            year: 2026,
            total_wells: 1,
            predicted_oil_production: 0.5,
            predicted_gas_production: 0.25,
        }
    }

    #[test]
    fn validation_rules() {
        assert_eq!(validate("2023", "100"), Err(ValidationError));
        assert_eq!(validate("2024", "0"), Err(ValidationError));
        assert_eq!(validate("2024", "-3"), Err(ValidationError));
        assert_eq!(validate("", "10"), Err(ValidationError));
        assert_eq!(validate("next year", "10"), Err(ValidationError));
        assert_eq!(
            validate(" 2025 ", "10"),
            Ok(PredictionRequest {
                year: 2025,
                total_wells: 10
            })
        );
        assert_eq!(
            validate("2024", "1"),
            Ok(PredictionRequest {
                year: 2024,
                total_wells: 1
            })
        );
    }

    #[tokio::test]
    async fn invalid_input_never_hits_the_network() {
        let fetch = ScriptedFetch::new();
        let view = FakeView::default();

        let outcome = submit_prediction(&fetch, &view, &ApiConfig::default(), "2023", "50").await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert!(fetch.calls().is_empty());
        assert_eq!(
            view.alerts.borrow().as_slice(),
            ["Please enter a valid future year (2024 or later) and a positive well count."]
        );
    }

    #[tokio::test]
    async fn zero_wells_is_rejected_locally() {
        let fetch = ScriptedFetch::new();
        let view = FakeView::default();

        let outcome = submit_prediction(&fetch, &view, &ApiConfig::default(), "2024", "0").await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert!(fetch.calls().is_empty());
    }

    #[tokio::test]
    async fn valid_input_posts_json_body() {
        let fetch = ScriptedFetch::new();
        fetch.respond(
            &predict_url(),
            200,
            r#"{"year":2025,"total_wells":10,"predicted_oil_production":1.0,"predicted_gas_production":2.0}"#,
        );
        let view = FakeView::default();

        submit_prediction(&fetch, &view, &ApiConfig::default(), "2025", "10").await;

        let calls = fetch.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method, "POST");
        assert_eq!(calls[0].url, predict_url());
        assert_eq!(calls[0].body.as_deref(), Some(r#"{"year":2025,"total_wells":10}"#));
    }

    #[tokio::test]
    async fn server_error_is_alerted_and_results_untouched() {
        let fetch = ScriptedFetch::new();
        fetch.respond(&predict_url(), 500, r#"{"error":"model unavailable"}"#);
        let view = FakeView::default();
        *view.results.borrow_mut() = Some(earlier());

        let outcome = submit_prediction(&fetch, &view, &ApiConfig::default(), "2030", "500").await;

        assert_eq!(outcome, SubmitOutcome::Rejected("model unavailable".to_string()));
        assert_eq!(view.alerts.borrow().as_slice(), ["Error: model unavailable"]);
        assert_eq!(*view.results.borrow(), Some(earlier()));
    }

    #[tokio::test]
    async fn prediction_replaces_previous_results() {
        let fetch = ScriptedFetch::new();
        fetch.respond(
            &predict_url(),
            200,
            r#"{"year":2030,"total_wells":500,"predicted_oil_production":12.3,"predicted_gas_production":4.5}"#,
        );
        let view = FakeView::default();
        *view.results.borrow_mut() = Some(earlier());

        let outcome = submit_prediction(&fetch, &view, &ApiConfig::default(), "2030", "500").await;

        let expected = Prediction {
            year: 2030,
            total_wells: 500,
            predicted_oil_production: 12.3,
            predicted_gas_production: 4.5,
        };
        assert_eq!(outcome, SubmitOutcome::Displayed(expected.clone()));
        assert_eq!(*view.results.borrow(), Some(expected.clone()));
        assert!(view.alerts.borrow().is_empty());

        let rows = result_rows(&expected);
        let values: Vec<&str> = rows.iter().map(|(_, v)| v.as_str()).collect();
        assert_eq!(
            values,
            ["2030", "500", "12.3 millions of barrels", "4.5 millions of barrels"]
        );
    }

    #[tokio::test]
    async fn transport_failure_gets_generic_message() {
        let fetch = ScriptedFetch::new();
        fetch.fail(&predict_url(), "connection refused");
        let view = FakeView::default();

        let outcome = submit_prediction(&fetch, &view, &ApiConfig::default(), "2025", "10").await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(view.alerts.borrow().as_slice(), [FAILURE_MESSAGE]);
        assert!(view.results.borrow().is_none());
    }

    #[tokio::test]
    async fn non_json_body_gets_generic_message() {
        let fetch = ScriptedFetch::new();
        fetch.respond(&predict_url(), 502, "<html>Bad Gateway</html>");
        let view = FakeView::default();

        let outcome = submit_prediction(&fetch, &view, &ApiConfig::default(), "2025", "10").await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(view.alerts.borrow().as_slice(), [FAILURE_MESSAGE]);
    }
}
