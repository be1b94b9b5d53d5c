//! Prediction form and results region.

use crate::components::LoadingSpinner;
use crate::fetch::BrowserFetch;
use crate::panels::AlertPredictionView;
use crate::state::DashboardState;
use dioxus::prelude::*;
use owd_api::ApiConfig;
use owd_panels::dom;
use owd_panels::prediction::{result_rows, submit_prediction, MIN_PREDICTION_YEAR};

#[component]
pub fn PredictionPanel() -> Element {
    let state = use_context::<DashboardState>();
    let config = use_context::<ApiConfig>();
    let mut year = use_signal(String::new);
    let mut wells = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let config = config.clone();
        let year_input = year();
        let wells_input = wells();
        let view = AlertPredictionView::new(state.prediction);
        let mut predicting = state.predicting;

        spawn(async move {
            predicting.set(true);
            let outcome =
                submit_prediction(&BrowserFetch, &view, &config, &year_input, &wells_input).await;
            predicting.set(false);
            log::debug!("Prediction submission finished: {:?}", outcome);
        });
    };

    let min_year = MIN_PREDICTION_YEAR.to_string();

    rsx! {
        div {
            form {
                id: dom::PREDICTION_FORM,
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
                onsubmit: on_submit,
                label {
                    r#for: dom::YEAR_INPUT,
                    style: "font-weight: bold;",
                    "Year: "
                }
                input {
                    id: dom::YEAR_INPUT,
                    r#type: "number",
                    min: "{min_year}",
                    value: "{year}",
                    oninput: move |evt: FormEvent| year.set(evt.value()),
                }
                label {
                    r#for: dom::WELLS_INPUT,
                    style: "font-weight: bold;",
                    "Total Wells: "
                }
                input {
                    id: dom::WELLS_INPUT,
                    r#type: "number",
                    min: "1",
                    value: "{wells}",
                    oninput: move |evt: FormEvent| wells.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: (state.predicting)(),
                    "Predict"
                }
            }

            if (state.predicting)() {
                LoadingSpinner { message: "Requesting prediction...".to_string() }
            }

            div {
                id: dom::PREDICTION_RESULTS,
                style: "margin-top: 12px;",
                if let Some(prediction) = (state.prediction)() {
                    h4 { "Prediction Results" }
                    for (label, value) in result_rows(&prediction) {
                        p {
                            strong { "{label}:" }
                            " {value}"
                        }
                    }
                }
            }
        }
    }
}
