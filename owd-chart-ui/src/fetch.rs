//! `window.fetch` implementation of [`Fetch`].

use async_trait::async_trait;
use owd_api::{Fetch, RawResponse, TransportError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Browser transport. Stateless; every call is a fresh `fetch()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFetch;

fn js_error(value: JsValue) -> TransportError {
    TransportError::new(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

async fn send(url: &str, method: &str, json_body: Option<&str>) -> Result<RawResponse, TransportError> {
    let window = web_sys::window().ok_or_else(|| TransportError::new("no global window"))?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = json_body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    if json_body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response_value.dyn_into().map_err(js_error)?;

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    Ok(RawResponse {
        status: response.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

#[async_trait(?Send)]
impl Fetch for BrowserFetch {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        send(url, "GET", None).await
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<RawResponse, TransportError> {
        send(url, "POST", Some(body)).await
    }
}
