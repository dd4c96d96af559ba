//! HTTP Product API
//!
//! `window.fetch` bindings for the REST product collection.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::ProductApi;
use crate::config::ApiConfig;
use crate::error::{check_status, ApiError, ApiResult};
use crate::models::{Draft, Product, ProductId};

#[derive(Debug, Clone)]
pub struct HttpProductApi {
    config: ApiConfig,
}

impl HttpProductApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

/// Readable text for a rejected promise or failed binding call
fn describe(err: JsValue) -> String {
    match err.dyn_ref::<js_sys::Error>() {
        Some(e) => String::from(e.message()),
        None => format!("{err:?}"),
    }
}

fn transport(err: JsValue) -> ApiError {
    ApiError::Transport(describe(err))
}

/// Send one request and fail on any non-2xx status
async fn send(method: &str, url: &str, body: Option<String>) -> ApiResult<Response> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(transport)?;
    if body.is_some() {
        headers.set("Content-Type", "application/json").map_err(transport)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    log::debug!("{} {} -> {}", method, url, resp.status());
    check_status(resp.status())?;
    Ok(resp)
}

async fn read_text(resp: &Response) -> ApiResult<String> {
    let text = JsFuture::from(resp.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    text.as_string()
        .ok_or_else(|| ApiError::Decode("body is not text".to_string()))
}

fn encode(draft: &Draft) -> ApiResult<String> {
    serde_json::to_string(draft)
        .map_err(|e| ApiError::Transport(format!("could not encode request body: {e}")))
}

#[async_trait(?Send)]
impl ProductApi for HttpProductApi {
    async fn list(&self) -> ApiResult<Vec<Product>> {
        let resp = send("GET", &self.config.collection_url(), None).await?;
        let text = read_text(&resp).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create(&self, draft: &Draft) -> ApiResult<()> {
        let body = encode(draft)?;
        send("POST", &self.config.collection_url(), Some(body)).await?;
        Ok(())
    }

    async fn update(&self, id: &ProductId, draft: &Draft) -> ApiResult<()> {
        let body = encode(draft)?;
        send("PUT", &self.config.item_url(id), Some(body)).await?;
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> ApiResult<()> {
        send("DELETE", &self.config.item_url(id), None).await?;
        Ok(())
    }
}
