//! HTTP chat transport.
//!
//! History is a plain GET through gloo-net. The streaming send goes through
//! `fetch()` directly so the response body can be consumed incrementally
//! with a `ReadableStreamDefaultReader` — one read await at a time, decoded
//! as UTF-8 with a streaming `TextDecoder` so multi-byte sequences split
//! across chunks survive.

use std::pin::Pin;
use async_trait::async_trait;
use futures::channel::mpsc;
use futures::Stream;
use gloo_net::http::Request;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use widget_core::ports::{ChatTransport, StreamEvent};
use widget_core::sse::SseDecoder;
use widget_types::{
    config::WidgetConfig,
    entry::Entry,
    wire::{HistoryResponse, StreamRequest},
    Result, WidgetError,
};

pub struct HttpChatTransport {
    config: WidgetConfig,
}

impl HttpChatTransport {
    pub fn new(config: WidgetConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl ChatTransport for HttpChatTransport {
    async fn fetch_history(&self, session_id: &str) -> Result<Vec<Entry>> {
        let url = self.config.history_url(session_id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| WidgetError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(WidgetError::Status { status, body });
        }

        let body: HistoryResponse = response
            .json()
            .await
            .map_err(|e| WidgetError::Serialization(e.to_string()))?;

        Ok(body.into_entries())
    }

    fn stream_chat(&self, req: StreamRequest) -> Pin<Box<dyn Stream<Item = StreamEvent>>> {
        let url = self.config.stream_url();
        let (tx, rx) = mpsc::unbounded();

        wasm_bindgen_futures::spawn_local(async move {
            match run_stream(&url, req, &tx).await {
                Ok(()) => {
                    let _ = tx.unbounded_send(StreamEvent::Done);
                }
                Err(e) => {
                    let _ = tx.unbounded_send(StreamEvent::Error(e.to_string()));
                }
            }
        });

        Box::pin(rx)
    }
}

/// POST the draft and pump decoded deltas into `tx` until end-of-stream.
async fn run_stream(
    url: &str,
    req: StreamRequest,
    tx: &mpsc::UnboundedSender<StreamEvent>,
) -> Result<()> {
    let body = serde_json::to_string(&req)?;

    let headers = web_sys::Headers::new().map_err(js_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_headers(headers.as_ref());
    init.set_body(&JsValue::from_str(&body));

    let request =
        web_sys::Request::new_with_str_and_init(url, &init).map_err(js_error)?;

    let window = web_sys::window()
        .ok_or_else(|| WidgetError::JsInterop("no window object".to_string()))?;

    let response: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(net_error)?
        .dyn_into()
        .map_err(|_| WidgetError::JsInterop("fetch did not return a Response".to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = match response.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        return Err(WidgetError::Status { status, body });
    }

    let body_stream = response
        .body()
        .ok_or_else(|| WidgetError::Network("response has no body".to_string()))?;
    let reader: web_sys::ReadableStreamDefaultReader = body_stream
        .get_reader()
        .dyn_into()
        .map_err(|_| WidgetError::JsInterop("unexpected reader type".to_string()))?;

    let text_decoder = web_sys::TextDecoder::new().map_err(js_error)?;
    let mut decoder = SseDecoder::new();

    // Sequential suspend/resume loop: one read in flight at a time.
    loop {
        let chunk = JsFuture::from(reader.read()).await.map_err(net_error)?;

        let done = js_sys::Reflect::get(&chunk, &JsValue::from_str("done"))
            .map_err(js_error)?
            .as_bool()
            .unwrap_or(true);
        if done {
            break;
        }

        let value =
            js_sys::Reflect::get(&chunk, &JsValue::from_str("value")).map_err(js_error)?;
        let mut bytes = js_sys::Uint8Array::new(&value).to_vec();

        let options = web_sys::TextDecodeOptions::new();
        options.set_stream(true);
        let text = text_decoder
            .decode_with_u8_array_and_options(&mut bytes, &options)
            .map_err(js_error)?;

        for frame in decoder.push(&text) {
            if let Some(delta) = frame.incremental_text() {
                let _ = tx.unbounded_send(StreamEvent::Delta(delta.to_string()));
            }
        }
    }

    if let Some(frame) = decoder.finish() {
        if let Some(delta) = frame.incremental_text() {
            let _ = tx.unbounded_send(StreamEvent::Delta(delta.to_string()));
        }
    }

    Ok(())
}

fn js_error(e: JsValue) -> WidgetError {
    WidgetError::JsInterop(format!("{:?}", e))
}

fn net_error(e: JsValue) -> WidgetError {
    WidgetError::Network(format!("{:?}", e))
}
