#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use stockx_client::transport::{BoxError, HttpClient, HttpRequest, HttpResponse};

type Reply = Result<HttpResponse, BoxError>;

/// Transport double answering requests from a queue and recording them.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<HttpRequest>>,
    proxy: Mutex<String>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: StatusCode, body: &str) -> Self {
        self.replies.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.as_bytes().to_vec(),
        }));
        self
    }

    pub fn ok(self, body: &str) -> Self {
        self.reply(StatusCode::OK, body)
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies.lock().unwrap().push_back(Err(message.to_string().into()));
        self
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|request| request.url.clone())
            .collect()
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        self.requests.lock().unwrap().push(request);
        // suspend once so joined callers overlap inside the request
        tokio::task::yield_now().await;
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted reply left".into()))
    }

    fn set_proxy(&self, proxy_url: &str) -> Result<(), BoxError> {
        if !proxy_url.is_empty() && !proxy_url.contains("://") {
            return Err(format!("invalid proxy url {proxy_url}").into());
        }
        *self.proxy.lock().unwrap() = proxy_url.to_string();
        Ok(())
    }

    fn proxy(&self) -> String {
        self.proxy.lock().unwrap().clone()
    }
}

pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {path}: {e}"))
}
