//! Platform-abstracted HTTP client with Send-safe futures.
//!
//! On WASM, `reqwest::Response` is not `Send` because it wraps JS values. To keep
//! gateway futures `Send` on every target:
//! - On **native**: reqwest is awaited directly.
//! - On **WASM**: the request runs on the JS thread via
//!   `wasm_bindgen_futures::spawn_local` and the result comes back through a
//!   `flume` channel.
//!
//! Responses are reduced to a plain [`Response`] (status, lowercased headers,
//! body bytes) before they leave this module.

use std::collections::HashMap;

use log::debug;
use serde::Deserialize;

use crate::BusinessConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A response that holds only Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    /// Lowercased header names.
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.clone())
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// The `message` field of a JSON error body, if there is one.
    pub fn error_message(&self) -> Option<String> {
        self.json::<ErrorBody>()
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("failed to build HTTP client: {0}")]
    Build(String),
    #[error("failed to encode request body: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request cancelled")]
    Cancelled,
}

pub type HttpResult<T> = Result<T, HttpError>;

/// HTTP client bound to one base address.
#[derive(Debug, Clone)]
pub struct Client {
    inner: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(config: &BusinessConfig) -> HttpResult<Self> {
        Ok(Self {
            inner: build_inner(config)?,
            base_url: config.api_url().as_str().to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::Get, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::Post, path)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::Put, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::Delete, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        RequestBuilder {
            client: self.inner.clone(),
            method,
            url: format!("{}{path}", self.base_url),
            headers: HashMap::new(),
            query: Vec::new(),
            body: None,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_inner(config: &BusinessConfig) -> HttpResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| HttpError::Build(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn build_inner(_config: &BusinessConfig) -> HttpResult<reqwest::Client> {
    Ok(reqwest::Client::new())
}

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    client: reqwest::Client,
    method: Method,
    url: String,
    headers: HashMap<String, String>,
    query: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Sets a JSON body and the matching content type.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> HttpResult<Self> {
        let bytes = serde_json::to_vec(value).map_err(|e| HttpError::Encode(e.to_string()))?;
        self.body = Some(bytes);
        self.headers
            .insert("content-type".to_owned(), "application/json".to_owned());
        Ok(self)
    }

    pub async fn send(self) -> HttpResult<Response> {
        debug!("{} {}", self.method.as_str(), self.url);

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.execute().await
        }

        #[cfg(target_arch = "wasm32")]
        {
            let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);
            wasm_bindgen_futures::spawn_local(async move {
                let result = self.execute().await;
                // Receiver may be gone if the caller stopped waiting.
                let _ = tx.send_async(result).await;
            });
            rx.recv_async().await.map_err(|_| HttpError::Cancelled)?
        }
    }

    async fn execute(self) -> HttpResult<Response> {
        let mut request = match self.method {
            Method::Get => self.client.get(&self.url),
            Method::Post => self.client.post(&self.url),
            Method::Put => self.client.put(&self.url),
            Method::Delete => self.client.delete(&self.url),
        };

        if !self.query.is_empty() {
            request = request.query(&self.query);
        }
        for (name, value) in &self.headers {
            request = request.header(name, value);
        }
        if let Some(body) = self.body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_lowercase(), v.to_owned()))
            })
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?
            .to_vec();

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}
