//! gpui HTTP client backed by blocking reqwest.
//!
//! gpui polls `send` futures on its background executor (image assets go
//! through `App::fetch_asset`), so the blocking call runs off the UI thread.

use crate::api::USER_AGENT;
use anyhow::{anyhow, Context, Result};
use gpui::http_client::http::{self, HeaderValue};
use gpui::http_client::{AsyncBody, HttpClient, Inner, Url};
use reqwest::blocking::Client;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

pub struct ImageHttpClient {
    client: Client,
    user_agent: HeaderValue,
}

impl ImageHttpClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("failed to build image HTTP client")?;

        Ok(Self {
            client,
            user_agent: HeaderValue::from_static(USER_AGENT),
        })
    }
}

/// Translates a gpui request into a reqwest one. Streaming bodies are not
/// supported; gpui only issues empty or in-memory bodies for images.
fn to_reqwest(
    client: &Client,
    req: http::Request<AsyncBody>,
) -> Result<reqwest::blocking::Request> {
    let (parts, body) = req.into_parts();

    let method = reqwest::Method::from_bytes(parts.method.as_str().as_bytes())
        .with_context(|| format!("unsupported method {}", parts.method))?;
    let mut builder = client.request(method, parts.uri.to_string());
    for (name, value) in parts.headers.iter() {
        builder = builder.header(name.as_str(), value.as_bytes());
    }

    builder = match body.0 {
        Inner::Empty => builder,
        Inner::Bytes(cursor) => builder.body(cursor.into_inner().to_vec()),
        Inner::AsyncReader(_) => {
            return Err(anyhow!("streaming request bodies are not supported"))
        }
    };

    Ok(builder.build()?)
}

fn from_reqwest(resp: reqwest::blocking::Response) -> Result<http::Response<AsyncBody>> {
    let mut builder = http::Response::builder().status(resp.status().as_u16());
    for (name, value) in resp.headers().iter() {
        builder = builder.header(name.as_str(), value.as_bytes());
    }
    let body = resp.bytes()?.to_vec();
    Ok(builder.body(AsyncBody::from(body))?)
}

impl HttpClient for ImageHttpClient {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn user_agent(&self) -> Option<&HeaderValue> {
        Some(&self.user_agent)
    }

    fn send(
        &self,
        req: http::Request<AsyncBody>,
    ) -> Pin<Box<dyn Future<Output = Result<http::Response<AsyncBody>>> + Send + 'static>> {
        let client = self.client.clone();
        Box::pin(async move {
            let request = to_reqwest(&client, req)?;
            log::debug!("image GET {}", request.url());
            let resp = client.execute(request)?;
            from_reqwest(resp)
        })
    }

    fn proxy(&self) -> Option<&Url> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::builder().build().unwrap()
    }

    #[test]
    fn get_request_keeps_uri_and_headers() {
        let req = http::Request::builder()
            .uri("https://images.example/portraits/69.jpg")
            .header("accept", "image/*")
            .body(AsyncBody::empty())
            .unwrap();

        let mapped = to_reqwest(&client(), req).unwrap();
        assert_eq!(mapped.method(), &reqwest::Method::GET);
        assert_eq!(mapped.url().as_str(), "https://images.example/portraits/69.jpg");
        assert_eq!(mapped.headers()["accept"], "image/*");
        assert!(mapped.body().is_none());
    }

    #[test]
    fn in_memory_body_is_forwarded() {
        let req = http::Request::builder()
            .method(http::Method::POST)
            .uri("http://localhost:9000/upload")
            .body(AsyncBody::from("payload".to_string()))
            .unwrap();

        let mapped = to_reqwest(&client(), req).unwrap();
        assert_eq!(mapped.method(), &reqwest::Method::POST);
        assert_eq!(
            mapped.body().and_then(|body| body.as_bytes()),
            Some(&b"payload"[..])
        );
    }

    #[test]
    fn advertises_user_agent_without_proxy() {
        let client = ImageHttpClient::new(Duration::from_secs(5)).unwrap();
        assert_eq!(client.user_agent().unwrap(), USER_AGENT);
        assert!(client.proxy().is_none());
    }
}
