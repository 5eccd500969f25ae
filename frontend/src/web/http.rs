//! 浏览器端 HTTP 客户端
//!
//! 基于 `gloo-net` 的 fetch 封装，实现核心 crate 的 `HttpClient`。
//! 状态码和 Content-Type 原样交回网关判断。

use gesintvisit::request::{HttpClient, HttpError, HttpRequest, HttpResponse};
use gesintvisit_shared::protocol::HttpMethod;
use gloo_net::http::Request;

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
        };
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| HttpError::RequestBuild(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::Network(e.to_string()))?;

        let status = response.status();
        let content_type = response.headers().get("content-type");
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::Body(e.to_string()))?;

        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}
