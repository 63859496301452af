//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `MovieClient::build_*` produces an
//! `HttpRequest`; whoever owns the network (a `Transport`, a test harness,
//! a browser shim) executes it and hands back an `HttpResponse` for
//! `MovieClient::parse_*`.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Target of a request: the whole collection or one record in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Collection,
    Item(String),
}

impl Endpoint {
    /// Absolute URL of this endpoint under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        match self {
            Endpoint::Collection => format!("{base_url}/api/movies"),
            Endpoint::Item(id) => format!("{base_url}/api/movies/{id}"),
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Only produced once the exchange has fully completed; there are no
/// partial or intermediate responses.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
