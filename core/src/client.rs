//! Request builder, response classifier and async operations for the movie
//! API.
//!
//! # Design
//! `MovieClient` holds only configuration and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The async methods glue the two together over a
//! caller-supplied `Transport`, one exchange per call.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{Endpoint, HttpMethod, HttpRequest, HttpResponse};
use crate::outcome::{classify_response, Outcome, StatusCheck, MSG_CREATED, MSG_UPDATED};
use crate::transport::Transport;
use crate::types::MovieRecord;

const CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Outcome message for a successful delete. The UI reloads instead of
/// showing it.
pub const MSG_DELETED: &str = "Se ha eliminado la pelicula";

#[derive(Debug, Clone)]
pub struct MovieClient {
    base_url: String,
    status_check: StatusCheck,
    legacy_cors_header: bool,
}

impl MovieClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            status_check: StatusCheck::Strict,
            legacy_cors_header: false,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            status_check: config.status_check,
            legacy_cors_header: config.legacy_cors_header,
            ..Self::new(&config.base_url)
        }
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![("content-type".to_string(), CONTENT_TYPE.to_string())];
        if self.legacy_cors_header {
            headers.push(("access-control-allow-origin".to_string(), "*".to_string()));
        }
        headers
    }

    /// Build a request for any method and endpoint.
    ///
    /// Without a payload the body is `{}`, except for GET which never
    /// carries one.
    pub fn build_request(
        &self,
        method: HttpMethod,
        endpoint: &Endpoint,
        payload: Option<&MovieRecord>,
    ) -> Result<HttpRequest, ApiError> {
        let body = match (payload, method) {
            (Some(record), _) => Some(
                serde_json::to_string(record)
                    .map_err(|e| ApiError::SerializationError(e.to_string()))?,
            ),
            (None, HttpMethod::Get) => None,
            (None, _) => Some("{}".to_string()),
        };
        Ok(HttpRequest {
            method,
            path: endpoint.url(&self.base_url),
            headers: self.headers(),
            body,
        })
    }

    pub fn build_list_movies(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: Endpoint::Collection.url(&self.base_url),
            headers: self.headers(),
            body: None,
        }
    }

    pub fn build_create_movie(&self, record: &MovieRecord) -> Result<HttpRequest, ApiError> {
        self.build_request(HttpMethod::Post, &Endpoint::Collection, Some(record))
    }

    pub fn build_update_movie(&self, id: &str, record: &MovieRecord) -> Result<HttpRequest, ApiError> {
        self.build_request(HttpMethod::Patch, &Endpoint::Item(id.to_string()), Some(record))
    }

    pub fn build_delete_movie(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: Endpoint::Item(id.to_string()).url(&self.base_url),
            headers: self.headers(),
            body: Some("{}".to_string()),
        }
    }

    /// List succeeds only on exactly 200 with a JSON array of records.
    pub fn parse_list_movies(&self, response: HttpResponse) -> Result<Vec<MovieRecord>, ApiError> {
        if response.status != 200 {
            return Err(ApiError::HttpError {
                status: response.status,
                body: response.body,
            });
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Classify a create or update response.
    ///
    /// The body must be JSON (an empty body reads as `{}`); anything else is
    /// a generic error whatever the status.
    pub fn parse_write(&self, response: &HttpResponse, success_message: &str) -> Outcome {
        let body = if response.body.trim().is_empty() {
            Value::Object(Default::default())
        } else {
            match serde_json::from_str::<Value>(&response.body) {
                Ok(body) => body,
                Err(e) => {
                    warn!(status = response.status, error = %e, "unreadable response body");
                    return Outcome::GenericError;
                }
            }
        };
        let outcome = classify_response(response.status, Some(&body), success_message, self.status_check);
        debug!(status = response.status, ?outcome, "write classified");
        outcome
    }

    /// Classify a delete response. The body is only consulted for an
    /// `errorCode`, so empty or malformed bodies are fine.
    pub fn parse_delete(&self, response: &HttpResponse) -> Outcome {
        let body = serde_json::from_str::<Value>(&response.body).ok();
        let outcome = classify_response(response.status, body.as_ref(), MSG_DELETED, self.status_check);
        debug!(status = response.status, ?outcome, "delete classified");
        outcome
    }

    /// Perform exactly one request and resolve when it has completed.
    /// `create_movie`, `update_movie` and `delete_movie` turn the result
    /// into an `Outcome`.
    pub async fn submit<T: Transport + ?Sized>(
        &self,
        transport: &T,
        method: HttpMethod,
        endpoint: &Endpoint,
        payload: Option<&MovieRecord>,
    ) -> Result<HttpResponse, ApiError> {
        let request = self.build_request(method, endpoint, payload)?;
        debug!(method = method.as_str(), path = %request.path, "sending request");
        let response = transport.send(request).await?;
        debug!(method = method.as_str(), status = response.status, "request complete");
        Ok(response)
    }

    /// Fetch every record. The result is consumed once, in server order.
    pub async fn list_all<T: Transport + ?Sized>(
        &self,
        transport: &T,
    ) -> Result<std::vec::IntoIter<MovieRecord>, ApiError> {
        let response = transport.send(self.build_list_movies()).await?;
        let records = self.parse_list_movies(response)?;
        debug!(count = records.len(), "movies listed");
        Ok(records.into_iter())
    }

    pub async fn create_movie<T: Transport + ?Sized>(&self, transport: &T, record: &MovieRecord) -> Outcome {
        match self.submit(transport, HttpMethod::Post, &Endpoint::Collection, Some(record)).await {
            Ok(response) => self.parse_write(&response, MSG_CREATED),
            Err(e) => {
                warn!(error = %e, "create failed");
                Outcome::GenericError
            }
        }
    }

    pub async fn update_movie<T: Transport + ?Sized>(
        &self,
        transport: &T,
        id: &str,
        record: &MovieRecord,
    ) -> Outcome {
        let endpoint = Endpoint::Item(id.to_string());
        match self.submit(transport, HttpMethod::Patch, &endpoint, Some(record)).await {
            Ok(response) => self.parse_write(&response, MSG_UPDATED),
            Err(e) => {
                warn!(error = %e, id, "update failed");
                Outcome::GenericError
            }
        }
    }

    pub async fn delete_movie<T: Transport + ?Sized>(&self, transport: &T, id: &str) -> Outcome {
        let endpoint = Endpoint::Item(id.to_string());
        match self.submit(transport, HttpMethod::Delete, &endpoint, None).await {
            Ok(response) => self.parse_delete(&response),
            Err(e) => {
                warn!(error = %e, id, "delete failed");
                Outcome::GenericError
            }
        }
    }
}
