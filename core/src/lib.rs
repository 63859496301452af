//! Client core for the movie catalogue API.
//!
//! # Overview
//! Turns movie forms into JSON payloads, builds the HTTP requests for the
//! `/api/movies` collection, and classifies completed responses into one of
//! three outcomes: success, duplicate name, or generic error.
//!
//! # Design
//! - `MovieClient` is stateless; `build_*` / `parse_*` keep the I/O
//!   boundary explicit, and the async methods run one exchange over a
//!   `Transport`.
//! - `MovieController` drives the list/create/update/delete flows against a
//!   `MovieView` passed in by the caller.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod http;
pub mod outcome;
pub mod table;
pub mod transport;
pub mod types;

pub use client::MovieClient;
pub use config::ClientConfig;
pub use controller::{MovieController, MovieView};
pub use error::ApiError;
pub use form::{serialize_form, FormInput};
pub use http::{Endpoint, HttpMethod, HttpRequest, HttpResponse};
pub use outcome::{classify_response, Outcome, StatusCheck};
pub use table::{render_table, RowAction, TableRow};
pub use transport::{HttpTransport, Transport};
pub use types::MovieRecord;
