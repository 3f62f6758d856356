//! Minimal HTTP request convenience wrapper
//!
//! `reqkit` builds a request (GET/POST/PUT/PATCH/DELETE) with optional JSON
//! body, headers, and query parameters, executes it over a shared
//! [`HttpClient`], and captures the raw response bytes and status code on
//! the request itself. The stored response can then be decoded as JSON, and
//! a send can be retried a fixed number of times with a one second delay
//! between attempts.
//!
//! HTTP status codes are never errors at this layer: a 4xx or 5xx response
//! is a completed request whose status the caller inspects.
//!
//! # Example
//!
//! ```no_run
//! use reqkit::Request;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Greeting {
//!     message: String,
//! }
//!
//! async fn example() -> Result<(), reqkit::Error> {
//!     let mut request = Request::new("https://api.example.com/greet")
//!         .param("lang", "en")
//!         .json_content();
//!     request.get().await?;
//!
//!     let greeting: Greeting = request.decode()?;
//!     println!("{} (status {:?})", greeting.message, request.status());
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod method;
mod request;

pub use client::{HttpClient, HttpClientBuilder};
pub use error::Error;
pub use method::Method;
pub use request::Request;
