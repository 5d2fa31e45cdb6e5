//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 subset the server speaks: one request
//! per connection, request line only, fixed routing table, `Connection: close`
//! on every response.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection handler implementing the
//!   read-dispatch-write state machine
//! - **`parser`**: parses the request line out of the first read's bytes
//! - **`request`**: parsed request-line representation
//! - **`router`**: fixed path table and method policy
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One bounded read of the request bytes
//!        └──────┬──────┘
//!               │ Bytes received (0 bytes → Closed, no response)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Parse request line, pick response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Written (fully or not)
//!               ▼
//!        ┌──────────────────┐
//!        │    Closed        │ ← Terminal on every path
//!        └──────────────────┘
//! ```
//!
//! No state is revisited and no connection is reused across requests.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod router;
pub mod writer;
