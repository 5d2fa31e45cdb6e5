//! tinyhttp - Minimal Sequential HTTP Server
//!
//! Core library for socket setup, request-line parsing and response writing.

pub mod config;
pub mod http;
pub mod server;
