//! Request and response types for the HTTP API, grouped per endpoint.

pub mod config;
pub mod diagnostics;
pub mod generate;
pub mod knowledge;
pub mod models;
pub mod upload;
