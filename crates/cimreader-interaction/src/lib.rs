//! HTTP implementation of the network boundary.
//!
//! [`ApiClient`] is the reqwest-backed [`ApiGateway`](cimreader_core::ApiGateway):
//! multipart upload for conversion, JSON for chat, list, and delete, and
//! error-body extraction for non-2xx responses.

mod client;
mod response;

pub use client::ApiClient;
