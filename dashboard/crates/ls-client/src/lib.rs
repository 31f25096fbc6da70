//! HTTP client for the LivestockSync REST API.
//!
//! Every call is a single request; failures surface once as a
//! [`ClientError`] with no retry or queueing.

pub mod client;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use client::ApiClient;
pub use error::{ClientError, Result};
pub use models::{
    FeedbackRequest, HospitalRequest, LoginResponse, RemoteSettings, SlaughterhouseRequest,
    TwoFactorRequest, TwoFactorResponse,
};
