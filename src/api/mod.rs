//! API client module

pub mod client;
pub mod request;
pub mod response;
pub mod status;

pub use client::StatuspageClient;
