//! Network layer - HTTP calls against the wallet platform

pub mod actor;
pub mod client;
pub mod error;

pub use actor::NetworkActor;
pub use client::ApiClient;
pub use error::ApiError;
