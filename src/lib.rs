//! Bootstraps AppRole credentials from a HashiCorp Vault server.
//!
//! Performs the initial provisioning handshake for a Vault AppRole: fetches
//! the role-id and a fresh one-time secret-id for a configured role, and
//! persists each to a file so that other processes can authenticate later.
//!
//! The flow is linear and synchronous: read configuration from the
//! environment, fetch the role-id, write it, fetch a secret-id, write it.
//! Every failure is fatal; nothing is retried.

mod approle;
pub mod bootstrap;
mod client;
mod config;

pub use client::VaultClient;
pub use config::Config;

use thiserror::Error;

/// Errors surfaced by the bootstrap flow. All of them abort the run.
#[derive(Debug, Error)]
pub enum VaultError {
    /// One or more required environment variables are missing, or the
    /// configured address is not a URL.
    #[error("configuration error: {0}")]
    ConfigurationError(String),
    /// The request never produced a response: connection, DNS or TLS failure.
    #[error("request to Vault failed")]
    TransportError(#[source] reqwest::Error),
    /// Vault answered with a JSON body carrying an `errors` list.
    #[error("Vault returned errors: {0}")]
    RemoteError(String),
    /// The response body was not the expected envelope.
    #[error("malformed response from Vault: {0}")]
    MalformedResponseError(String),
    /// An output file could not be written.
    #[error("failed to write {0}")]
    FilesystemError(String, #[source] std::io::Error),
}
