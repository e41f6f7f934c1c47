//! Errors returned by the asynchronous [`DeployManager`][crate::test::deploy_manager::DeployManager]

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Kubernetes API error: {0}")]
    Api(#[from] kube::Error),

    #[error("{kind} [{name}] not found")]
    NotFound { kind: String, name: String },

    #[error("{what} did not complete within {} seconds", .timeout.as_secs())]
    Timeout { what: String, timeout: Duration },

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Invalid YAML manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns true if the error is an API response with the given HTTP status code.
    pub fn has_code(&self, code: u16) -> bool {
        matches!(self, Error::Api(err) if api_code(err) == Some(code))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }
}

/// Returns true if the API server answered with `404 Not Found`.
pub fn is_not_found(err: &kube::Error) -> bool {
    api_code(err) == Some(404)
}

/// Returns true if the API server answered with `409 Conflict` because
/// the resource already exists.
pub fn is_already_exists(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(response)
        if response.code == 409 && response.reason == "AlreadyExists")
}

fn api_code(err: &kube::Error) -> Option<u16> {
    match err {
        kube::Error::Api(response) => Some(response.code),
        _ => None,
    }
}
