use crate::Role;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthzError {
    #[error("invalid role: {0}")]
    InvalidRole(String),
    #[error("invalid route: {0}")]
    InvalidRoute(String),
    #[error("invalid capability: {0}")]
    InvalidCapability(String),
    #[error("wildcard grant is reserved for MASTER, found on {0}")]
    WildcardNotAllowed(Role),
    #[error("permission table yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("read permission table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type AuthzResult<T> = Result<T, AuthzError>;
