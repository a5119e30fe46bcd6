//! WebServer-specific error types

use shared::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed on port {port}")]
    ServerStartupFailed { port: u16 },

    #[error("Word store error: {0}")]
    StoreError(#[from] StoreError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type WebServerResult<T> = Result<T, WebServerError>;
