//! Error types for the Aurora RHI layer
//!
//! This module defines the error taxonomy used throughout the RHI:
//! validation, resource creation, leak detection and lifecycle errors.

use std::fmt;

/// Result type for RHI operations
pub type RhiResult<T> = Result<T, RhiError>;

/// RHI errors
#[derive(Debug, Clone, PartialEq)]
pub enum RhiError {
    /// Malformed creation parameters, detected before any allocation
    Validation(String),

    /// Backend-level failure to allocate or configure a resource
    /// (device exhaustion, unsupported capability, etc.)
    ResourceCreation(String),

    /// Attempted backend destruction with live resources outstanding
    Leak {
        /// Name of the backend that refused to be destroyed
        backend: String,
        /// Number of resources still live
        live: usize,
    },

    /// A destroyed resource was referenced again (debug layer only)
    UseAfterDestroy(String),

    /// Operation rejected because of the backend's lifecycle state
    /// (e.g. resource creation after shutdown)
    InvalidState(String),

    /// Backend or subsystem initialization failed
    InitializationFailed(String),
}

impl fmt::Display for RhiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RhiError::Validation(msg) => write!(f, "Validation error: {}", msg),
            RhiError::ResourceCreation(msg) => write!(f, "Resource creation failed: {}", msg),
            RhiError::Leak { backend, live } => {
                write!(f, "Leak detected: backend '{}' still has {} live resource(s)", backend, live)
            }
            RhiError::UseAfterDestroy(msg) => write!(f, "Use after destroy: {}", msg),
            RhiError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            RhiError::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for RhiError {}

/// Log an error and return it from the enclosing function
///
/// # Example
///
/// ```no_run
/// use aurora_rhi::aurora::{RhiError, RhiResult};
/// use aurora_rhi::rhi_bail;
///
/// fn check_width(width: u32) -> RhiResult<()> {
///     if width == 0 {
///         rhi_bail!(
///             "aurora::rhi::null",
///             RhiError::Validation("width must be non-zero".to_string())
///         );
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! rhi_bail {
    ($source:expr, $err:expr) => {{
        let err = $err;
        $crate::rhi_error!($source, "{}", err);
        return Err(err);
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
