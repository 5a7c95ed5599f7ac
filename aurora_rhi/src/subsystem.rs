/// Aurora RHI subsystem - singleton manager for the active backend
///
/// Provides global singleton management for the backend and the logger.
/// Uses thread-safe static storage with RwLock for safe concurrent access.

use std::sync::{Arc, OnceLock, RwLock};
use std::time::SystemTime;

use crate::error::{RhiError, RhiResult};
use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
use crate::rhi::dynamic_rhi::{BackendState, DynamicRhi};

// ===== INTERNAL STATE =====

/// Global subsystem state storage
static RHI_STATE: OnceLock<RhiState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Internal state holding the backend singleton
struct RhiState {
    backend: RwLock<Option<Arc<dyn DynamicRhi>>>,
}

impl RhiState {
    fn new() -> Self {
        Self {
            backend: RwLock::new(None),
        }
    }
}

// ===== PUBLIC API =====

/// RHI subsystem singleton manager
///
/// Manages the lifecycle of the active backend and the log sink. The backend
/// singleton can only be replaced after the previous one has been destroyed,
/// which enforces the shutdown-ordering invariant at the subsystem level.
///
/// # Example
///
/// ```no_run
/// use aurora_rhi::aurora::{Rhi, rhi::{NullBackend, RhiConfig}};
///
/// Rhi::initialize()?;
/// Rhi::register_backend(NullBackend::create(&RhiConfig::default())?)?;
///
/// let backend = Rhi::backend()?;
/// // Create and use resources...
///
/// Rhi::destroy_backend()?;
/// Rhi::shutdown();
/// # Ok::<(), aurora_rhi::aurora::RhiError>(())
/// ```
pub struct Rhi;

impl Rhi {
    /// Helper to log errors before returning them (internal use)
    fn log_and_return_error(error: RhiError) -> RhiError {
        crate::rhi_error!("aurora::Rhi", "{}", error);
        error
    }

    /// Initialize the subsystem
    ///
    /// Must be called once at application startup before registering a
    /// backend. Idempotent.
    pub fn initialize() -> RhiResult<()> {
        RHI_STATE.get_or_init(RhiState::new);
        Ok(())
    }

    /// Shut down the subsystem
    ///
    /// Destroys the backend singleton if one is still registered; a leaking
    /// backend is reported loudly but the slot is cleared regardless so the
    /// process can exit.
    pub fn shutdown() {
        if let Some(state) = RHI_STATE.get() {
            if let Ok(mut slot) = state.backend.write() {
                if let Some(backend) = slot.take() {
                    if backend.state() == BackendState::Ready {
                        let _ = backend.shutdown();
                    }
                    if backend.state() == BackendState::ShuttingDown {
                        if let Err(error) = backend.destroy() {
                            crate::rhi_error!(
                                "aurora::Rhi",
                                "backend teardown during shutdown failed: {}",
                                error
                            );
                        }
                    }
                }
            }
        }
    }

    /// Register the backend singleton
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The subsystem is not initialized
    /// - A backend is already registered
    pub fn register_backend(backend: Arc<dyn DynamicRhi>) -> RhiResult<()> {
        let state = RHI_STATE.get().ok_or_else(|| {
            Self::log_and_return_error(RhiError::InitializationFailed(
                "subsystem not initialized. Call Rhi::initialize() first.".to_string(),
            ))
        })?;

        let mut slot = state.backend.write().map_err(|_| {
            Self::log_and_return_error(RhiError::InvalidState(
                "backend lock poisoned".to_string(),
            ))
        })?;

        if slot.is_some() {
            return Err(Self::log_and_return_error(RhiError::InitializationFailed(
                "a backend is already registered. Call Rhi::destroy_backend() first.".to_string(),
            )));
        }

        crate::rhi_info!(
            "aurora::Rhi",
            "backend '{}' registered ({})",
            backend.name(),
            backend.backend_id()
        );
        *slot = Some(backend);
        Ok(())
    }

    /// Get the backend singleton
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The subsystem is not initialized
    /// - No backend has been registered
    pub fn backend() -> RhiResult<Arc<dyn DynamicRhi>> {
        let state = RHI_STATE.get().ok_or_else(|| {
            Self::log_and_return_error(RhiError::InitializationFailed(
                "subsystem not initialized. Call Rhi::initialize() first.".to_string(),
            ))
        })?;

        let slot = state.backend.read().map_err(|_| {
            Self::log_and_return_error(RhiError::InvalidState(
                "backend lock poisoned".to_string(),
            ))
        })?;

        slot.clone().ok_or_else(|| {
            Self::log_and_return_error(RhiError::InitializationFailed(
                "no backend registered. Call Rhi::register_backend() first.".to_string(),
            ))
        })
    }

    /// Destroy the backend singleton
    ///
    /// Routes through the backend's own shutdown/destroy protocol. If
    /// resources are still live, the Leak error is returned and the backend
    /// stays registered (and in ShuttingDown) so the caller can drain and
    /// retry - destruction never proceeds over live resources.
    pub fn destroy_backend() -> RhiResult<()> {
        let state = RHI_STATE.get().ok_or_else(|| {
            Self::log_and_return_error(RhiError::InitializationFailed(
                "subsystem not initialized".to_string(),
            ))
        })?;

        let mut slot = state.backend.write().map_err(|_| {
            Self::log_and_return_error(RhiError::InvalidState(
                "backend lock poisoned".to_string(),
            ))
        })?;

        let backend = slot.clone().ok_or_else(|| {
            Self::log_and_return_error(RhiError::InitializationFailed(
                "no backend registered".to_string(),
            ))
        })?;

        if backend.state() == BackendState::Ready {
            backend.shutdown()?;
        }
        backend.destroy()?;

        *slot = None;
        crate::rhi_info!("aurora::Rhi", "backend '{}' destroyed", backend.name());
        Ok(())
    }

    /// Reset the singleton for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        if let Some(state) = RHI_STATE.get() {
            if let Ok(mut slot) = state.backend.write() {
                *slot = None;
            }
        }
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// Replaces the default logger with a custom implementation (file
    /// logger, test capture, etc.)
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to the default colored console logger
    pub fn reset_logger() {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by the rhi_trace!/rhi_debug!/rhi_info!/rhi_warn! macros.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information
    ///
    /// Used by the rhi_error! macro to include the source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "subsystem_tests.rs"]
mod tests;
