//! Dynamic RHI trait - backend factory and capability surface
//!
//! The central contract every backend (hardware-backed or null) implements.
//! Engine code only ever talks to `dyn DynamicRhi`; backend crates register
//! themselves in the plugin registry and are instantiated by name.

use std::fmt;
use std::sync::{Arc, Mutex};
use bitflags::bitflags;
use rustc_hash::FxHashMap;

use crate::error::{RhiError, RhiResult};
use crate::rhi::buffer::{Buffer, BufferDesc};
use crate::rhi::context::BackendId;
use crate::rhi::pipeline::{PipelineState, PipelineStateDesc};
use crate::rhi::sampler::{SamplerState, SamplerStateDesc};
use crate::rhi::texture::{
    Texture1d, Texture1dDesc, Texture2d, Texture2dDesc, Texture3d, Texture3dDesc,
};

// ============================================================================
// Configuration
// ============================================================================

/// Backend configuration
#[derive(Debug, Clone)]
pub struct RhiConfig {
    /// Enable debug instrumentation (debug names, use-after-destroy
    /// detection, leak diagnostics). Test suites may force either value
    /// regardless of the build profile.
    pub debug_layer_enabled: bool,
    /// Adapter to prefer when the backend exposes more than one
    pub preferred_adapter: Option<u32>,
    /// Application name, forwarded to backends that report it to drivers
    pub app_name: String,
}

impl Default for RhiConfig {
    fn default() -> Self {
        Self {
            debug_layer_enabled: cfg!(debug_assertions),
            preferred_adapter: None,
            app_name: "Aurora Application".to_string(),
        }
    }
}

// ============================================================================
// Lifecycle state
// ============================================================================

/// Backend lifecycle state
///
/// Transitions happen in declaration order only:
/// Uninitialized -> Ready -> ShuttingDown -> Destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendState {
    /// Allocated but not yet usable
    Uninitialized,
    /// Accepting resource-creation calls
    Ready,
    /// Shutdown requested; creation rejected, releases still drain
    ShuttingDown,
    /// Fully torn down; reached only with zero live resources
    Destroyed,
}

impl fmt::Display for BackendState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendState::Uninitialized => "Uninitialized",
            BackendState::Ready => "Ready",
            BackendState::ShuttingDown => "ShuttingDown",
            BackendState::Destroyed => "Destroyed",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Capabilities
// ============================================================================

bitflags! {
    /// Capability flags a backend advertises
    ///
    /// Creating a resource the backend lacks the capability for fails with
    /// `ResourceCreation`, not `Validation` - the descriptor itself is fine.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BackendCaps: u32 {
        /// 1D textures
        const TEXTURE_1D = 1 << 0;
        /// 3D (volume) textures
        const TEXTURE_3D = 1 << 1;
        /// 2D texture arrays
        const TEXTURE_ARRAYS = 1 << 2;
        /// Anisotropic filtering
        const ANISOTROPIC_FILTERING = 1 << 3;
        /// The packed D24S8 depth/stencil format
        const DEPTH24_STENCIL8 = 1 << 4;
    }
}

// ============================================================================
// Dynamic RHI trait
// ============================================================================

/// Backend contract: per-kind resource factory plus lifecycle control
///
/// Every creation call either returns a fully constructed resource or a
/// typed error; a failed call never changes the live-resource count. All
/// calls are synchronous. Implementations serialize creation/destruction
/// against their own accounting internally.
pub trait DynamicRhi: Send + Sync {
    /// Backend name (e.g., "null", "vulkan")
    fn name(&self) -> &'static str;

    /// Process-unique id of this backend instance
    fn backend_id(&self) -> BackendId;

    /// Capabilities this backend advertises
    fn caps(&self) -> BackendCaps;

    /// Current lifecycle state
    fn state(&self) -> BackendState;

    /// Create a 1D texture
    fn create_texture_1d(
        &self,
        desc: &Texture1dDesc,
        debug_name: Option<&str>,
    ) -> RhiResult<Arc<dyn Texture1d>>;

    /// Create a 2D texture (or 2D texture array)
    fn create_texture_2d(
        &self,
        desc: &Texture2dDesc,
        debug_name: Option<&str>,
    ) -> RhiResult<Arc<dyn Texture2d>>;

    /// Create a 3D texture
    fn create_texture_3d(
        &self,
        desc: &Texture3dDesc,
        debug_name: Option<&str>,
    ) -> RhiResult<Arc<dyn Texture3d>>;

    /// Create a sampler state
    fn create_sampler_state(
        &self,
        desc: &SamplerStateDesc,
        debug_name: Option<&str>,
    ) -> RhiResult<Arc<dyn SamplerState>>;

    /// Create a buffer
    fn create_buffer(
        &self,
        desc: &BufferDesc,
        debug_name: Option<&str>,
    ) -> RhiResult<Arc<dyn Buffer>>;

    /// Create a pipeline state
    fn create_pipeline_state(
        &self,
        desc: &PipelineStateDesc,
        debug_name: Option<&str>,
    ) -> RhiResult<Arc<dyn PipelineState>>;

    /// Number of resources created by this backend and not yet released
    fn live_resource_count(&self) -> usize;

    /// Begin shutdown: Ready -> ShuttingDown
    ///
    /// No new creation calls are accepted afterwards; outstanding resources
    /// must still be released before `destroy`.
    fn shutdown(&self) -> RhiResult<()>;

    /// Finish teardown: ShuttingDown -> Destroyed
    ///
    /// Fails with `Leak` (and stays in ShuttingDown) while any resource this
    /// backend created is still live.
    fn destroy(&self) -> RhiResult<()>;
}

// ============================================================================
// Plugin registry for backend implementations
// ============================================================================

/// Backend factory function type
type BackendFactory = Box<dyn Fn(&RhiConfig) -> RhiResult<Arc<dyn DynamicRhi>> + Send + Sync>;

/// Registry of backend factories, keyed by backend name
pub struct BackendRegistry {
    factories: FxHashMap<&'static str, BackendFactory>,
}

impl BackendRegistry {
    fn new() -> Self {
        Self {
            factories: FxHashMap::default(),
        }
    }

    /// Register a backend factory
    ///
    /// Re-registering a name replaces the previous factory.
    pub fn register<F>(&mut self, name: &'static str, factory: F)
    where
        F: Fn(&RhiConfig) -> RhiResult<Arc<dyn DynamicRhi>> + Send + Sync + 'static,
    {
        self.factories.insert(name, Box::new(factory));
    }

    /// Instantiate a backend by name
    pub fn create(&self, name: &str, config: &RhiConfig) -> RhiResult<Arc<dyn DynamicRhi>> {
        self.factories
            .get(name)
            .ok_or_else(|| {
                RhiError::InitializationFailed(format!("backend '{}' is not registered", name))
            })?(config)
    }

    /// Names of all registered backends
    pub fn registered(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }
}

static BACKEND_REGISTRY: Mutex<Option<BackendRegistry>> = Mutex::new(None);

/// Get the global backend registry
pub fn backend_registry() -> &'static Mutex<Option<BackendRegistry>> {
    // Initialize on first access
    let mut registry = BACKEND_REGISTRY.lock().unwrap();
    if registry.is_none() {
        *registry = Some(BackendRegistry::new());
    }
    drop(registry);
    &BACKEND_REGISTRY
}

/// Register a backend factory in the global registry
pub fn register_backend_plugin<F>(name: &'static str, factory: F)
where
    F: Fn(&RhiConfig) -> RhiResult<Arc<dyn DynamicRhi>> + Send + Sync + 'static,
{
    backend_registry()
        .lock()
        .unwrap()
        .as_mut()
        .unwrap()
        .register(name, factory);
}

/// Create a backend through the global registry
///
/// The factory contract of the RHI: engine code asks for a backend by name
/// and receives either a Ready backend or an error.
pub fn create_backend(name: &str, config: &RhiConfig) -> RhiResult<Arc<dyn DynamicRhi>> {
    backend_registry()
        .lock()
        .unwrap()
        .as_ref()
        .unwrap()
        .create(name, config)
}

#[cfg(test)]
#[path = "dynamic_rhi_tests.rs"]
mod tests;
