//! Resource base contract shared by every GPU-like object
//!
//! A resource is never constructed independently of a backend: its
//! ResourceCore registers with the owning backend's AllocationContext at
//! construction time and captures that context for the resource's entire
//! lifetime. `release()` is the only sanctioned destruction path and always
//! routes back through the captured context, no matter which subsystem holds
//! the handle.

use std::fmt;
use std::sync::Arc;

use crate::error::RhiResult;
use crate::rhi::context::{AllocationContext, BackendId};

slotmap::new_key_type! {
    /// Generational identifier of a live resource within its allocation context
    pub struct ResourceId;
}

/// Open resource-kind tag
///
/// Kinds are named constants rather than a closed enum so that backend
/// extensions can introduce new kinds without modifying the backend
/// interface; the accounting machinery treats all kinds uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceKind(&'static str);

impl ResourceKind {
    pub const TEXTURE_1D: Self = Self("Texture1D");
    pub const TEXTURE_2D: Self = Self("Texture2D");
    pub const TEXTURE_3D: Self = Self("Texture3D");
    pub const SAMPLER_STATE: Self = Self("SamplerState");
    pub const BUFFER: Self = Self("Buffer");
    pub const PIPELINE_STATE: Self = Self("PipelineState");

    /// Declare a new kind (for backend extensions)
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Kind name as a string
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Common lifecycle state embedded in every concrete resource
///
/// Holds the generational id, the kind tag, the captured allocation context
/// (the back-reference to the owning backend, read-only for the resource's
/// lifetime) and the optional debug name.
pub struct ResourceCore {
    id: ResourceId,
    kind: ResourceKind,
    ctx: Arc<AllocationContext>,
    debug_name: Option<String>,
}

impl ResourceCore {
    /// Construct and register a resource in its owning context
    ///
    /// Intended for backend implementations only; the backend must have
    /// validated the creation parameters before calling this, so that a
    /// validation failure never touches the live table. The debug name is
    /// stored only when the context's debug layer is enabled.
    pub fn new(
        kind: ResourceKind,
        ctx: &Arc<AllocationContext>,
        debug_name: Option<&str>,
    ) -> RhiResult<Self> {
        let (id, debug_name) = ctx.register(kind, debug_name)?;
        Ok(Self {
            id,
            kind,
            ctx: Arc::clone(ctx),
            debug_name,
        })
    }

    /// Generational id within the owning context
    pub fn id(&self) -> ResourceId {
        self.id
    }

    /// Kind tag of the concrete resource
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Id of the backend that created this resource
    pub fn backend_id(&self) -> BackendId {
        self.ctx.backend_id()
    }

    /// Debug name, if one was supplied and the debug layer is enabled
    pub fn debug_name(&self) -> Option<&str> {
        self.debug_name.as_deref()
    }

    /// Release this resource through the context that created it
    ///
    /// Callable exactly once per resource. A second call is detected via the
    /// generational live table: UseAfterDestroy with the debug layer
    /// enabled, a silent no-op otherwise.
    pub fn release(&self) -> RhiResult<()> {
        self.ctx.release(self.id, self.kind)
    }
}

impl fmt::Debug for ResourceCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceCore")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("backend_id", &self.ctx.backend_id())
            .field("debug_name", &self.debug_name)
            .finish()
    }
}

/// Polymorphic contract implemented by every RHI resource
///
/// Concrete resource traits (Texture1d, SamplerState, ...) extend this with
/// kind-specific accessors. Handles are `Arc<dyn Kind>`, and `release()` is
/// dispatched on the resource itself so that destruction resolves to the
/// owning backend's allocation context regardless of the calling module.
pub trait RhiResource: Send + Sync {
    /// The embedded lifecycle core
    fn core(&self) -> &ResourceCore;

    /// Kind tag of this resource
    fn kind(&self) -> ResourceKind {
        self.core().kind()
    }

    /// Generational id within the owning backend's context
    fn resource_id(&self) -> ResourceId {
        self.core().id()
    }

    /// Id of the backend that created this resource
    fn backend_id(&self) -> BackendId {
        self.core().backend_id()
    }

    /// Debug name, if supplied at creation with the debug layer enabled
    fn debug_name(&self) -> Option<&str> {
        self.core().debug_name()
    }

    /// Self-destruct: release through the owning backend's context
    fn release(&self) -> RhiResult<()> {
        self.core().release()
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
