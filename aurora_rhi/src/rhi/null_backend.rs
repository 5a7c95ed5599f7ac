//! Null backend: the full RHI contract with no device work
//!
//! Used for headless execution and by test harnesses. Validation, lifecycle
//! transitions, live-resource accounting and error outcomes are the same as
//! a hardware backend's; only the device-level side effects are absent.

use std::sync::{Arc, Mutex};

use crate::error::{RhiError, RhiResult};
use crate::rhi::buffer::{Buffer, BufferDesc};
use crate::rhi::context::{AllocationContext, BackendId};
use crate::rhi::dynamic_rhi::{
    register_backend_plugin, BackendCaps, BackendState, DynamicRhi, RhiConfig,
};
use crate::rhi::pipeline::{PipelineState, PipelineStateDesc};
use crate::rhi::resource::{ResourceCore, ResourceKind, RhiResource};
use crate::rhi::sampler::{SamplerState, SamplerStateDesc};
use crate::rhi::texture::{
    Texture1d, Texture1dDesc, Texture2d, Texture2dDesc, Texture3d, Texture3dDesc,
};
use crate::{rhi_bail, rhi_error, rhi_info, rhi_trace, rhi_warn};

const LOG_SOURCE: &str = "aurora::rhi::null";

// ============================================================================
// Null resource types
// ============================================================================

/// Declare a null resource type: a ResourceCore plus the immutable desc
macro_rules! null_resource {
    ($name:ident, $trait_name:ident, $desc:ty) => {
        #[derive(Debug)]
        pub struct $name {
            core: ResourceCore,
            desc: $desc,
        }

        impl RhiResource for $name {
            fn core(&self) -> &ResourceCore {
                &self.core
            }
        }

        impl $trait_name for $name {
            fn desc(&self) -> &$desc {
                &self.desc
            }
        }
    };
}

null_resource!(NullTexture1d, Texture1d, Texture1dDesc);
null_resource!(NullTexture2d, Texture2d, Texture2dDesc);
null_resource!(NullTexture3d, Texture3d, Texture3dDesc);
null_resource!(NullSamplerState, SamplerState, SamplerStateDesc);
null_resource!(NullBuffer, Buffer, BufferDesc);
null_resource!(NullPipelineState, PipelineState, PipelineStateDesc);

// ============================================================================
// Null backend
// ============================================================================

/// Backend implementing the full contract with no GPU
pub struct NullBackend {
    ctx: Arc<AllocationContext>,
    caps: BackendCaps,
    state: Mutex<BackendState>,
    /// Optional live-resource ceiling, for exercising the exhaustion path
    budget: Option<usize>,
}

impl NullBackend {
    /// Create a null backend in the Ready state
    ///
    /// Environment validation is trivially satisfied: creation always
    /// succeeds. The null backend exposes a single virtual adapter, so any
    /// other preferred adapter is ignored with a warning.
    pub fn create(config: &RhiConfig) -> RhiResult<Arc<Self>> {
        Self::create_with_budget(config, None)
    }

    /// Create a null backend with a live-resource budget
    ///
    /// Once `budget` resources are live, further creations fail with
    /// `ResourceCreation`, letting harnesses exercise device-exhaustion
    /// handling deterministically.
    pub fn create_with_budget(config: &RhiConfig, budget: Option<usize>) -> RhiResult<Arc<Self>> {
        if let Some(adapter) = config.preferred_adapter {
            if adapter != 0 {
                rhi_warn!(
                    LOG_SOURCE,
                    "preferred adapter {} not available; using the single virtual adapter",
                    adapter
                );
            }
        }

        let backend = Arc::new(Self {
            ctx: Arc::new(AllocationContext::new(
                "null",
                config.debug_layer_enabled,
            )),
            caps: BackendCaps::all(),
            state: Mutex::new(BackendState::Ready),
            budget,
        });
        rhi_info!(
            LOG_SOURCE,
            "{} ready for '{}' (debug layer: {})",
            backend.ctx.backend_id(),
            config.app_name,
            config.debug_layer_enabled
        );
        Ok(backend)
    }

    /// The allocation context owned by this backend
    pub fn allocation_context(&self) -> &Arc<AllocationContext> {
        &self.ctx
    }

    /// Reject creation calls outside the Ready state
    fn guard_ready(&self, kind: ResourceKind) -> RhiResult<()> {
        let state = *self.state.lock().unwrap();
        if state != BackendState::Ready {
            return Err(RhiError::InvalidState(format!(
                "{} creation requires the Ready state (backend is {})",
                kind, state
            )));
        }
        Ok(())
    }

    /// Enforce the optional resource budget
    fn guard_budget(&self, kind: ResourceKind) -> RhiResult<()> {
        if let Some(budget) = self.budget {
            if self.ctx.live_count() >= budget {
                return Err(RhiError::ResourceCreation(format!(
                    "{} creation failed: resource budget exhausted ({} live)",
                    kind, budget
                )));
            }
        }
        Ok(())
    }

    /// Shared creation preamble: state, validation, capability, budget
    fn guard_creation(
        &self,
        kind: ResourceKind,
        validation: RhiResult<()>,
        cap: Option<BackendCaps>,
    ) -> RhiResult<()> {
        self.guard_ready(kind)?;
        validation?;
        if let Some(cap) = cap {
            if !self.caps.contains(cap) {
                return Err(RhiError::ResourceCreation(format!(
                    "{} creation failed: backend lacks capability {:?}",
                    kind, cap
                )));
            }
        }
        self.guard_budget(kind)
    }
}

impl DynamicRhi for NullBackend {
    fn name(&self) -> &'static str {
        "null"
    }

    fn backend_id(&self) -> BackendId {
        self.ctx.backend_id()
    }

    fn caps(&self) -> BackendCaps {
        self.caps
    }

    fn state(&self) -> BackendState {
        *self.state.lock().unwrap()
    }

    fn create_texture_1d(
        &self,
        desc: &Texture1dDesc,
        debug_name: Option<&str>,
    ) -> RhiResult<Arc<dyn Texture1d>> {
        self.guard_creation(
            ResourceKind::TEXTURE_1D,
            desc.validate(),
            Some(BackendCaps::TEXTURE_1D),
        )?;
        let core = ResourceCore::new(ResourceKind::TEXTURE_1D, &self.ctx, debug_name)?;
        rhi_trace!(LOG_SOURCE, "created Texture1D {}x1", desc.width);
        Ok(Arc::new(NullTexture1d {
            core,
            desc: desc.clone(),
        }))
    }

    fn create_texture_2d(
        &self,
        desc: &Texture2dDesc,
        debug_name: Option<&str>,
    ) -> RhiResult<Arc<dyn Texture2d>> {
        let cap = if desc.array_layers > 1 {
            Some(BackendCaps::TEXTURE_ARRAYS)
        } else {
            None
        };
        self.guard_creation(ResourceKind::TEXTURE_2D, desc.validate(), cap)?;
        let core = ResourceCore::new(ResourceKind::TEXTURE_2D, &self.ctx, debug_name)?;
        rhi_trace!(
            LOG_SOURCE,
            "created Texture2D {}x{} ({} layer(s), {} mip(s))",
            desc.width,
            desc.height,
            desc.array_layers,
            desc.mip_levels
        );
        Ok(Arc::new(NullTexture2d {
            core,
            desc: desc.clone(),
        }))
    }

    fn create_texture_3d(
        &self,
        desc: &Texture3dDesc,
        debug_name: Option<&str>,
    ) -> RhiResult<Arc<dyn Texture3d>> {
        self.guard_creation(
            ResourceKind::TEXTURE_3D,
            desc.validate(),
            Some(BackendCaps::TEXTURE_3D),
        )?;
        let core = ResourceCore::new(ResourceKind::TEXTURE_3D, &self.ctx, debug_name)?;
        rhi_trace!(
            LOG_SOURCE,
            "created Texture3D {}x{}x{}",
            desc.width,
            desc.height,
            desc.depth
        );
        Ok(Arc::new(NullTexture3d {
            core,
            desc: desc.clone(),
        }))
    }

    fn create_sampler_state(
        &self,
        desc: &SamplerStateDesc,
        debug_name: Option<&str>,
    ) -> RhiResult<Arc<dyn SamplerState>> {
        let cap = if desc.is_anisotropic() {
            Some(BackendCaps::ANISOTROPIC_FILTERING)
        } else {
            None
        };
        self.guard_creation(ResourceKind::SAMPLER_STATE, desc.validate(), cap)?;
        let core = ResourceCore::new(ResourceKind::SAMPLER_STATE, &self.ctx, debug_name)?;
        rhi_trace!(
            LOG_SOURCE,
            "created SamplerState (anisotropy {})",
            desc.max_anisotropy
        );
        Ok(Arc::new(NullSamplerState {
            core,
            desc: desc.clone(),
        }))
    }

    fn create_buffer(
        &self,
        desc: &BufferDesc,
        debug_name: Option<&str>,
    ) -> RhiResult<Arc<dyn Buffer>> {
        self.guard_creation(ResourceKind::BUFFER, desc.validate(), None)?;
        let core = ResourceCore::new(ResourceKind::BUFFER, &self.ctx, debug_name)?;
        rhi_trace!(LOG_SOURCE, "created Buffer of {} byte(s)", desc.size);
        Ok(Arc::new(NullBuffer {
            core,
            desc: desc.clone(),
        }))
    }

    fn create_pipeline_state(
        &self,
        desc: &PipelineStateDesc,
        debug_name: Option<&str>,
    ) -> RhiResult<Arc<dyn PipelineState>> {
        self.guard_creation(ResourceKind::PIPELINE_STATE, desc.validate(), None)?;
        let core = ResourceCore::new(ResourceKind::PIPELINE_STATE, &self.ctx, debug_name)?;
        rhi_trace!(LOG_SOURCE, "created PipelineState ({:?})", desc.topology);
        Ok(Arc::new(NullPipelineState {
            core,
            desc: desc.clone(),
        }))
    }

    fn live_resource_count(&self) -> usize {
        self.ctx.live_count()
    }

    fn shutdown(&self) -> RhiResult<()> {
        let mut state = self.state.lock().unwrap();
        match *state {
            BackendState::Ready => {
                // Seal before flipping the state so that creations racing
                // with shutdown are rejected by the context itself.
                self.ctx.seal();
                *state = BackendState::ShuttingDown;
                rhi_info!(
                    LOG_SOURCE,
                    "{} shutting down ({} resource(s) still live)",
                    self.ctx.backend_id(),
                    self.ctx.live_count()
                );
                Ok(())
            }
            other => rhi_bail!(
                LOG_SOURCE,
                RhiError::InvalidState(format!(
                    "shutdown requires the Ready state (backend is {})",
                    other
                ))
            ),
        }
    }

    fn destroy(&self) -> RhiResult<()> {
        let mut state = self.state.lock().unwrap();
        match *state {
            BackendState::ShuttingDown => {
                let live = self.ctx.live_count();
                if live > 0 {
                    for leak in self.ctx.leak_report() {
                        rhi_error!(LOG_SOURCE, "leaked resource: {}", leak);
                    }
                    rhi_bail!(
                        LOG_SOURCE,
                        RhiError::Leak {
                            backend: self.name().to_string(),
                            live,
                        }
                    );
                }
                *state = BackendState::Destroyed;
                let stats = self.ctx.stats();
                rhi_info!(
                    LOG_SOURCE,
                    "{} destroyed ({} resource(s) created over its lifetime)",
                    self.ctx.backend_id(),
                    stats.created_total
                );
                Ok(())
            }
            other => rhi_bail!(
                LOG_SOURCE,
                RhiError::InvalidState(format!(
                    "destroy requires the ShuttingDown state (backend is {})",
                    other
                ))
            ),
        }
    }
}

/// Register the null backend in the global plugin registry under "null"
pub fn register_null_backend() {
    register_backend_plugin("null", |config| {
        NullBackend::create(config).map(|backend| backend as Arc<dyn DynamicRhi>)
    });
}

#[cfg(test)]
#[path = "null_backend_tests.rs"]
mod tests;
