//! Sampler state descriptor and resource trait

use crate::error::{RhiError, RhiResult};
use crate::rhi::resource::RhiResource;

/// Texel filtering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    Linear,
}

/// Texture coordinate addressing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressMode {
    Repeat,
    MirroredRepeat,
    ClampToEdge,
    ClampToBorder,
}

/// Descriptor for creating a sampler state
///
/// Filtering and addressing parameters are fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerStateDesc {
    /// Minification filter
    pub min_filter: FilterMode,
    /// Magnification filter
    pub mag_filter: FilterMode,
    /// Filter between mip levels
    pub mip_filter: FilterMode,
    /// Addressing mode along U
    pub address_u: AddressMode,
    /// Addressing mode along V
    pub address_v: AddressMode,
    /// Addressing mode along W
    pub address_w: AddressMode,
    /// Maximum anisotropy (1.0 = disabled, up to 16.0)
    pub max_anisotropy: f32,
    /// Minimum level-of-detail clamp
    pub lod_min: f32,
    /// Maximum level-of-detail clamp
    pub lod_max: f32,
}

impl Default for SamplerStateDesc {
    fn default() -> Self {
        Self {
            min_filter: FilterMode::Linear,
            mag_filter: FilterMode::Linear,
            mip_filter: FilterMode::Linear,
            address_u: AddressMode::Repeat,
            address_v: AddressMode::Repeat,
            address_w: AddressMode::Repeat,
            max_anisotropy: 1.0,
            lod_min: 0.0,
            lod_max: f32::MAX,
        }
    }
}

impl SamplerStateDesc {
    /// Check the descriptor before any allocation happens
    pub fn validate(&self) -> RhiResult<()> {
        if !self.max_anisotropy.is_finite() || !(1.0..=16.0).contains(&self.max_anisotropy) {
            return Err(RhiError::Validation(format!(
                "SamplerState max_anisotropy must be in [1.0, 16.0] (got {})",
                self.max_anisotropy
            )));
        }
        if self.lod_min.is_nan() || self.lod_max.is_nan() || self.lod_min > self.lod_max {
            return Err(RhiError::Validation(format!(
                "SamplerState LOD range must satisfy lod_min <= lod_max (got [{}, {}])",
                self.lod_min, self.lod_max
            )));
        }
        Ok(())
    }

    /// True when anisotropic filtering is requested
    pub fn is_anisotropic(&self) -> bool {
        self.max_anisotropy > 1.0
    }
}

/// Sampler state resource trait
///
/// Implemented by backend-specific sampler types; handles are
/// `Arc<dyn SamplerState>` and release through [`RhiResource::release`].
pub trait SamplerState: RhiResource {
    /// Immutable creation-time descriptor
    fn desc(&self) -> &SamplerStateDesc;
}

#[cfg(test)]
#[path = "sampler_tests.rs"]
mod tests;
