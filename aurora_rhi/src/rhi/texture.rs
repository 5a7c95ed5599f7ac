//! Texture descriptors, formats, and resource traits

use bitflags::bitflags;

use crate::error::{RhiError, RhiResult};
use crate::rhi::resource::RhiResource;

/// Texture pixel format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    // Color formats
    R8G8B8A8_SRGB,
    R8G8B8A8_UNORM,
    B8G8R8A8_SRGB,
    B8G8R8A8_UNORM,

    // Depth/stencil formats
    D16_UNORM,
    D32_FLOAT,
    D24_UNORM_S8_UINT,
}

impl TextureFormat {
    /// Size of one pixel in bytes
    pub fn bytes_per_pixel(&self) -> u32 {
        match self {
            TextureFormat::R8G8B8A8_SRGB
            | TextureFormat::R8G8B8A8_UNORM
            | TextureFormat::B8G8R8A8_SRGB
            | TextureFormat::B8G8R8A8_UNORM => 4,
            TextureFormat::D16_UNORM => 2,
            TextureFormat::D32_FLOAT => 4,
            TextureFormat::D24_UNORM_S8_UINT => 4,
        }
    }

    /// True for depth/stencil formats
    pub fn is_depth(&self) -> bool {
        matches!(
            self,
            TextureFormat::D16_UNORM
                | TextureFormat::D32_FLOAT
                | TextureFormat::D24_UNORM_S8_UINT
        )
    }
}

bitflags! {
    /// Texture usage flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TextureUsage: u32 {
        /// Texture can be sampled in shaders
        const SAMPLED = 1 << 0;
        /// Texture can be used as a color render target
        const RENDER_TARGET = 1 << 1;
        /// Texture can be used as a depth/stencil attachment
        const DEPTH_STENCIL = 1 << 2;
        /// Texture can be the source of a copy
        const COPY_SRC = 1 << 3;
        /// Texture can be the destination of a copy
        const COPY_DST = 1 << 4;
    }
}

/// Usage/format consistency rules shared by all texture kinds
fn validate_format_usage(kind: &str, format: TextureFormat, usage: TextureUsage) -> RhiResult<()> {
    if usage.is_empty() {
        return Err(RhiError::Validation(format!(
            "{} usage flags must not be empty",
            kind
        )));
    }
    if format.is_depth() && !usage.contains(TextureUsage::DEPTH_STENCIL) {
        return Err(RhiError::Validation(format!(
            "{} with depth format {:?} requires the DEPTH_STENCIL usage",
            kind, format
        )));
    }
    if usage.contains(TextureUsage::DEPTH_STENCIL) && !format.is_depth() {
        return Err(RhiError::Validation(format!(
            "{} with DEPTH_STENCIL usage requires a depth format (got {:?})",
            kind, format
        )));
    }
    if usage.contains(TextureUsage::RENDER_TARGET) && format.is_depth() {
        return Err(RhiError::Validation(format!(
            "{} cannot combine RENDER_TARGET with depth format {:?}",
            kind, format
        )));
    }
    Ok(())
}

/// Deepest mip chain the largest dimension allows
fn max_mip_levels(largest_dim: u32) -> u32 {
    32 - largest_dim.leading_zeros()
}

// ===== TEXTURE 1D =====

/// Descriptor for creating a 1D texture
///
/// All attributes are fixed at creation; a different width means a new
/// texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture1dDesc {
    /// Width in pixels
    pub width: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Usage flags
    pub usage: TextureUsage,
}

impl Texture1dDesc {
    /// Check the descriptor before any allocation happens
    pub fn validate(&self) -> RhiResult<()> {
        if self.width == 0 {
            return Err(RhiError::Validation(
                "Texture1D width must be non-zero".to_string(),
            ));
        }
        validate_format_usage("Texture1D", self.format, self.usage)
    }
}

/// 1D texture resource trait
///
/// Implemented by backend-specific texture types; handles are
/// `Arc<dyn Texture1d>` and release through [`RhiResource::release`].
pub trait Texture1d: RhiResource {
    /// Immutable creation-time descriptor
    fn desc(&self) -> &Texture1dDesc;

    /// Width in pixels
    fn width(&self) -> u32 {
        self.desc().width
    }
}

// ===== TEXTURE 2D =====

/// Descriptor for creating a 2D texture (or 2D texture array)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture2dDesc {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Number of mip levels (>= 1)
    pub mip_levels: u32,
    /// Number of array layers (1 = plain 2D texture)
    pub array_layers: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Usage flags
    pub usage: TextureUsage,
}

impl Texture2dDesc {
    /// Check the descriptor before any allocation happens
    pub fn validate(&self) -> RhiResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RhiError::Validation(format!(
                "Texture2D dimensions must be non-zero (got {}x{})",
                self.width, self.height
            )));
        }
        if self.array_layers == 0 {
            return Err(RhiError::Validation(
                "Texture2D array_layers must be >= 1".to_string(),
            ));
        }
        let deepest = max_mip_levels(self.width.max(self.height));
        if self.mip_levels == 0 || self.mip_levels > deepest {
            return Err(RhiError::Validation(format!(
                "Texture2D mip_levels must be in 1..={} for {}x{} (got {})",
                deepest, self.width, self.height, self.mip_levels
            )));
        }
        validate_format_usage("Texture2D", self.format, self.usage)
    }
}

/// 2D texture resource trait
pub trait Texture2d: RhiResource {
    /// Immutable creation-time descriptor
    fn desc(&self) -> &Texture2dDesc;

    /// Width in pixels
    fn width(&self) -> u32 {
        self.desc().width
    }

    /// Height in pixels
    fn height(&self) -> u32 {
        self.desc().height
    }

    /// True for texture arrays (array_layers > 1)
    fn is_array(&self) -> bool {
        self.desc().array_layers > 1
    }
}

// ===== TEXTURE 3D =====

/// Descriptor for creating a 3D (volume) texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture3dDesc {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Depth in pixels
    pub depth: u32,
    /// Pixel format
    pub format: TextureFormat,
    /// Usage flags
    pub usage: TextureUsage,
}

impl Texture3dDesc {
    /// Check the descriptor before any allocation happens
    pub fn validate(&self) -> RhiResult<()> {
        if self.width == 0 || self.height == 0 || self.depth == 0 {
            return Err(RhiError::Validation(format!(
                "Texture3D dimensions must be non-zero (got {}x{}x{})",
                self.width, self.height, self.depth
            )));
        }
        if self.format.is_depth() || self.usage.contains(TextureUsage::DEPTH_STENCIL) {
            return Err(RhiError::Validation(
                "Texture3D does not support depth/stencil formats".to_string(),
            ));
        }
        validate_format_usage("Texture3D", self.format, self.usage)
    }
}

/// 3D texture resource trait
pub trait Texture3d: RhiResource {
    /// Immutable creation-time descriptor
    fn desc(&self) -> &Texture3dDesc;

    /// Depth in pixels
    fn depth(&self) -> u32 {
        self.desc().depth
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
