//! Unit tests for texture formats and descriptor validation

use crate::error::RhiError;
use crate::rhi::texture::{
    Texture1dDesc, Texture2dDesc, Texture3dDesc, TextureFormat, TextureUsage,
};

// ============================================================================
// FORMAT TESTS
// ============================================================================

#[test]
fn test_format_bytes_per_pixel() {
    assert_eq!(TextureFormat::R8G8B8A8_SRGB.bytes_per_pixel(), 4);
    assert_eq!(TextureFormat::R8G8B8A8_UNORM.bytes_per_pixel(), 4);
    assert_eq!(TextureFormat::B8G8R8A8_SRGB.bytes_per_pixel(), 4);
    assert_eq!(TextureFormat::B8G8R8A8_UNORM.bytes_per_pixel(), 4);
    assert_eq!(TextureFormat::D16_UNORM.bytes_per_pixel(), 2);
    assert_eq!(TextureFormat::D32_FLOAT.bytes_per_pixel(), 4);
    assert_eq!(TextureFormat::D24_UNORM_S8_UINT.bytes_per_pixel(), 4);
}

#[test]
fn test_format_is_depth() {
    assert!(TextureFormat::D16_UNORM.is_depth());
    assert!(TextureFormat::D32_FLOAT.is_depth());
    assert!(TextureFormat::D24_UNORM_S8_UINT.is_depth());
    assert!(!TextureFormat::R8G8B8A8_UNORM.is_depth());
    assert!(!TextureFormat::B8G8R8A8_SRGB.is_depth());
}

// ============================================================================
// TEXTURE 1D DESC TESTS
// ============================================================================

fn valid_1d() -> Texture1dDesc {
    Texture1dDesc {
        width: 256,
        format: TextureFormat::R8G8B8A8_UNORM,
        usage: TextureUsage::SAMPLED,
    }
}

#[test]
fn test_texture1d_valid_desc() {
    assert!(valid_1d().validate().is_ok());
}

#[test]
fn test_texture1d_zero_width_rejected() {
    let desc = Texture1dDesc { width: 0, ..valid_1d() };
    assert!(matches!(desc.validate(), Err(RhiError::Validation(_))));
}

#[test]
fn test_texture1d_empty_usage_rejected() {
    let desc = Texture1dDesc { usage: TextureUsage::empty(), ..valid_1d() };
    assert!(matches!(desc.validate(), Err(RhiError::Validation(_))));
}

#[test]
fn test_texture1d_depth_format_needs_depth_usage() {
    let desc = Texture1dDesc {
        format: TextureFormat::D32_FLOAT,
        usage: TextureUsage::SAMPLED,
        ..valid_1d()
    };
    assert!(matches!(desc.validate(), Err(RhiError::Validation(_))));
}

// ============================================================================
// TEXTURE 2D DESC TESTS
// ============================================================================

fn valid_2d() -> Texture2dDesc {
    Texture2dDesc {
        width: 1024,
        height: 512,
        mip_levels: 1,
        array_layers: 1,
        format: TextureFormat::R8G8B8A8_SRGB,
        usage: TextureUsage::SAMPLED,
    }
}

#[test]
fn test_texture2d_valid_desc() {
    assert!(valid_2d().validate().is_ok());
}

#[test]
fn test_texture2d_zero_dimension_rejected() {
    let desc = Texture2dDesc { height: 0, ..valid_2d() };
    assert!(matches!(desc.validate(), Err(RhiError::Validation(_))));
}

#[test]
fn test_texture2d_zero_layers_rejected() {
    let desc = Texture2dDesc { array_layers: 0, ..valid_2d() };
    assert!(matches!(desc.validate(), Err(RhiError::Validation(_))));
}

#[test]
fn test_texture2d_mip_levels_bounds() {
    // 1024x512 allows mips down to 1x1: 11 levels
    let full_chain = Texture2dDesc { mip_levels: 11, ..valid_2d() };
    assert!(full_chain.validate().is_ok());

    let too_deep = Texture2dDesc { mip_levels: 12, ..valid_2d() };
    assert!(matches!(too_deep.validate(), Err(RhiError::Validation(_))));

    let zero = Texture2dDesc { mip_levels: 0, ..valid_2d() };
    assert!(matches!(zero.validate(), Err(RhiError::Validation(_))));
}

#[test]
fn test_texture2d_depth_stencil_usage_needs_depth_format() {
    let desc = Texture2dDesc {
        usage: TextureUsage::DEPTH_STENCIL,
        ..valid_2d()
    };
    assert!(matches!(desc.validate(), Err(RhiError::Validation(_))));
}

#[test]
fn test_texture2d_depth_attachment_valid() {
    let desc = Texture2dDesc {
        format: TextureFormat::D24_UNORM_S8_UINT,
        usage: TextureUsage::DEPTH_STENCIL | TextureUsage::SAMPLED,
        ..valid_2d()
    };
    assert!(desc.validate().is_ok());
}

#[test]
fn test_texture2d_render_target_with_depth_format_rejected() {
    let desc = Texture2dDesc {
        format: TextureFormat::D32_FLOAT,
        usage: TextureUsage::RENDER_TARGET | TextureUsage::DEPTH_STENCIL,
        ..valid_2d()
    };
    assert!(matches!(desc.validate(), Err(RhiError::Validation(_))));
}

// ============================================================================
// TEXTURE 3D DESC TESTS
// ============================================================================

fn valid_3d() -> Texture3dDesc {
    Texture3dDesc {
        width: 64,
        height: 64,
        depth: 64,
        format: TextureFormat::R8G8B8A8_UNORM,
        usage: TextureUsage::SAMPLED,
    }
}

#[test]
fn test_texture3d_valid_desc() {
    assert!(valid_3d().validate().is_ok());
}

#[test]
fn test_texture3d_zero_depth_rejected() {
    let desc = Texture3dDesc { depth: 0, ..valid_3d() };
    assert!(matches!(desc.validate(), Err(RhiError::Validation(_))));
}

#[test]
fn test_texture3d_depth_format_rejected() {
    let desc = Texture3dDesc {
        format: TextureFormat::D16_UNORM,
        usage: TextureUsage::DEPTH_STENCIL,
        ..valid_3d()
    };
    assert!(matches!(desc.validate(), Err(RhiError::Validation(_))));
}
