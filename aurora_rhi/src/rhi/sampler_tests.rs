//! Unit tests for sampler state descriptor validation

use crate::error::RhiError;
use crate::rhi::sampler::{AddressMode, FilterMode, SamplerStateDesc};

#[test]
fn test_default_desc_is_valid() {
    let desc = SamplerStateDesc::default();
    assert!(desc.validate().is_ok());
    assert_eq!(desc.min_filter, FilterMode::Linear);
    assert_eq!(desc.address_u, AddressMode::Repeat);
    assert!(!desc.is_anisotropic());
}

#[test]
fn test_anisotropic_desc_is_valid() {
    let desc = SamplerStateDesc {
        max_anisotropy: 16.0,
        ..SamplerStateDesc::default()
    };
    assert!(desc.validate().is_ok());
    assert!(desc.is_anisotropic());
}

#[test]
fn test_anisotropy_below_one_rejected() {
    let desc = SamplerStateDesc {
        max_anisotropy: 0.5,
        ..SamplerStateDesc::default()
    };
    assert!(matches!(desc.validate(), Err(RhiError::Validation(_))));
}

#[test]
fn test_anisotropy_above_sixteen_rejected() {
    let desc = SamplerStateDesc {
        max_anisotropy: 32.0,
        ..SamplerStateDesc::default()
    };
    assert!(matches!(desc.validate(), Err(RhiError::Validation(_))));
}

#[test]
fn test_anisotropy_nan_rejected() {
    let desc = SamplerStateDesc {
        max_anisotropy: f32::NAN,
        ..SamplerStateDesc::default()
    };
    assert!(matches!(desc.validate(), Err(RhiError::Validation(_))));
}

#[test]
fn test_inverted_lod_range_rejected() {
    let desc = SamplerStateDesc {
        lod_min: 4.0,
        lod_max: 0.0,
        ..SamplerStateDesc::default()
    };
    assert!(matches!(desc.validate(), Err(RhiError::Validation(_))));
}

#[test]
fn test_nan_lod_rejected() {
    let desc = SamplerStateDesc {
        lod_min: f32::NAN,
        ..SamplerStateDesc::default()
    };
    assert!(matches!(desc.validate(), Err(RhiError::Validation(_))));
}

#[test]
fn test_clamped_lod_range_valid() {
    let desc = SamplerStateDesc {
        lod_min: 0.0,
        lod_max: 8.0,
        mip_filter: FilterMode::Nearest,
        address_w: AddressMode::ClampToBorder,
        ..SamplerStateDesc::default()
    };
    assert!(desc.validate().is_ok());
}
