//! Pipeline state descriptor and resource trait

use crate::error::{RhiError, RhiResult};
use crate::rhi::resource::RhiResource;

/// Primitive assembly topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    PointList,
    LineList,
    LineStrip,
    TriangleList,
    TriangleStrip,
}

/// Face culling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullMode {
    None,
    Front,
    Back,
}

/// Winding order considered front-facing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontFace {
    Clockwise,
    CounterClockwise,
}

/// Depth comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Never,
    Less,
    Equal,
    LessOrEqual,
    Greater,
    NotEqual,
    GreaterOrEqual,
    Always,
}

/// Depth test/write state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthStateDesc {
    /// Enable the depth test
    pub test_enabled: bool,
    /// Enable depth writes
    pub write_enabled: bool,
    /// Comparison used when the test is enabled
    pub compare_op: CompareOp,
}

impl Default for DepthStateDesc {
    fn default() -> Self {
        Self {
            test_enabled: true,
            write_enabled: true,
            compare_op: CompareOp::Less,
        }
    }
}

/// Descriptor for creating a pipeline state
///
/// Fixed-function state only; shader-stage contents are backend-specific and
/// outside this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineStateDesc {
    /// Primitive topology
    pub topology: PrimitiveTopology,
    /// Face culling mode
    pub cull_mode: CullMode,
    /// Front-face winding
    pub front_face: FrontFace,
    /// Depth state
    pub depth: DepthStateDesc,
}

impl Default for PipelineStateDesc {
    fn default() -> Self {
        Self {
            topology: PrimitiveTopology::TriangleList,
            cull_mode: CullMode::Back,
            front_face: FrontFace::CounterClockwise,
            depth: DepthStateDesc::default(),
        }
    }
}

impl PipelineStateDesc {
    /// Check the descriptor before any allocation happens
    pub fn validate(&self) -> RhiResult<()> {
        if self.depth.write_enabled && !self.depth.test_enabled {
            return Err(RhiError::Validation(
                "PipelineState depth writes require the depth test to be enabled".to_string(),
            ));
        }
        Ok(())
    }
}

/// Pipeline state resource trait
///
/// Implemented by backend-specific pipeline types; handles are
/// `Arc<dyn PipelineState>` and release through [`RhiResource::release`].
pub trait PipelineState: RhiResource {
    /// Immutable creation-time descriptor
    fn desc(&self) -> &PipelineStateDesc;
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
