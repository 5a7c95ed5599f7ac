//! Buffer descriptor and resource trait

use bitflags::bitflags;

use crate::error::{RhiError, RhiResult};
use crate::rhi::resource::RhiResource;

bitflags! {
    /// Buffer usage flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BufferUsage: u32 {
        /// Vertex buffer
        const VERTEX = 1 << 0;
        /// Index buffer
        const INDEX = 1 << 1;
        /// Uniform/constant buffer
        const UNIFORM = 1 << 2;
        /// Storage buffer
        const STORAGE = 1 << 3;
        /// Source of a copy
        const COPY_SRC = 1 << 4;
        /// Destination of a copy
        const COPY_DST = 1 << 5;
    }
}

/// Descriptor for creating a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferDesc {
    /// Size in bytes
    pub size: u64,
    /// Usage flags
    pub usage: BufferUsage,
}

impl BufferDesc {
    /// Check the descriptor before any allocation happens
    pub fn validate(&self) -> RhiResult<()> {
        if self.size == 0 {
            return Err(RhiError::Validation(
                "Buffer size must be non-zero".to_string(),
            ));
        }
        if self.usage.is_empty() {
            return Err(RhiError::Validation(
                "Buffer usage flags must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Buffer resource trait
///
/// Implemented by backend-specific buffer types; handles are
/// `Arc<dyn Buffer>` and release through [`RhiResource::release`].
pub trait Buffer: RhiResource {
    /// Immutable creation-time descriptor
    fn desc(&self) -> &BufferDesc;

    /// Size in bytes
    fn size(&self) -> u64 {
        self.desc().size
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
