/// RHI module - resource base, concrete kinds, backend contract, null backend

// Module declarations
pub mod resource;
pub mod context;
pub mod texture;
pub mod sampler;
pub mod buffer;
pub mod pipeline;
pub mod dynamic_rhi;
pub mod null_backend;

// Re-export the whole surface at the module root
pub use resource::*;
pub use context::*;
pub use texture::*;
pub use sampler::*;
pub use buffer::*;
pub use pipeline::*;
pub use dynamic_rhi::*;
pub use null_backend::*;
