/*!
# Aurora RHI

Backend-agnostic Render Hardware Interface: one stable resource/ownership
contract over arbitrary graphics backends, using trait-based dynamic
polymorphism. Backend implementations (hardware-backed or the built-in null
backend) are registered at runtime via the plugin system.

## Architecture

- **DynamicRhi**: factory trait implemented by every backend
- **RhiResource**: base contract of every GPU-like object; `release()` always
  routes destruction back through the allocation context that created the
  resource, regardless of which module holds the handle
- **Texture1d/Texture2d/Texture3d/SamplerState/Buffer/PipelineState**:
  per-kind resource traits layering immutable creation-time attributes over
  the base
- **NullBackend**: the full contract with no device work, for tests and
  headless execution

Backend implementations provide concrete types that implement these traits.
*/

// Internal modules
mod error;
mod subsystem;
pub mod log;
pub mod rhi;

// Main aurora namespace module
pub mod aurora {
    // Error types
    pub use crate::error::{RhiError, RhiResult};

    // Subsystem singleton
    pub use crate::subsystem::Rhi;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
    }

    // RHI sub-module with all resource and backend types
    pub mod rhi {
        pub use crate::rhi::*;
    }
}
