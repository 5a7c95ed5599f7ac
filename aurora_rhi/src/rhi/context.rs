//! Allocation context and live-resource accounting
//!
//! Every backend exclusively owns one AllocationContext. All resources the
//! backend creates are registered here at construction time and must be
//! released through the same context, regardless of which subsystem holds
//! the handle. The generational keys of the live table make double-release
//! and use-after-destroy detectable without extra bookkeeping.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use slotmap::SlotMap;

use crate::error::{RhiError, RhiResult};
use crate::rhi::resource::{ResourceId, ResourceKind};
use crate::rhi_trace;

/// Process-unique identifier of a backend instance
///
/// Stored in every ResourceCore as the back-reference to the creating
/// backend, so harnesses can verify that a resource belongs to the backend
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackendId(u64);

static NEXT_BACKEND_ID: AtomicU64 = AtomicU64::new(1);

impl BackendId {
    /// Allocate the next process-unique backend id
    pub(crate) fn next() -> Self {
        Self(NEXT_BACKEND_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value (for diagnostics)
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BackendId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "backend#{}", self.0)
    }
}

/// Bookkeeping record of one live resource
struct ResourceRecord {
    kind: ResourceKind,
    debug_name: Option<String>,
}

/// Counters exposed for diagnostics and leak detection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextStats {
    /// Resources currently live
    pub live: usize,
    /// Resources registered since the context was created
    pub created_total: u64,
    /// Resources released since the context was created
    pub released_total: u64,
}

struct ContextInner {
    live: SlotMap<ResourceId, ResourceRecord>,
    /// Cleared when the owning backend begins shutting down; registration
    /// is rejected deterministically from that point on.
    accepting: bool,
    created_total: u64,
    released_total: u64,
}

/// The memory/bookkeeping arena a backend uses for every resource it creates
///
/// Exclusively owned by one backend instance; never shared or aliased across
/// backends. Resources capture an `Arc` to this context at construction and
/// route their release through it.
pub struct AllocationContext {
    backend_id: BackendId,
    backend_name: &'static str,
    debug_layer: bool,
    inner: Mutex<ContextInner>,
}

impl AllocationContext {
    /// Create the context for a new backend instance
    ///
    /// Intended for backend implementations only; engine code never
    /// constructs contexts directly.
    pub fn new(backend_name: &'static str, debug_layer: bool) -> Self {
        Self {
            backend_id: BackendId::next(),
            backend_name,
            debug_layer,
            inner: Mutex::new(ContextInner {
                live: SlotMap::with_key(),
                accepting: true,
                created_total: 0,
                released_total: 0,
            }),
        }
    }

    /// Id of the backend that owns this context
    pub fn backend_id(&self) -> BackendId {
        self.backend_id
    }

    /// Name of the backend that owns this context
    pub fn backend_name(&self) -> &'static str {
        self.backend_name
    }

    /// True when debug instrumentation (debug names, use-after-destroy
    /// detection) is enabled for this context
    pub fn debug_layer_enabled(&self) -> bool {
        self.debug_layer
    }

    /// Register a new resource in the live table
    ///
    /// Returns the generational id plus the debug name to store on the
    /// resource (None when the debug layer is disabled: the name is accepted
    /// and discarded without allocating).
    pub(crate) fn register(
        &self,
        kind: ResourceKind,
        debug_name: Option<&str>,
    ) -> RhiResult<(ResourceId, Option<String>)> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.accepting {
            return Err(RhiError::InvalidState(format!(
                "backend '{}' is shutting down; {} creation rejected",
                self.backend_name, kind
            )));
        }

        let stored_name = if self.debug_layer {
            debug_name.map(str::to_string)
        } else {
            None
        };
        let id = inner.live.insert(ResourceRecord {
            kind,
            debug_name: stored_name.clone(),
        });
        inner.created_total += 1;
        rhi_trace!(
            "aurora::rhi::context",
            "{}: registered {} ({:?})",
            self.backend_id,
            kind,
            id
        );
        Ok((id, stored_name))
    }

    /// Release a resource previously registered with this context
    ///
    /// A missing id means the resource was already released. With the debug
    /// layer enabled this surfaces as UseAfterDestroy; without it the call
    /// is a logged no-op.
    pub(crate) fn release(&self, id: ResourceId, kind: ResourceKind) -> RhiResult<()> {
        let mut inner = self.inner.lock().unwrap();
        match inner.live.remove(id) {
            Some(_) => {
                inner.released_total += 1;
                rhi_trace!(
                    "aurora::rhi::context",
                    "{}: released {} ({:?})",
                    self.backend_id,
                    kind,
                    id
                );
                Ok(())
            }
            None if self.debug_layer => Err(RhiError::UseAfterDestroy(format!(
                "{} ({:?}) referenced after destruction on backend '{}'",
                kind, id, self.backend_name
            ))),
            None => Ok(()),
        }
    }

    /// Stop accepting registrations (backend entered ShuttingDown)
    pub(crate) fn seal(&self) {
        self.inner.lock().unwrap().accepting = false;
    }

    /// Number of resources currently live
    pub fn live_count(&self) -> usize {
        self.inner.lock().unwrap().live.len()
    }

    /// Snapshot of the accounting counters
    pub fn stats(&self) -> ContextStats {
        let inner = self.inner.lock().unwrap();
        ContextStats {
            live: inner.live.len(),
            created_total: inner.created_total,
            released_total: inner.released_total,
        }
    }

    /// One line per leaked resource, for loud shutdown diagnostics
    pub fn leak_report(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        inner
            .live
            .values()
            .map(|record| match &record.debug_name {
                Some(name) => format!("{} '{}'", record.kind, name),
                None => format!("{} (unnamed)", record.kind),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
