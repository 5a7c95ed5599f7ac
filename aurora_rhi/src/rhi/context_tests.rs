//! Unit tests for the allocation context
//!
//! Tests registration, release, sealing, accounting counters, and the
//! leak report used by shutdown diagnostics.

use crate::error::RhiError;
use crate::rhi::context::{AllocationContext, BackendId};
use crate::rhi::resource::ResourceKind;

// ============================================================================
// BACKEND ID TESTS
// ============================================================================

#[test]
fn test_backend_ids_are_unique() {
    let ctx_a = AllocationContext::new("null", true);
    let ctx_b = AllocationContext::new("null", true);
    assert_ne!(ctx_a.backend_id(), ctx_b.backend_id());
}

#[test]
fn test_backend_id_display() {
    let ctx = AllocationContext::new("null", true);
    let display = format!("{}", ctx.backend_id());
    assert!(display.starts_with("backend#"));
    assert!(display.contains(&ctx.backend_id().raw().to_string()));
}

#[test]
fn test_backend_id_copy_eq() {
    let ctx = AllocationContext::new("null", true);
    let id: BackendId = ctx.backend_id();
    let copy = id;
    assert_eq!(id, copy);
}

// ============================================================================
// REGISTER / RELEASE TESTS
// ============================================================================

#[test]
fn test_register_increments_live_count() {
    let ctx = AllocationContext::new("null", true);
    assert_eq!(ctx.live_count(), 0);

    let (id, _) = ctx.register(ResourceKind::BUFFER, None).unwrap();
    assert_eq!(ctx.live_count(), 1);

    ctx.release(id, ResourceKind::BUFFER).unwrap();
    assert_eq!(ctx.live_count(), 0);
}

#[test]
fn test_register_stores_debug_name_with_debug_layer() {
    let ctx = AllocationContext::new("null", true);
    let (_, name) = ctx.register(ResourceKind::TEXTURE_2D, Some("albedo")).unwrap();
    assert_eq!(name.as_deref(), Some("albedo"));
}

#[test]
fn test_register_discards_debug_name_without_debug_layer() {
    let ctx = AllocationContext::new("null", false);
    let (_, name) = ctx.register(ResourceKind::TEXTURE_2D, Some("albedo")).unwrap();
    assert!(name.is_none());
}

#[test]
fn test_double_release_with_debug_layer_is_use_after_destroy() {
    let ctx = AllocationContext::new("null", true);
    let (id, _) = ctx.register(ResourceKind::SAMPLER_STATE, None).unwrap();

    ctx.release(id, ResourceKind::SAMPLER_STATE).unwrap();
    let second = ctx.release(id, ResourceKind::SAMPLER_STATE);
    assert!(matches!(second, Err(RhiError::UseAfterDestroy(_))));
}

#[test]
fn test_double_release_without_debug_layer_is_noop() {
    let ctx = AllocationContext::new("null", false);
    let (id, _) = ctx.register(ResourceKind::SAMPLER_STATE, None).unwrap();

    ctx.release(id, ResourceKind::SAMPLER_STATE).unwrap();
    assert!(ctx.release(id, ResourceKind::SAMPLER_STATE).is_ok());
    assert_eq!(ctx.live_count(), 0);
}

// ============================================================================
// SEAL TESTS
// ============================================================================

#[test]
fn test_sealed_context_rejects_registration() {
    let ctx = AllocationContext::new("null", true);
    ctx.seal();

    let result = ctx.register(ResourceKind::BUFFER, None);
    assert!(matches!(result, Err(RhiError::InvalidState(_))));
    assert_eq!(ctx.live_count(), 0);
}

#[test]
fn test_sealed_context_still_releases() {
    let ctx = AllocationContext::new("null", true);
    let (id, _) = ctx.register(ResourceKind::BUFFER, None).unwrap();

    // Resources created before shutdown must still drain afterwards
    ctx.seal();
    ctx.release(id, ResourceKind::BUFFER).unwrap();
    assert_eq!(ctx.live_count(), 0);
}

// ============================================================================
// STATS AND LEAK REPORT TESTS
// ============================================================================

#[test]
fn test_stats_counters() {
    let ctx = AllocationContext::new("null", true);
    let (id_a, _) = ctx.register(ResourceKind::BUFFER, None).unwrap();
    let (_id_b, _) = ctx.register(ResourceKind::TEXTURE_2D, None).unwrap();
    ctx.release(id_a, ResourceKind::BUFFER).unwrap();

    let stats = ctx.stats();
    assert_eq!(stats.live, 1);
    assert_eq!(stats.created_total, 2);
    assert_eq!(stats.released_total, 1);
}

#[test]
fn test_leak_report_lists_leaked_resources() {
    let ctx = AllocationContext::new("null", true);
    ctx.register(ResourceKind::TEXTURE_2D, Some("shadow_map")).unwrap();
    ctx.register(ResourceKind::BUFFER, None).unwrap();

    let report = ctx.leak_report();
    assert_eq!(report.len(), 2);
    assert!(report.iter().any(|line| line.contains("Texture2D") && line.contains("shadow_map")));
    assert!(report.iter().any(|line| line.contains("Buffer") && line.contains("unnamed")));
}

#[test]
fn test_leak_report_empty_when_all_released() {
    let ctx = AllocationContext::new("null", true);
    let (id, _) = ctx.register(ResourceKind::PIPELINE_STATE, None).unwrap();
    ctx.release(id, ResourceKind::PIPELINE_STATE).unwrap();
    assert!(ctx.leak_report().is_empty());
}
