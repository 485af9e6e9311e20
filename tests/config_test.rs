//! Tests for configuration validation and allocator construction.

use tenant_fairshare::builders::build_allocator;
use tenant_fairshare::config::{default_capacity, AllocatorConfig, RuntimeConfig};
use tenant_fairshare::core::AllocationError;

#[test]
fn test_default_config_is_valid() {
    let cfg = AllocatorConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.total_capacity, default_capacity());
    assert!(cfg.total_capacity >= 1);
}

#[test]
fn test_negative_capacity_rejected_at_boundary() {
    let cfg = AllocatorConfig {
        total_capacity: -1,
        ..AllocatorConfig::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(AllocationError::InvalidCapacity(-1))
    ));
}

#[test]
fn test_zero_capacity_is_valid() {
    // Zero capacity admits nothing but is not a configuration error.
    let cfg = AllocatorConfig {
        total_capacity: 0,
        ..AllocatorConfig::default()
    };
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.capacity().unwrap(), 0);
}

#[test]
fn test_oversized_capacity_rejected() {
    let cfg = AllocatorConfig {
        total_capacity: i64::from(u32::MAX) + 1,
        ..AllocatorConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_from_json_str_parses_and_validates() {
    let cfg = AllocatorConfig::from_json_str(
        r#"{"total_capacity": 100, "audit_buffer": 32, "runtime": "actor_thread"}"#,
    )
    .unwrap();
    assert_eq!(cfg.total_capacity, 100);
    assert_eq!(cfg.audit_buffer, 32);
    assert!(matches!(cfg.runtime, RuntimeConfig::ActorThread));
}

#[test]
fn test_from_json_str_rejects_negative_capacity() {
    let err = AllocatorConfig::from_json_str(r#"{"total_capacity": -5, "runtime": "shared"}"#)
        .unwrap_err();
    assert!(matches!(err, AllocationError::InvalidCapacity(-5)));
}

#[test]
fn test_from_json_str_rejects_malformed_input() {
    let err = AllocatorConfig::from_json_str("not json").unwrap_err();
    assert!(matches!(err, AllocationError::InvalidConfig(_)));
}

#[test]
fn test_audit_buffer_defaults_to_disabled() {
    let cfg =
        AllocatorConfig::from_json_str(r#"{"total_capacity": 4, "runtime": "shared"}"#).unwrap();
    assert_eq!(cfg.audit_buffer, 0);
}

#[test]
fn test_build_allocator_from_valid_config() {
    let cfg = AllocatorConfig {
        total_capacity: 12,
        audit_buffer: 16,
        runtime: RuntimeConfig::Shared,
    };
    let (allocator, capacity) = build_allocator(&cfg).unwrap();
    assert_eq!(capacity, 12);

    let result = allocator.allocate(
        &["a".into()],
        &tenant_fairshare::core::AllocationSnapshot::default(),
        capacity,
    );
    assert!(result.selected.is_some());
}

#[test]
fn test_build_allocator_rejects_invalid_config() {
    let cfg = AllocatorConfig {
        total_capacity: -7,
        ..AllocatorConfig::default()
    };
    assert!(build_allocator(&cfg).is_err());
}
