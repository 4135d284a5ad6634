//! Tests for logging initialization
//!
//! Only one global subscriber can be installed per process, so most calls
//! here are allowed to fail with "already initialized"; they must not panic.

use std::str::FromStr;
use sysml::core::logging::{init_logging, LogFormat};
use sysml::prelude::*;

#[test]
fn test_log_format_variants() {
    let variants = LogFormat::variants();
    assert!(variants.contains(&"compact"));
    assert!(variants.contains(&"pretty"));
    assert!(variants.contains(&"json"));
    for name in variants {
        assert!(LogFormat::from_str(name).is_ok());
    }
}

#[test]
fn test_init_logging_with_levels_and_formats() {
    let _ = init_logging(Some("trace"), Some("compact"));
    let _ = init_logging(Some("sysml=debug"), Some("pretty"));
    let _ = init_logging(Some("off"), Some("json"));
    let _ = init_logging(None, None);
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("invalid_format"));
    assert!(result.is_err());
}

#[test]
fn test_model_operations_with_subscriber_installed() {
    let _ = init_logging(Some("trace"), Some("compact"));

    let mut model = Model::new();
    model.add_elements([Block::new("Engine"), Block::new("Wheel")]);
    model
        .add_relationship(Relationship::new(
            RelationshipKind::PartProperty,
            "block-1",
            "block-2",
        ))
        .unwrap();
    assert!(model.set("bogus!!", Block::new("x")).is_err());
    assert_eq!(model.element_count(), 2);
}
