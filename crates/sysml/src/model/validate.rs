//! Admission checks run before any store mutation
//!
//! Element checks: the key's kind must match the element's kind.
//! Relationship checks, in order: the key's kind matches the record's kind,
//! both endpoints exist in the element store, and their kinds satisfy the
//! schema rule for the relationship kind.

use super::element::Element;
use super::key::{ElementKey, RelationshipKey};
use super::relationship::Relationship;
use super::schema::ElementKind;
use super::store::KeyedStore;
use crate::core::{Endpoint, ModelError};

/// Check that `element` may be stored under `key`
pub fn check_element(key: &ElementKey, element: &Element) -> Result<(), ModelError> {
    // label keys only ever hold packages
    let expected = key.kind().unwrap_or(ElementKind::Package);
    if element.kind() != expected {
        return Err(ModelError::type_mismatch(
            key.to_string(),
            expected.type_name(),
            element.kind().type_name(),
        ));
    }
    Ok(())
}

/// Check that `relationship` may be stored under `key` given the current elements
pub fn check_relationship(
    key: &RelationshipKey,
    relationship: &Relationship,
    elements: &KeyedStore<ElementKey, Element>,
) -> Result<(), ModelError> {
    if key.kind != relationship.kind {
        return Err(ModelError::type_mismatch(
            key.to_string(),
            key.kind.name(),
            relationship.kind.name(),
        ));
    }

    let endpoint_kind = |endpoint: Endpoint, element_key: &ElementKey| {
        elements
            .get(element_key)
            .map(Element::kind)
            .ok_or_else(|| ModelError::ReferentialIntegrity {
                relationship: key.to_string(),
                endpoint,
                element: element_key.to_string(),
            })
    };
    let source = endpoint_kind(Endpoint::Source, &relationship.source)?;
    let target = endpoint_kind(Endpoint::Target, &relationship.target)?;

    if !relationship.kind.rule().allows(source, target) {
        return Err(ModelError::SchemaViolation {
            kind: relationship.kind.name().to_string(),
            source_type: source.type_name().to_string(),
            target_type: target.type_name().to_string(),
        });
    }
    Ok(())
}
