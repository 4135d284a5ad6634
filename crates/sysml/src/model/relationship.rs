//! Relationship records
//!
//! A relationship is a directed, typed edge between two element keys. Extra
//! attributes (multiplicities, flow item types, ...) are kept as JSON values
//! and never interpreted by the model.

use std::collections::BTreeMap;

use serde_json::Value;

use super::key::ElementKey;
use super::schema::RelationshipKind;
use crate::core::ModelError;

/// A typed edge between two elements of the model
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    pub kind: RelationshipKind,
    pub source: ElementKey,
    pub target: ElementKey,
    pub attributes: BTreeMap<String, Value>,
}

impl Relationship {
    pub fn new(
        kind: RelationshipKind,
        source: impl Into<ElementKey>,
        target: impl Into<ElementKey>,
    ) -> Self {
        Self {
            kind,
            source: source.into(),
            target: target.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Build from a kind name such as `"partProperty"`
    pub fn named(
        kind: &str,
        source: impl Into<ElementKey>,
        target: impl Into<ElementKey>,
    ) -> Result<Self, ModelError> {
        Ok(Self::new(kind.parse()?, source, target))
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schema::ElementKind;

    #[test]
    fn test_named_relationship() {
        let rel = Relationship::named("partProperty", "block-1", "block-2")
            .unwrap()
            .with_attribute("multiplicity", "4");
        assert_eq!(rel.kind, RelationshipKind::PartProperty);
        assert_eq!(rel.source, ElementKey::sequenced(ElementKind::Block, 1));
        assert_eq!(rel.attribute("multiplicity"), Some(&Value::from("4")));
        assert!(rel.attribute("direction").is_none());
    }

    #[test]
    fn test_named_relationship_unknown_kind() {
        let err = Relationship::named("satisfy", "block-1", "requirement-1").unwrap_err();
        assert!(matches!(err, ModelError::UnknownKind { .. }));
    }
}
