//! Structured store keys
//!
//! Internally a key is a kind tag plus a sequence number. The
//! `"<kindName>-<seq>"` string form only appears at the API boundary:
//! [`Key::parse`] on the way in, `Display` on the way out.

use std::fmt;
use std::str::FromStr;

use super::schema::{ElementKind, RelationshipKind};
use crate::core::{split_key, ModelError};

/// Key of an entry in the element store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKey {
    /// Generated form, e.g. `block-1`
    Sequenced { kind: ElementKind, seq: u32 },
    /// Package label used verbatim as the key
    Named(String),
}

impl ElementKey {
    pub fn sequenced(kind: ElementKind, seq: u32) -> Self {
        Self::Sequenced { kind, seq }
    }

    /// Kind encoded in the key, `None` for label keys
    pub fn kind(&self) -> Option<ElementKind> {
        match self {
            ElementKey::Sequenced { kind, .. } => Some(*kind),
            ElementKey::Named(_) => None,
        }
    }

    /// Parse `<elementKind>-<seq>`, or `None` if the string is not of that form
    pub fn parse_sequenced(s: &str) -> Option<Self> {
        let (name, seq) = split_key(s)?;
        let kind = ElementKind::from_name(&name)?;
        (seq > 0).then_some(Self::Sequenced { kind, seq })
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKey::Sequenced { kind, seq } => write!(f, "{}-{}", kind, seq),
            ElementKey::Named(label) => f.write_str(label),
        }
    }
}

/// Strings that look like element keys become `Sequenced`, anything else is
/// taken as a package label.
impl From<&str> for ElementKey {
    fn from(s: &str) -> Self {
        Self::parse_sequenced(s).unwrap_or_else(|| ElementKey::Named(s.to_string()))
    }
}

impl From<String> for ElementKey {
    fn from(s: String) -> Self {
        match Self::parse_sequenced(&s) {
            Some(key) => key,
            None => ElementKey::Named(s),
        }
    }
}

impl From<&ElementKey> for ElementKey {
    fn from(key: &ElementKey) -> Self {
        key.clone()
    }
}

/// Key of an entry in the relationship store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelationshipKey {
    pub kind: RelationshipKind,
    pub seq: u32,
}

impl RelationshipKey {
    pub fn new(kind: RelationshipKind, seq: u32) -> Self {
        Self { kind, seq }
    }
}

impl fmt::Display for RelationshipKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.seq)
    }
}

/// A parsed store key, routed to the element or relationship store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Element(ElementKey),
    Relationship(RelationshipKey),
}

impl Key {
    /// Parse and route a `"<kind>-<seq>"` key string
    ///
    /// Element kinds are tried first, then relationship kinds. The sequence
    /// number must be at least 1.
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        let (name, seq) = split_key(s)
            .filter(|(_, seq)| *seq > 0)
            .ok_or_else(|| ModelError::invalid_key(s))?;

        if let Some(kind) = ElementKind::from_name(&name) {
            return Ok(Key::Element(ElementKey::Sequenced { kind, seq }));
        }
        if let Some(kind) = RelationshipKind::from_name(&name) {
            return Ok(Key::Relationship(RelationshipKey { kind, seq }));
        }
        Err(ModelError::invalid_key(s))
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Key::Element(_))
    }

    pub fn is_relationship(&self) -> bool {
        matches!(self, Key::Relationship(_))
    }
}

impl FromStr for Key {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::parse(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Element(key) => fmt::Display::fmt(key, f),
            Key::Relationship(key) => fmt::Display::fmt(key, f),
        }
    }
}

impl From<ElementKey> for Key {
    fn from(key: ElementKey) -> Self {
        Key::Element(key)
    }
}

impl From<RelationshipKey> for Key {
    fn from(key: RelationshipKey) -> Self {
        Key::Relationship(key)
    }
}

/// True iff `key` is `<elementKind>-<seq>`
pub fn is_valid_element_key(key: &str) -> bool {
    matches!(Key::parse(key), Ok(Key::Element(_)))
}

/// True iff `key` is `<relationshipKind>-<seq>`
pub fn is_valid_relationship_key(key: &str) -> bool {
    matches!(Key::parse(key), Ok(Key::Relationship(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes_element_keys() {
        let key = Key::parse("requirement-12").unwrap();
        assert_eq!(
            key,
            Key::Element(ElementKey::sequenced(ElementKind::Requirement, 12))
        );
        assert_eq!(key.to_string(), "requirement-12");
    }

    #[test]
    fn test_parse_routes_relationship_keys() {
        let key = Key::parse("flowProperty-3").unwrap();
        assert_eq!(
            key,
            Key::Relationship(RelationshipKey::new(RelationshipKind::FlowProperty, 3))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_kind_and_zero() {
        assert_eq!(
            Key::parse("widget-1").unwrap_err(),
            ModelError::invalid_key("widget-1")
        );
        assert!(Key::parse("block-0").is_err());
        assert!(Key::parse("Block-1").is_err());
    }

    #[test]
    fn test_element_key_from_str() {
        assert_eq!(
            ElementKey::from("block-2"),
            ElementKey::sequenced(ElementKind::Block, 2)
        );
        assert_eq!(
            ElementKey::from("Vehicle"),
            ElementKey::Named("Vehicle".to_string())
        );
        // relationship-shaped strings are not element keys
        assert_eq!(
            ElementKey::from("association-1"),
            ElementKey::Named("association-1".to_string())
        );
    }

    #[test]
    fn test_key_predicates() {
        assert!(is_valid_element_key("package-1"));
        assert!(!is_valid_element_key("containment-1"));
        assert!(is_valid_relationship_key("containment-1"));
        assert!(!is_valid_relationship_key("bogus!!"));
    }
}
