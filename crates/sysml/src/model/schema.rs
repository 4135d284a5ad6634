//! Schema tables
//!
//! The registered element kinds and, for each relationship kind, the element
//! kinds allowed at its source and target. Both tables are closed enums, so
//! the lookup is an exhaustive `match` resolved at compile time.

use std::fmt;
use std::str::FromStr;

use crate::core::ModelError;

/// Registered element kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    /// `block` -> `Block`
    Block,
    /// `requirement` -> `Requirement`
    Requirement,
    /// `constraint` -> `ConstraintBlock`
    Constraint,
    /// `package` -> `Package`
    Package,
}

impl ElementKind {
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Block,
        ElementKind::Requirement,
        ElementKind::Constraint,
        ElementKind::Package,
    ];

    /// Name used in keys, e.g. `block` in `block-3`
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Block => "block",
            ElementKind::Requirement => "requirement",
            ElementKind::Constraint => "constraint",
            ElementKind::Package => "package",
        }
    }

    /// Name of the element type registered for this kind
    pub fn type_name(self) -> &'static str {
        match self {
            ElementKind::Block => "Block",
            ElementKind::Requirement => "Requirement",
            ElementKind::Constraint => "ConstraintBlock",
            ElementKind::Package => "Package",
        }
    }

    /// Look up a kind by key name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ModelError::unknown_kind(s))
    }
}

/// Registered relationship kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationshipKind {
    Containment,
    Inheritance,
    Association,
    Generalization,
    PartProperty,
    ValueProperty,
    ReferenceProperty,
    FlowProperty,
}

impl RelationshipKind {
    pub const ALL: [RelationshipKind; 8] = [
        RelationshipKind::Containment,
        RelationshipKind::Inheritance,
        RelationshipKind::Association,
        RelationshipKind::Generalization,
        RelationshipKind::PartProperty,
        RelationshipKind::ValueProperty,
        RelationshipKind::ReferenceProperty,
        RelationshipKind::FlowProperty,
    ];

    /// Name used in keys, e.g. `partProperty` in `partProperty-42`
    pub fn name(self) -> &'static str {
        match self {
            RelationshipKind::Containment => "containment",
            RelationshipKind::Inheritance => "inheritance",
            RelationshipKind::Association => "association",
            RelationshipKind::Generalization => "generalization",
            RelationshipKind::PartProperty => "partProperty",
            RelationshipKind::ValueProperty => "valueProperty",
            RelationshipKind::ReferenceProperty => "referenceProperty",
            RelationshipKind::FlowProperty => "flowProperty",
        }
    }

    /// Look up a kind by key name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Allowed endpoint kinds for this relationship kind
    pub fn rule(self) -> RelationshipRule {
        const BLOCK_ONLY: &[ElementKind] = &[ElementKind::Block];

        match self {
            RelationshipKind::Containment
            | RelationshipKind::Inheritance
            | RelationshipKind::Association
            | RelationshipKind::Generalization
            | RelationshipKind::PartProperty
            | RelationshipKind::ValueProperty
            | RelationshipKind::ReferenceProperty
            | RelationshipKind::FlowProperty => RelationshipRule {
                sources: BLOCK_ONLY,
                targets: BLOCK_ONLY,
            },
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RelationshipKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ModelError::unknown_kind(s))
    }
}

/// Allowed source and target element kinds for one relationship kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationshipRule {
    pub sources: &'static [ElementKind],
    pub targets: &'static [ElementKind],
}

impl RelationshipRule {
    pub fn allows_source(&self, kind: ElementKind) -> bool {
        self.sources.contains(&kind)
    }

    pub fn allows_target(&self, kind: ElementKind) -> bool {
        self.targets.contains(&kind)
    }

    /// True when both endpoint kinds are allowed
    pub fn allows(&self, source: ElementKind, target: ElementKind) -> bool {
        self.allows_source(source) && self.allows_target(target)
    }
}
