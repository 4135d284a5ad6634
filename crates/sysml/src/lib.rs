//! SysML - an in-memory model namespace for SysML diagrams
//!
//! A [`Model`] holds typed elements (blocks, requirements, constraint blocks,
//! packages) and typed relationships between them. Every insertion is
//! checked against a fixed schema: keys must name a registered kind, stored
//! values must match that kind, and relationship endpoints must exist and
//! have the element kinds the relationship kind allows.
//!
//! # Quick Start
//!
//! ```rust
//! use sysml::prelude::*;
//!
//! let mut model = Model::with_label("Vehicle");
//! model.add_package("Vehicle").unwrap();
//!
//! let keys = model.add_elements([Block::new("Engine"), Block::new("Wheel")]);
//! assert_eq!(keys[0].to_string(), "block-1");
//! assert_eq!(keys[1].to_string(), "block-2");
//!
//! let part = Relationship::new(RelationshipKind::PartProperty, &keys[0], &keys[1]);
//! let key = model.add_relationship(part).unwrap();
//! assert_eq!(key.to_string(), "partProperty-1");
//!
//! assert!(model.get("Vehicle").unwrap().as_element().is_some());
//! ```
//!
//! # Keyed Access
//!
//! Keys are `"<kind>-<n>"` strings at the API boundary:
//!
//! ```rust
//! use sysml::prelude::*;
//!
//! let mut model = Model::new();
//! model.set("block-1", Block::new("Engine")).unwrap();
//! model.set("requirement-1", Requirement::new("Mass", "Under 200 kg")).unwrap();
//!
//! // a Block is not a Requirement
//! let err = model.set("requirement-2", Block::new("Chassis")).unwrap_err();
//! assert!(matches!(err, ModelError::TypeMismatch { .. }));
//!
//! // and Block -> Requirement is not a valid partProperty
//! let rel = Relationship::new(RelationshipKind::PartProperty, "block-1", "requirement-1");
//! let err = model.set("partProperty-1", rel).unwrap_err();
//! assert!(matches!(err, ModelError::SchemaViolation { .. }));
//! ```

pub mod core;
pub mod model;

pub use crate::core::*;
pub use crate::model::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{Database, ElementId, IdGenerator, ModelError, SequentialIdGenerator};
    pub use crate::model::{
        Block, ConstraintBlock, DiagramKind, Element, ElementKey, ElementKind, ElementMut, ItemRef,
        Key, Model, ModelItem, Package, Relationship, RelationshipKey, RelationshipKind,
        Requirement,
    };
}
