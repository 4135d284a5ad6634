//! The SysML model namespace
//!
//! Schema tables, keys, element and relationship payloads, and the validated
//! [`Model`] store that ties them together.

mod diagram;
mod element;
mod key;
mod namespace;
mod relationship;
mod schema;
mod store;
pub mod validate;

pub use diagram::DiagramKind;
pub use element::{Block, ConstraintBlock, Element, ElementMut, Package, Requirement};
pub use key::{is_valid_element_key, is_valid_relationship_key, ElementKey, Key, RelationshipKey};
pub use namespace::{ItemRef, Model, ModelItem};
pub use relationship::Relationship;
pub use schema::{ElementKind, RelationshipKind, RelationshipRule};
pub use store::KeyedStore;
