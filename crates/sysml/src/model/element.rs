//! Element payloads
//!
//! The model does not interpret element contents beyond their kind. These
//! types carry just enough for diagrams to label their nodes, plus the id
//! slot the model fills on admission.

use super::key::ElementKey;
use super::schema::ElementKind;
use crate::core::{ElementId, ModelError};

/// A block: the basic structural unit of a system
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub name: String,
    id: Option<ElementId>,
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
        }
    }
}

/// A textual requirement
#[derive(Debug, Clone, PartialEq)]
pub struct Requirement {
    pub name: String,
    pub text: String,
    id: Option<ElementId>,
}

impl Requirement {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            id: None,
        }
    }
}

/// A constraint block, e.g. an equation binding block properties
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintBlock {
    pub name: String,
    pub expression: Option<String>,
    id: Option<ElementId>,
}

impl ConstraintBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expression: None,
            id: None,
        }
    }

    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }
}

/// A package organizing other model elements
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub label: String,
    id: Option<ElementId>,
}

impl Package {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: None,
        }
    }
}

/// Any element the model accepts
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Block(Block),
    Requirement(Requirement),
    Constraint(ConstraintBlock),
    Package(Package),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Block(_) => ElementKind::Block,
            Element::Requirement(_) => ElementKind::Requirement,
            Element::Constraint(_) => ElementKind::Constraint,
            Element::Package(_) => ElementKind::Package,
        }
    }

    /// Display name (the label for packages)
    pub fn name(&self) -> &str {
        match self {
            Element::Block(b) => &b.name,
            Element::Requirement(r) => &r.name,
            Element::Constraint(c) => &c.name,
            Element::Package(p) => &p.label,
        }
    }

    /// Id assigned on admission, `None` before
    pub fn id(&self) -> Option<ElementId> {
        match self {
            Element::Block(b) => b.id,
            Element::Requirement(r) => r.id,
            Element::Constraint(c) => c.id,
            Element::Package(p) => p.id,
        }
    }

    pub(crate) fn assign_id(&mut self, id: ElementId) {
        let slot = match self {
            Element::Block(b) => &mut b.id,
            Element::Requirement(r) => &mut r.id,
            Element::Constraint(c) => &mut c.id,
            Element::Package(p) => &mut p.id,
        };
        *slot = Some(id);
    }

    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Element::Block(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_package(&self) -> Option<&Package> {
        match self {
            Element::Package(p) => Some(p),
            _ => None,
        }
    }
}

/// Edit handle for an element already in a model
///
/// Contents can change; the kind and the id assigned on admission cannot, so
/// the key's kind and every relationship rule checked at insertion still
/// hold afterwards.
#[derive(Debug)]
pub struct ElementMut<'a> {
    key: ElementKey,
    element: &'a mut Element,
}

impl<'a> ElementMut<'a> {
    pub(crate) fn new(key: ElementKey, element: &'a mut Element) -> Self {
        Self { key, element }
    }

    pub fn key(&self) -> &ElementKey {
        &self.key
    }

    /// Read-only view of the current contents
    pub fn get(&self) -> &Element {
        &*self.element
    }

    pub fn kind(&self) -> ElementKind {
        self.element.kind()
    }

    pub fn id(&self) -> Option<ElementId> {
        self.element.id()
    }

    /// Rename the element
    ///
    /// A package stored under its label keeps that label.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ModelError> {
        let name = name.into();
        match &mut *self.element {
            Element::Block(b) => b.name = name,
            Element::Requirement(r) => r.name = name,
            Element::Constraint(c) => c.name = name,
            Element::Package(p) => {
                if matches!(self.key, ElementKey::Named(_)) && p.label != name {
                    return Err(ModelError::InvalidPackageLabel { label: name });
                }
                p.label = name;
            }
        }
        Ok(())
    }

    /// Replace a requirement's text
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), ModelError> {
        match &mut *self.element {
            Element::Requirement(r) => {
                r.text = text.into();
                Ok(())
            }
            other => Err(ModelError::type_mismatch(
                self.key.to_string(),
                ElementKind::Requirement.type_name(),
                other.kind().type_name(),
            )),
        }
    }

    /// Replace a constraint block's expression
    pub fn set_expression(&mut self, expression: Option<String>) -> Result<(), ModelError> {
        match &mut *self.element {
            Element::Constraint(c) => {
                c.expression = expression;
                Ok(())
            }
            other => Err(ModelError::type_mismatch(
                self.key.to_string(),
                ElementKind::Constraint.type_name(),
                other.kind().type_name(),
            )),
        }
    }
}

impl From<Block> for Element {
    fn from(value: Block) -> Self {
        Element::Block(value)
    }
}

impl From<Requirement> for Element {
    fn from(value: Requirement) -> Self {
        Element::Requirement(value)
    }
}

impl From<ConstraintBlock> for Element {
    fn from(value: ConstraintBlock) -> Self {
        Element::Constraint(value)
    }
}

impl From<Package> for Element {
    fn from(value: Package) -> Self {
        Element::Package(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{IdGenerator, SequentialIdGenerator};

    #[test]
    fn test_element_kind_and_name() {
        let element: Element = ConstraintBlock::new("Drag")
            .with_expression("F = 0.5 * rho * v^2 * Cd * A")
            .into();
        assert_eq!(element.kind(), ElementKind::Constraint);
        assert_eq!(element.name(), "Drag");
        assert!(element.id().is_none());
    }

    #[test]
    fn test_assign_id() {
        let mut ids = SequentialIdGenerator::new();
        let mut element: Element = Package::new("Vehicle").into();
        let id = ids.next_id();
        element.assign_id(id);
        assert_eq!(element.id(), Some(id));
        assert_eq!(element.as_package().unwrap().label, "Vehicle");
        assert!(element.as_block().is_none());
    }

    #[test]
    fn test_edit_handle_keeps_kind_and_id() {
        let mut ids = SequentialIdGenerator::new();
        let mut element: Element = Block::new("Engine").into();
        let id = ids.next_id();
        element.assign_id(id);

        let key = ElementKey::sequenced(ElementKind::Block, 1);
        let mut handle = ElementMut::new(key, &mut element);
        handle.set_name("Motor").unwrap();
        let err = handle.set_text("must be light").unwrap_err();
        assert_eq!(err, ModelError::type_mismatch("block-1", "Requirement", "Block"));
        assert!(handle.set_expression(Some("m < 200".into())).is_err());
        assert_eq!(handle.kind(), ElementKind::Block);
        assert_eq!(handle.id(), Some(id));

        assert_eq!(element.name(), "Motor");
        assert_eq!(element.id(), Some(id));
    }

    #[test]
    fn test_label_keyed_package_keeps_label() {
        let mut element: Element = Package::new("Vehicle").into();
        let mut handle = ElementMut::new(ElementKey::Named("Vehicle".into()), &mut element);
        assert!(handle.set_name("Vehicle").is_ok());
        assert_eq!(
            handle.set_name("Car").unwrap_err(),
            ModelError::InvalidPackageLabel {
                label: "Car".to_string()
            }
        );
        assert_eq!(handle.get().name(), "Vehicle");

        let mut element: Element = Package::new("Vehicle").into();
        let mut handle =
            ElementMut::new(ElementKey::sequenced(ElementKind::Package, 1), &mut element);
        handle.set_name("Car").unwrap();
        assert_eq!(element.name(), "Car");
    }
}
