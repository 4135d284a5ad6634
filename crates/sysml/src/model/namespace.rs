//! The model namespace
//!
//! [`Model`] owns two independent stores, one for elements and one for
//! relationships, and admits entries only after they pass the checks in
//! [`super::validate`]. Keys are generated as `<kind>-<n>` using the lowest
//! free sequence number.

use tracing::{debug, trace, warn};

use super::diagram::DiagramKind;
use super::element::{Block, ConstraintBlock, Element, ElementMut, Package, Requirement};
use super::key::{ElementKey, Key, RelationshipKey};
use super::relationship::Relationship;
use super::schema::{ElementKind, RelationshipKind};
use super::store::KeyedStore;
use super::validate::{check_element, check_relationship};
use crate::core::{Database, ElementId, IdGenerator, ModelError, UuidGenerator};

/// Owned value written into or removed from the model
#[derive(Debug, Clone, PartialEq)]
pub enum ModelItem {
    Element(Element),
    Relationship(Relationship),
}

impl ModelItem {
    fn type_name(&self) -> &'static str {
        match self {
            ModelItem::Element(e) => e.kind().type_name(),
            ModelItem::Relationship(_) => "Relationship",
        }
    }

    pub fn into_element(self) -> Option<Element> {
        match self {
            ModelItem::Element(e) => Some(e),
            ModelItem::Relationship(_) => None,
        }
    }

    pub fn into_relationship(self) -> Option<Relationship> {
        match self {
            ModelItem::Relationship(r) => Some(r),
            ModelItem::Element(_) => None,
        }
    }
}

impl From<Element> for ModelItem {
    fn from(value: Element) -> Self {
        ModelItem::Element(value)
    }
}

impl From<Relationship> for ModelItem {
    fn from(value: Relationship) -> Self {
        ModelItem::Relationship(value)
    }
}

macro_rules! element_item {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ModelItem {
            fn from(value: $ty) -> Self {
                ModelItem::Element(value.into())
            }
        })*
    };
}

element_item!(Block, Requirement, ConstraintBlock, Package);

/// Borrowed result of a keyed read
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemRef<'a> {
    Element(&'a Element),
    Relationship(&'a Relationship),
}

impl<'a> ItemRef<'a> {
    pub fn as_element(self) -> Option<&'a Element> {
        match self {
            ItemRef::Element(e) => Some(e),
            ItemRef::Relationship(_) => None,
        }
    }

    pub fn as_relationship(self) -> Option<&'a Relationship> {
        match self {
            ItemRef::Relationship(r) => Some(r),
            ItemRef::Element(_) => None,
        }
    }
}

/// A checked entry waiting to be committed
enum Staged {
    Element(ElementKey, Element),
    Relationship(RelationshipKey, Relationship),
}

/// A SysML model: a validated registry of elements and relationships
///
/// Every instance owns fresh, empty stores. Stored values are owned by the
/// model; [`Model::element_mut`] edits contents but never kind or id.
#[derive(Debug)]
pub struct Model<G = UuidGenerator> {
    label: Option<String>,
    elements: KeyedStore<ElementKey, Element>,
    relationships: KeyedStore<RelationshipKey, Relationship>,
    ids: G,
}

impl Model {
    /// Create an empty, unlabeled model
    pub fn new() -> Self {
        Self::with_id_generator(None, UuidGenerator)
    }

    /// Create an empty model with a display label
    pub fn with_label(label: impl Into<String>) -> Self {
        Self::with_id_generator(Some(label.into()), UuidGenerator)
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> Model<G> {
    /// Create an empty model drawing element ids from `ids`
    pub fn with_id_generator(label: Option<String>, ids: G) -> Self {
        Self {
            label,
            elements: KeyedStore::new(),
            relationships: KeyedStore::new(),
            ids,
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// Read the element or relationship stored under `key`
    ///
    /// Strings that are not structured keys are looked up as package labels.
    pub fn get(&self, key: &str) -> Result<ItemRef<'_>, ModelError> {
        let found = match lookup_key(key) {
            Key::Element(k) => self.elements.get(&k).map(ItemRef::Element),
            Key::Relationship(k) => self.relationships.get(&k).map(ItemRef::Relationship),
        };
        found.ok_or_else(|| ModelError::key_not_found(key))
    }

    pub fn element(&self, key: &str) -> Option<&Element> {
        self.get(key).ok().and_then(ItemRef::as_element)
    }

    /// Edit a stored element in place
    ///
    /// The handle changes contents only. Kind and id stay as admitted, so
    /// relationships that point at the element remain valid.
    pub fn element_mut(&mut self, key: &str) -> Option<ElementMut<'_>> {
        let Key::Element(k) = lookup_key(key) else {
            return None;
        };
        let element = self.elements.get_mut(&k)?;
        Some(ElementMut::new(k, element))
    }

    pub fn relationship(&self, key: &str) -> Option<&Relationship> {
        self.get(key).ok().and_then(ItemRef::as_relationship)
    }

    pub fn element_by_key(&self, key: &ElementKey) -> Option<&Element> {
        self.elements.get(key)
    }

    pub fn relationship_by_key(&self, key: &RelationshipKey) -> Option<&Relationship> {
        self.relationships.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Store `item` under `key`, overwriting any previous entry
    ///
    /// `key` must be `<elementKind>-<n>` or `<relationshipKind>-<n>`; the
    /// item must match the kind the key names.
    pub fn set(&mut self, key: &str, item: impl Into<ModelItem>) -> Result<Key, ModelError> {
        let staged = self.stage(key, item.into()).inspect_err(|e| {
            warn!(key = %key, error = %e, "Rejected model entry");
        })?;
        Ok(self.commit(staged))
    }

    /// Elements in insertion order
    pub fn elements(&self) -> impl Iterator<Item = (&ElementKey, &Element)> {
        self.elements.iter()
    }

    /// Relationships in insertion order
    pub fn relationships(&self) -> impl Iterator<Item = (&RelationshipKey, &Relationship)> {
        self.relationships.iter()
    }

    /// Merge a batch of keyed elements into the element store
    ///
    /// Every entry is checked as [`Model::set`] would check it before any is
    /// written; if one fails, the model is left unchanged. Later entries win
    /// over earlier ones with the same key.
    pub fn set_elements<I, K>(&mut self, entries: I) -> Result<Vec<ElementKey>, ModelError>
    where
        I: IntoIterator<Item = (K, Element)>,
        K: AsRef<str>,
    {
        let staged = self.stage_all(
            entries
                .into_iter()
                .map(|(k, e)| (k, ModelItem::Element(e))),
        )?;
        Ok(staged
            .into_iter()
            .filter_map(|s| match self.commit(s) {
                Key::Element(k) => Some(k),
                Key::Relationship(_) => None,
            })
            .collect())
    }

    /// Merge a batch of keyed relationships into the relationship store
    ///
    /// Same all-or-nothing policy as [`Model::set_elements`]. Endpoints are
    /// resolved against the element store as it is before the call.
    pub fn set_relationships<I, K>(
        &mut self,
        entries: I,
    ) -> Result<Vec<RelationshipKey>, ModelError>
    where
        I: IntoIterator<Item = (K, Relationship)>,
        K: AsRef<str>,
    {
        let staged = self.stage_all(
            entries
                .into_iter()
                .map(|(k, r)| (k, ModelItem::Relationship(r))),
        )?;
        Ok(staged
            .into_iter()
            .filter_map(|s| match self.commit(s) {
                Key::Relationship(k) => Some(k),
                Key::Element(_) => None,
            })
            .collect())
    }

    /// Admit an element under a freshly generated key
    pub fn add_element(&mut self, element: impl Into<Element>) -> ElementKey {
        let element = element.into();
        let key = self.next_element_key(element.kind());
        self.commit_element(key.clone(), element);
        key
    }

    /// Admit elements one at a time, each under a freshly generated key
    pub fn add_elements<I>(&mut self, elements: I) -> Vec<ElementKey>
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        elements.into_iter().map(|e| self.add_element(e)).collect()
    }

    /// Admit a relationship under a freshly generated key
    pub fn add_relationship(
        &mut self,
        relationship: Relationship,
    ) -> Result<RelationshipKey, ModelError> {
        let key = self.next_relationship_key(relationship.kind);
        check_relationship(&key, &relationship, &self.elements).inspect_err(|e| {
            warn!(key = %key, error = %e, "Rejected relationship");
        })?;
        self.commit_relationship(key, relationship);
        Ok(key)
    }

    /// Admit relationships one at a time
    ///
    /// Stops at the first invalid relationship. Relationships admitted
    /// before it in the same call stay in the model.
    pub fn add_relationships<I>(
        &mut self,
        relationships: I,
    ) -> Result<Vec<RelationshipKey>, ModelError>
    where
        I: IntoIterator<Item = Relationship>,
    {
        relationships
            .into_iter()
            .map(|r| self.add_relationship(r))
            .collect()
    }

    /// Create a package keyed directly by its label
    ///
    /// The label must be non-blank and must not itself parse as a structured
    /// key, so label keys never shadow generated ones.
    pub fn add_package(&mut self, label: impl Into<String>) -> Result<ElementKey, ModelError> {
        let label = label.into();
        if label.trim().is_empty() || Key::parse(&label).is_ok() {
            return Err(ModelError::InvalidPackageLabel { label });
        }
        let key = ElementKey::Named(label.clone());
        let element = Element::Package(Package::new(label));
        check_element(&key, &element)?;
        self.commit_element(key.clone(), element);
        Ok(key)
    }

    /// Remove and return the entry under `key`
    ///
    /// An element cannot be removed while a relationship still refers to it.
    pub fn remove(&mut self, key: &str) -> Result<ModelItem, ModelError> {
        match lookup_key(key) {
            Key::Element(k) => {
                if let Some((rel_key, _)) = self
                    .relationships
                    .iter()
                    .find(|(_, r)| r.source == k || r.target == k)
                {
                    return Err(ModelError::ElementInUse {
                        element: k.to_string(),
                        relationship: rel_key.to_string(),
                    });
                }
                let element = self
                    .elements
                    .remove(&k)
                    .ok_or_else(|| ModelError::key_not_found(key))?;
                debug!(key = %k, element_count = self.elements.len(), "Element removed");
                Ok(ModelItem::Element(element))
            }
            Key::Relationship(k) => {
                let relationship = self
                    .relationships
                    .remove(&k)
                    .ok_or_else(|| ModelError::key_not_found(key))?;
                debug!(
                    key = %k,
                    relationship_count = self.relationships.len(),
                    "Relationship removed"
                );
                Ok(ModelItem::Relationship(relationship))
            }
        }
    }

    /// Relationships whose source or target is `key`
    pub fn relationships_of<'a>(
        &'a self,
        key: &'a ElementKey,
    ) -> impl Iterator<Item = (&'a RelationshipKey, &'a Relationship)> + 'a {
        self.relationships
            .iter()
            .filter(move |(_, r)| &r.source == key || &r.target == key)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.relationships.is_empty()
    }

    /// Drop every element and relationship; the label and id source are kept
    pub fn clear(&mut self) {
        self.elements.clear();
        self.relationships.clear();
    }

    /// Generate a diagram of the given kind
    ///
    /// Rendering is not implemented yet; every kind reports
    /// [`ModelError::DiagramUnsupported`].
    pub fn diagram(&self, kind: DiagramKind) -> Result<(), ModelError> {
        debug!(diagram = %kind, element_count = self.elements.len(), "Diagram requested");
        Err(ModelError::DiagramUnsupported {
            diagram: kind.description().to_string(),
        })
    }

    /// Block definition diagram
    pub fn bdd(&self) -> Result<(), ModelError> {
        self.diagram(DiagramKind::Bdd)
    }

    /// Package diagram
    pub fn pkg(&self) -> Result<(), ModelError> {
        self.diagram(DiagramKind::Pkg)
    }

    /// Use case diagram
    pub fn uc(&self) -> Result<(), ModelError> {
        self.diagram(DiagramKind::Uc)
    }

    /// Requirement diagram
    pub fn req(&self) -> Result<(), ModelError> {
        self.diagram(DiagramKind::Req)
    }

    /// Lowest free `<kind>-<n>` element key
    ///
    /// At most `len` keys are taken, so one of `1..=len + 1` is free.
    pub fn next_element_key(&self, kind: ElementKind) -> ElementKey {
        let upper = probe_bound(self.elements.len());
        (1..=upper)
            .map(|seq| ElementKey::sequenced(kind, seq))
            .find(|key| !self.elements.contains(key))
            .unwrap_or(ElementKey::sequenced(kind, upper))
    }

    /// Lowest free `<kind>-<n>` relationship key
    pub fn next_relationship_key(&self, kind: RelationshipKind) -> RelationshipKey {
        let upper = probe_bound(self.relationships.len());
        (1..=upper)
            .map(|seq| RelationshipKey::new(kind, seq))
            .find(|key| !self.relationships.contains(key))
            .unwrap_or(RelationshipKey::new(kind, upper))
    }

    fn stage(&self, key: &str, item: ModelItem) -> Result<Staged, ModelError> {
        trace!(key = %key, item_type = item.type_name(), "Checking model entry");
        match (Key::parse(key)?, item) {
            (Key::Element(k), ModelItem::Element(e)) => {
                check_element(&k, &e)?;
                Ok(Staged::Element(k, e))
            }
            (Key::Relationship(k), ModelItem::Relationship(r)) => {
                check_relationship(&k, &r, &self.elements)?;
                Ok(Staged::Relationship(k, r))
            }
            (Key::Element(k), item) => Err(ModelError::type_mismatch(
                key,
                k.kind().map_or("Package", ElementKind::type_name),
                item.type_name(),
            )),
            (Key::Relationship(_), item) => {
                Err(ModelError::type_mismatch(key, "Relationship", item.type_name()))
            }
        }
    }

    fn stage_all<I, K>(&self, entries: I) -> Result<Vec<Staged>, ModelError>
    where
        I: IntoIterator<Item = (K, ModelItem)>,
        K: AsRef<str>,
    {
        entries
            .into_iter()
            .map(|(k, item)| self.stage(k.as_ref(), item))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| warn!(error = %e, "Rejected batch, model unchanged"))
    }

    fn commit(&mut self, staged: Staged) -> Key {
        match staged {
            Staged::Element(k, e) => {
                self.commit_element(k.clone(), e);
                Key::Element(k)
            }
            Staged::Relationship(k, r) => {
                self.commit_relationship(k, r);
                Key::Relationship(k)
            }
        }
    }

    fn commit_element(&mut self, key: ElementKey, mut element: Element) -> ElementId {
        let id = self.ids.next_id();
        element.assign_id(id);
        trace!(key = %key, id = %id, kind = %element.kind(), "Adding element to model");
        if self.elements.insert(key, element).is_some() {
            trace!("Overwrote existing element");
        }
        debug!(element_count = self.elements.len(), "Element added");
        id
    }

    fn commit_relationship(&mut self, key: RelationshipKey, relationship: Relationship) {
        trace!(
            key = %key,
            source = %relationship.source,
            target = %relationship.target,
            "Adding relationship to model"
        );
        self.relationships.insert(key, relationship);
        debug!(relationship_count = self.relationships.len(), "Relationship added");
    }
}

impl<G: IdGenerator> Database for Model<G> {
    type Node = Element;
    type Edge = Relationship;
    type NodeKey = ElementKey;
    type EdgeKey = RelationshipKey;

    fn add_node(&mut self, node: Element) -> anyhow::Result<ElementKey> {
        Ok(self.add_element(node))
    }

    fn add_edge(&mut self, edge: Relationship) -> anyhow::Result<RelationshipKey> {
        Ok(self.add_relationship(edge)?)
    }

    fn get_node(&self, key: &str) -> Option<&Element> {
        self.element(key)
    }

    fn nodes(&self) -> impl Iterator<Item = (&ElementKey, &Element)> {
        self.elements.iter()
    }

    fn edges(&self) -> impl Iterator<Item = (&RelationshipKey, &Relationship)> {
        self.relationships.iter()
    }

    fn clear(&mut self) {
        self.elements.clear();
        self.relationships.clear();
    }

    fn node_count(&self) -> usize {
        self.elements.len()
    }

    fn edge_count(&self) -> usize {
        self.relationships.len()
    }
}

/// Structured key for `key`, treating anything unparseable as a package label
fn lookup_key(key: &str) -> Key {
    Key::parse(key).unwrap_or_else(|_| Key::Element(ElementKey::Named(key.to_string())))
}

fn probe_bound(len: usize) -> u32 {
    u32::try_from(len.saturating_add(1)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequentialIdGenerator;

    fn model() -> Model<SequentialIdGenerator> {
        Model::with_id_generator(None, SequentialIdGenerator::new())
    }

    #[test]
    fn test_fresh_models_do_not_share_stores() {
        let mut a = Model::new();
        let b = Model::new();
        a.add_element(Block::new("Engine"));
        assert_eq!(a.element_count(), 1);
        assert!(b.is_empty());
    }

    #[test]
    fn test_next_key_probes_lowest_free() {
        let mut m = model();
        m.set("block-2", Block::new("B")).unwrap();
        assert_eq!(
            m.next_element_key(ElementKind::Block),
            ElementKey::sequenced(ElementKind::Block, 1)
        );
        assert_eq!(
            m.next_element_key(ElementKind::Requirement),
            ElementKey::sequenced(ElementKind::Requirement, 1)
        );
    }

    #[test]
    fn test_commit_assigns_sequential_ids() {
        let mut m = model();
        let k1 = m.add_element(Block::new("A"));
        let k2 = m.add_element(Block::new("B"));
        let id1 = m.element_by_key(&k1).unwrap().id().unwrap();
        let id2 = m.element_by_key(&k2).unwrap().id().unwrap();
        assert_eq!(id1.to_string(), "00000000-0000-0000-0000-000000000001");
        assert_eq!(id2.to_string(), "00000000-0000-0000-0000-000000000002");
    }

    #[test]
    fn test_stage_rejects_cross_store_values() {
        let mut m = model();
        m.add_elements([Block::new("A"), Block::new("B")]);
        let rel = Relationship::new(RelationshipKind::Association, "block-1", "block-2");
        let err = m.set("block-3", rel).unwrap_err();
        assert_eq!(err, ModelError::type_mismatch("block-3", "Block", "Relationship"));

        let err = m.set("association-1", Block::new("C")).unwrap_err();
        assert_eq!(
            err,
            ModelError::type_mismatch("association-1", "Relationship", "Block")
        );
    }

    #[test]
    fn test_lookup_key_falls_back_to_label() {
        assert_eq!(
            lookup_key("Vehicle"),
            Key::Element(ElementKey::Named("Vehicle".to_string()))
        );
        assert!(lookup_key("containment-4").is_relationship());
    }
}
