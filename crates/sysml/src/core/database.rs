//! Core storage trait for diagram input
//!
//! Diagram renderers walk a model through this trait rather than through the
//! concrete [`crate::Model`] API, so they can be written once for any store
//! of nodes and edges.

use anyhow::Result;

/// A keyed store of nodes (model elements) and edges (relationships)
///
/// Iteration order is insertion order, so layouts built on top are
/// deterministic.
pub trait Database {
    /// The node data type for this database
    type Node;

    /// The edge data type for this database
    type Edge;

    /// Key handed back for an admitted node
    type NodeKey;

    /// Key handed back for an admitted edge
    type EdgeKey;

    /// Add a node under a generated key
    fn add_node(&mut self, node: Self::Node) -> Result<Self::NodeKey>;

    /// Add an edge under a generated key, after validating its endpoints
    fn add_edge(&mut self, edge: Self::Edge) -> Result<Self::EdgeKey>;

    /// Get a node by its string key
    fn get_node(&self, key: &str) -> Option<&Self::Node>;

    /// Iterate over all nodes
    fn nodes(&self) -> impl Iterator<Item = (&Self::NodeKey, &Self::Node)>;

    /// Iterate over all edges
    fn edges(&self) -> impl Iterator<Item = (&Self::EdgeKey, &Self::Edge)>;

    /// Clear all data from the database
    fn clear(&mut self);

    /// Get the number of nodes
    fn node_count(&self) -> usize;

    /// Get the number of edges
    fn edge_count(&self) -> usize;
}
