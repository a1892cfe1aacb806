//-
// Copyright (c) 2026, Jason Lingle
//
// This file is part of Foldermatch.
//
// Foldermatch is free software: you can redistribute it and/or modify it
// under the  terms of the GNU  General Public License as  published by the
// Free Software Foundation, either version  3 of the License, or (at your
// option) any later version.
//
// Foldermatch is distributed in the hope  that it will be useful, but
// WITHOUT ANY WARRANTY; without even  the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General
// Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with Foldermatch. If not, see <http://www.gnu.org/licenses/>.

use std::borrow::Cow;

use crate::tree::TreeModel;

/// Handle into a [`MemTree`].
///
/// Handles are only meaningful for the tree that produced them; using one
/// against another tree addresses an arbitrary node or panics on an
/// out-of-range arena index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeRef {
    id: usize,
    column: usize,
}

#[derive(Debug)]
struct NodeData {
    label: String,
    parent: Option<usize>,
    row: usize,
    children: Vec<usize>,
}

/// A simple arena-backed folder tree implementing [`TreeModel`].
///
/// Every node carries one label, reported identically for every column the
/// tree is configured with. This is sufficient both for tests and for
/// callers that keep their folder hierarchy in plain memory rather than
/// behind a model framework.
#[derive(Debug)]
pub struct MemTree {
    nodes: Vec<NodeData>,
    roots: Vec<usize>,
    columns: usize,
}

impl Default for MemTree {
    fn default() -> Self {
        MemTree::with_columns(1)
    }
}

impl MemTree {
    /// Create an empty single-column tree.
    pub fn new() -> Self {
        MemTree::default()
    }

    /// Create an empty tree spanning `columns` columns.
    ///
    /// ## Panics
    /// Panics if `columns` is zero.
    pub fn with_columns(columns: usize) -> Self {
        assert!(columns > 0, "a tree needs at least one column");
        MemTree {
            nodes: Vec::new(),
            roots: Vec::new(),
            columns,
        }
    }

    /// Append a root-level folder and return its column-0 handle.
    pub fn add_root(&mut self, label: &str) -> NodeRef {
        let row = self.roots.len();
        let id = self.push(label, None, row);
        self.roots.push(id);
        NodeRef { id, column: 0 }
    }

    /// Append a child folder under `parent` and return its column-0
    /// handle.
    pub fn add_child(&mut self, parent: NodeRef, label: &str) -> NodeRef {
        let row = self.nodes[parent.id].children.len();
        let id = self.push(label, Some(parent.id), row);
        self.nodes[parent.id].children.push(id);
        NodeRef { id, column: 0 }
    }

    /// The label of `node`.
    pub fn label(&self, node: NodeRef) -> &str {
        &self.nodes[node.id].label
    }

    fn push(
        &mut self,
        label: &str,
        parent: Option<usize>,
        row: usize,
    ) -> usize {
        let id = self.nodes.len();
        self.nodes.push(NodeData {
            label: label.to_owned(),
            parent,
            row,
            children: Vec::new(),
        });
        id
    }

    fn child_ids(&self, parent: Option<&NodeRef>) -> &[usize] {
        match parent {
            Some(parent) => &self.nodes[parent.id].children,
            None => &self.roots,
        }
    }
}

impl TreeModel for MemTree {
    type Node = NodeRef;
    type Role = ();

    fn parent(&self, node: &NodeRef) -> Option<NodeRef> {
        self.nodes[node.id]
            .parent
            .map(|id| NodeRef { id, column: 0 })
    }

    fn row(&self, node: &NodeRef) -> usize {
        self.nodes[node.id].row
    }

    fn column(&self, node: &NodeRef) -> usize {
        node.column
    }

    fn row_count(&self, parent: Option<&NodeRef>) -> usize {
        self.child_ids(parent).len()
    }

    fn index(
        &self,
        row: usize,
        column: usize,
        parent: Option<&NodeRef>,
    ) -> Option<NodeRef> {
        if column >= self.columns {
            return None;
        }
        self.child_ids(parent)
            .get(row)
            .map(|&id| NodeRef { id, column })
    }

    fn text(&self, node: &NodeRef, _role: ()) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&self.nodes[node.id].label))
    }

    fn has_children(&self, node: &NodeRef) -> bool {
        !self.nodes[node.id].children.is_empty()
    }
}
