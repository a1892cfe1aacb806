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

/// A read-only view of a tree-shaped data source.
///
/// Nodes are addressed by an opaque handle and arranged on a (row, column)
/// grid under each parent, with every row of a parent spanning the same set
/// of columns. Structural relationships (parentage, child counts) are
/// defined on column-0 handles; handles at other columns address the same
/// row's data in that column.
///
/// An "invalid" node reference (past the end of a sibling list, the parent
/// of a root, a column the model does not provide) is `None`. The matcher
/// treats any `None` it encounters as an ordinary negative result, never as
/// an error.
///
/// Implementations must present a stable snapshot for the duration of a
/// single call into the matcher; the matcher never caches handles across
/// calls and never mutates the model.
pub trait TreeModel {
    /// Opaque handle identifying one node of the tree.
    type Node: Clone;

    /// Selector for which textual attribute of a node [`text`](Self::text)
    /// reads (e.g. display name vs. an internal key).
    type Role: Copy;

    /// The parent of `node` (as a column-0 handle), or `None` if `node` is
    /// at the root level.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// The row of `node` within its parent's children.
    fn row(&self, node: &Self::Node) -> usize;

    /// The column `node` addresses.
    fn column(&self, node: &Self::Node) -> usize;

    /// The number of child rows under `parent`, where `None` designates the
    /// root level.
    fn row_count(&self, parent: Option<&Self::Node>) -> usize;

    /// The node at `(row, column)` under `parent` (`None` = root level), or
    /// `None` if either coordinate is out of range.
    fn index(
        &self,
        row: usize,
        column: usize,
        parent: Option<&Self::Node>,
    ) -> Option<Self::Node>;

    /// The textual attribute of `node` selected by `role`, or `None` if the
    /// node carries no text for that role.
    fn text(&self, node: &Self::Node, role: Self::Role)
        -> Option<Cow<'_, str>>;

    /// Whether `node` has any children. Only meaningful for column-0
    /// handles.
    fn has_children(&self, node: &Self::Node) -> bool;
}
