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

//! Hierarchical wildcard matching over mail folder trees.
//!
//! A mail client typically presents its folders as a tree and offers an
//! incremental "jump to folder" feature: the user types something like
//! `Work/Inbox` and the client highlights the first folder whose own name
//! contains `Inbox` and whose parent's name contains `Work`, wherever that
//! pair sits in the hierarchy.
//!
//! This crate provides the matching half of that feature, decoupled from
//! any concrete widget or model framework:
//!
//! - [`tree::TreeModel`] is the read-only tree abstraction the matcher
//!   consumes; anything exposing parent/child/row navigation and per-node
//!   text can implement it.
//! - [`matcher::FolderMatcher`] compiles a `/`-delimited wildcard filter
//!   string and evaluates it against a node's ancestry, or searches a
//!   subtree for the first node whose ancestry satisfies it.
//! - [`memtree::MemTree`] is a simple in-memory implementation of
//!   `TreeModel` for callers (and tests) that hold the folder hierarchy
//!   themselves.

pub mod matcher;
pub mod memtree;
pub mod tree;

pub use crate::matcher::{CaseSensitivity, FolderMatcher};
pub use crate::memtree::MemTree;
pub use crate::tree::TreeModel;
