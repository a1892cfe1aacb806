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

use regex::{Regex, RegexBuilder};

use crate::tree::TreeModel;

/// Whether filter patterns distinguish letter case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseSensitivity {
    Sensitive,
    Insensitive,
}

/// Matches the ancestry of tree nodes against a hierarchical wildcard
/// filter.
///
/// A filter string is a sequence of `/`-separated segments, each a glob
/// pattern (`*` matches any run of characters including the empty run, `?`
/// matches exactly one character, everything else is literal). Each segment
/// is matched as a *substring* of one tree level's text, so `box` matches a
/// folder named `Inbox`.
///
/// The last segment applies to the node itself, the second-to-last to its
/// parent, and so on: the filter describes a suffix of the node's full
/// path, not a path rooted at the top of the tree. `Work/Inbox` therefore
/// matches an `Inbox` folder under a `Work 2025` folder no matter how
/// deeply that pair is nested.
///
/// The matcher holds no state beyond the compiled filter; it is a pure
/// function of the filter and the tree passed to each call. Sharing one
/// instance between threads is fine as long as `set_filter` calls are
/// serialized with respect to the match operations.
#[derive(Debug, Default)]
pub struct FolderMatcher {
    patterns: Vec<Regex>,
}

impl FolderMatcher {
    /// Create a matcher with no filter configured.
    pub fn new() -> Self {
        FolderMatcher::default()
    }

    /// Whether no filter is configured.
    ///
    /// A null matcher matches nothing: `matches` returns false and
    /// `find_first_match` returns `None` for every input.
    pub fn is_null(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The number of levels in the compiled filter.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Replace the compiled filter with one built from `filter`.
    ///
    /// An empty `filter` leaves the matcher null. Otherwise the string is
    /// split on `/` and each segment, including empty ones, is compiled to
    /// a substring glob matcher (an empty segment matches any text). There
    /// is no error path: every input string compiles.
    pub fn set_filter(&mut self, filter: &str, case: CaseSensitivity) {
        self.patterns.clear();
        if filter.is_empty() {
            return;
        }

        for part in filter.split('/') {
            self.patterns.push(compile_level(part, case));
        }
    }

    /// Whether the ancestry of `start` satisfies the filter.
    ///
    /// The compiled levels are walked deepest-first in lockstep with the
    /// tree from `start` up toward the root: the last filter level must
    /// match `start`'s own text, the one before it the parent's text, and
    /// so on. The walk stays in `start`'s column; parents (which the model
    /// reports as column-0 handles) are re-resolved at that column before
    /// their text is read.
    ///
    /// Returns false if `start` is `None`, if no filter is configured, if
    /// the root is reached with filter levels still unconsumed, or if any
    /// level fails to match.
    pub fn matches<M: TreeModel + ?Sized>(
        &self,
        model: &M,
        start: Option<&M::Node>,
        role: M::Role,
    ) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let start = match start {
            Some(start) => start,
            None => return false,
        };

        let column = model.column(start);
        let mut current = Some(start.clone());
        for pattern in self.patterns.iter().rev() {
            let node = match current {
                Some(node) => node,
                // Ancestry is shorter than the filter is deep.
                None => return false,
            };

            let text = model.text(&node, role).unwrap_or(Cow::Borrowed(""));
            if !pattern.is_match(&text) {
                return false;
            }

            current = model.parent(&node).and_then(|parent| {
                let row = model.row(&parent);
                let grandparent = model.parent(&parent);
                model.index(row, column, grandparent.as_ref())
            });
        }

        true
    }

    /// Find the first node at or below `start`'s sibling list whose
    /// ancestry satisfies the filter.
    ///
    /// Siblings are scanned in two passes: from `start`'s row to the last
    /// row, then (wrapping around) from row 0 up to but not including
    /// `start`'s row. Each sibling is tested itself first; if it does not
    /// match but has children, its subtree is searched depth-first before
    /// the scan advances to the next sibling. The scan stays in `start`'s
    /// column; child presence is probed on the column-0 handle since that
    /// is where the model defines structure.
    ///
    /// This realizes "find the next match after `start`, cycling back to
    /// the top if necessary". Returns `None` if nothing under `start`'s
    /// parent matches, or if no filter is configured.
    ///
    /// Recursion depth equals tree depth; the tree is assumed finite and
    /// acyclic.
    pub fn find_first_match<M: TreeModel + ?Sized>(
        &self,
        model: &M,
        start: &M::Node,
        role: M::Role,
    ) -> Option<M::Node> {
        if self.patterns.is_empty() {
            return None;
        }

        let column = model.column(start);
        let start_row = model.row(start);
        let parent = model.parent(start);
        let rows = model.row_count(parent.as_ref());

        for row in (start_row..rows).chain(0..start_row) {
            let node = match model.index(row, column, parent.as_ref()) {
                Some(node) => node,
                None => continue,
            };
            if self.matches(model, Some(&node), role) {
                return Some(node);
            }

            let probe = match model.index(row, 0, parent.as_ref()) {
                Some(probe) => probe,
                None => continue,
            };
            if model.has_children(&probe) {
                if let Some(child) = model.index(0, column, Some(&probe)) {
                    if let Some(found) =
                        self.find_first_match(model, &child, role)
                    {
                        return Some(found);
                    }
                }
            }
        }

        None
    }
}

/// Compile one filter segment to a substring matcher.
///
/// Literal chunks are escaped and the wildcards spliced in as regex
/// fragments; the result is deliberately unanchored so that the segment
/// matches anywhere within a level's text. Since everything outside the
/// wildcards is escaped, compilation cannot fail.
fn compile_level(part: &str, case: CaseSensitivity) -> Regex {
    let mut rx = String::with_capacity(part.len() + 8);

    let mut start = 0;
    for end in part
        .match_indices(|c| '*' == c || '?' == c)
        .map(|(ix, _)| ix)
        .chain(part.len()..=part.len())
    {
        let chunk = &part[start..end];
        start = (end + 1).min(part.len());

        rx.push_str(&regex::escape(chunk));
        match part.get(end..end + 1) {
            Some("*") => rx.push_str(".*"),
            Some("?") => rx.push('.'),
            _ => (),
        }
    }

    RegexBuilder::new(&rx)
        .case_insensitive(CaseSensitivity::Insensitive == case)
        .build()
        .expect("Built invalid regex?")
}
