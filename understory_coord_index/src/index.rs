// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Threaded AVL tree keyed by coordinates.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;
use core::iter::FusedIterator;

use smallvec::SmallVec;

use crate::types::{Coord, NodeId};

// An AVL tree holding u32::MAX keys is at most 46 levels deep.
type Path = SmallVec<[NodeId; 64]>;

#[derive(Clone, Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Option<NodeId>,
    right: Option<NodeId>,
    // In-order threads.
    prev: Option<NodeId>,
    next: Option<NodeId>,
    height: u32,
}

/// Ordered map from coordinates to payloads.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. Besides the usual
/// binary-search-tree links, every node is threaded to its in-order
/// predecessor and successor, so a key range is walked in linear time once its
/// endpoints are known, without descending from the root again.
///
/// The tree rebalances itself with AVL rotations on insertion. Rotations never
/// change the in-order sequence, so the thread is only touched when a node is
/// created. Keys are never removed individually; use [`CoordIndex::clear`].
#[derive(Clone)]
pub struct CoordIndex<K, V> {
    nodes: Vec<Node<K, V>>,
    root: Option<NodeId>,
    first: Option<NodeId>,
    last: Option<NodeId>,
}

impl<K: Coord, V> Debug for CoordIndex<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CoordIndex")
            .field("len", &self.nodes.len())
            .field("height", &self.height())
            .field("min", &self.first.map(|id| self.key(id)))
            .field("max", &self.last.map(|id| self.key(id)))
            .finish_non_exhaustive()
    }
}

impl<K, V> Default for CoordIndex<K, V> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            first: None,
            last: None,
        }
    }
}

impl<K: Coord, V> CoordIndex<K, V> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the index holds no keys.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Height of the tree (0 when empty, 1 for a single key).
    pub fn height(&self) -> u32 {
        self.height_of(self.root)
    }

    /// Reserve space for at least `n` more keys.
    pub fn reserve(&mut self, n: usize) {
        self.nodes.reserve(n);
    }

    /// Drop every key. Handles issued so far become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.first = None;
        self.last = None;
    }

    /// Return the node for `key`, creating it with a default payload if absent.
    ///
    /// The flag is `true` when the node was created by this call.
    pub fn insert_or_get(&mut self, key: K) -> (NodeId, bool)
    where
        V: Default,
    {
        self.insert_or_get_with(key, V::default)
    }

    /// Return the node for `key`, creating it with the payload produced by
    /// `init` if absent.
    ///
    /// `init` only runs when a node is created, which is signalled by the
    /// returned flag. Afterwards [`find_nearest`][Self::find_nearest] with the
    /// same key yields the returned node.
    pub fn insert_or_get_with<F: FnOnce() -> V>(&mut self, key: K, init: F) -> (NodeId, bool) {
        let mut path = Path::new();
        let mut prev = None;
        let mut next = None;
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.nodes[id.idx()];
            match K::cmp_coord(key, node.key) {
                Ordering::Equal => return (id, false),
                Ordering::Less => {
                    next = Some(id);
                    cur = node.left;
                }
                Ordering::Greater => {
                    prev = Some(id);
                    cur = node.right;
                }
            }
            path.push(id);
        }

        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node {
            key,
            value: init(),
            left: None,
            right: None,
            prev,
            next,
            height: 1,
        });

        // Splice into the thread between the nodes we turned right and left at.
        match prev {
            Some(p) => self.nodes[p.idx()].next = Some(id),
            None => self.first = Some(id),
        }
        match next {
            Some(n) => self.nodes[n.idx()].prev = Some(id),
            None => self.last = Some(id),
        }

        match path.last() {
            None => self.root = Some(id),
            Some(&parent) => {
                let parent = &mut self.nodes[parent.idx()];
                if K::cmp_coord(key, parent.key) == Ordering::Less {
                    parent.left = Some(id);
                } else {
                    parent.right = Some(id);
                }
            }
        }
        self.rebalance_path(&path);
        (id, true)
    }

    /// Find the node with exactly this key.
    pub fn find(&self, key: K) -> Option<NodeId> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.nodes[id.idx()];
            cur = match K::cmp_coord(key, node.key) {
                Ordering::Equal => return Some(id),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Find the node with the greatest key less than or equal to `key`.
    ///
    /// Returns `None` when the index is empty or every key is greater.
    pub fn find_nearest(&self, key: K) -> Option<NodeId> {
        let mut best = None;
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.nodes[id.idx()];
            match K::cmp_coord(key, node.key) {
                Ordering::Equal => return Some(id),
                Ordering::Less => cur = node.left,
                Ordering::Greater => {
                    best = Some(id);
                    cur = node.right;
                }
            }
        }
        best
    }

    /// Nodes whose keys lie between the keys of `a` and `b` (inclusive), in
    /// ascending key order.
    ///
    /// The endpoints may be given in either order. Both must belong to this
    /// index. The walk follows the in-order thread.
    pub fn range_inclusive(&self, a: NodeId, b: NodeId) -> Range<'_, K, V> {
        let (lo, hi) = self.ordered(a, b);
        Range {
            index: self,
            next: Some(lo),
            end: hi,
        }
    }

    /// Visit the payloads of [`range_inclusive(a, b)`][Self::range_inclusive]
    /// mutably, in ascending key order.
    pub fn visit_range_mut<F: FnMut(K, &mut V)>(&mut self, a: NodeId, b: NodeId, mut f: F) {
        let (lo, hi) = self.ordered(a, b);
        let mut cur = Some(lo);
        while let Some(id) = cur {
            let node = &mut self.nodes[id.idx()];
            f(node.key, &mut node.value);
            cur = if id == hi { None } else { node.next };
        }
    }

    /// Iterate `(key, payload)` pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            index: self,
            next: self.first,
            remaining: self.nodes.len(),
        }
    }

    /// Node with the smallest key.
    pub fn first(&self) -> Option<NodeId> {
        self.first
    }

    /// Node with the largest key.
    pub fn last(&self) -> Option<NodeId> {
        self.last
    }

    /// In-order successor of `id`.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next
    }

    /// In-order predecessor of `id`.
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev
    }

    /// Key stored at `id`.
    pub fn key(&self, id: NodeId) -> K {
        self.node(id).key
    }

    /// Payload stored at `id`.
    pub fn value(&self, id: NodeId) -> &V {
        &self.node(id).value
    }

    /// Mutable payload stored at `id`.
    pub fn value_mut(&mut self, id: NodeId) -> &mut V {
        debug_assert!(id.idx() < self.nodes.len(), "foreign or stale NodeId");
        &mut self.nodes[id.idx()].value
    }

    fn node(&self, id: NodeId) -> &Node<K, V> {
        debug_assert!(id.idx() < self.nodes.len(), "foreign or stale NodeId");
        &self.nodes[id.idx()]
    }

    fn ordered(&self, a: NodeId, b: NodeId) -> (NodeId, NodeId) {
        if K::cmp_coord(self.key(a), self.key(b)) == Ordering::Greater {
            (b, a)
        } else {
            (a, b)
        }
    }

    fn height_of(&self, id: Option<NodeId>) -> u32 {
        id.map_or(0, |id| self.nodes[id.idx()].height)
    }

    fn update_height(&mut self, id: NodeId) {
        let node = &self.nodes[id.idx()];
        let h = 1 + self.height_of(node.left).max(self.height_of(node.right));
        self.nodes[id.idx()].height = h;
    }

    /// Restore AVL balance from the new leaf's parent up to the root.
    fn rebalance_path(&mut self, path: &[NodeId]) {
        for (depth, &id) in path.iter().enumerate().rev() {
            let sub = self.rebalance(id);
            if sub == id {
                continue;
            }
            if depth == 0 {
                self.root = Some(sub);
            } else {
                let parent = &mut self.nodes[path[depth - 1].idx()];
                if parent.left == Some(id) {
                    parent.left = Some(sub);
                } else {
                    parent.right = Some(sub);
                }
            }
        }
    }

    /// Rebalance the subtree rooted at `id`, returning its new root.
    fn rebalance(&mut self, id: NodeId) -> NodeId {
        self.update_height(id);
        let (left, right) = {
            let node = &self.nodes[id.idx()];
            (node.left, node.right)
        };
        let (lh, rh) = (self.height_of(left), self.height_of(right));

        if lh > rh + 1
            && let Some(l) = left
        {
            let (ll, lr) = {
                let node = &self.nodes[l.idx()];
                (node.left, node.right)
            };
            if self.height_of(ll) < self.height_of(lr) {
                let sub = self.rotate_left(l);
                self.nodes[id.idx()].left = Some(sub);
            }
            return self.rotate_right(id);
        }
        if rh > lh + 1
            && let Some(r) = right
        {
            let (rl, rr) = {
                let node = &self.nodes[r.idx()];
                (node.left, node.right)
            };
            if self.height_of(rr) < self.height_of(rl) {
                let sub = self.rotate_right(r);
                self.nodes[id.idx()].right = Some(sub);
            }
            return self.rotate_left(id);
        }
        id
    }

    fn rotate_right(&mut self, id: NodeId) -> NodeId {
        let Some(l) = self.nodes[id.idx()].left else {
            return id;
        };
        self.nodes[id.idx()].left = self.nodes[l.idx()].right;
        self.nodes[l.idx()].right = Some(id);
        self.update_height(id);
        self.update_height(l);
        l
    }

    fn rotate_left(&mut self, id: NodeId) -> NodeId {
        let Some(r) = self.nodes[id.idx()].right else {
            return id;
        };
        self.nodes[id.idx()].right = self.nodes[r.idx()].left;
        self.nodes[r.idx()].left = Some(id);
        self.update_height(id);
        self.update_height(r);
        r
    }
}

/// Iterator over the nodes of a key range. See [`CoordIndex::range_inclusive`].
#[derive(Clone)]
pub struct Range<'a, K, V> {
    index: &'a CoordIndex<K, V>,
    next: Option<NodeId>,
    end: NodeId,
}

impl<K, V> Debug for Range<'_, K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Range")
            .field("next", &self.next)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

impl<K: Coord, V> Iterator for Range<'_, K, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = if id == self.end {
            None
        } else {
            self.index.next(id)
        };
        Some(id)
    }
}

impl<K: Coord, V> FusedIterator for Range<'_, K, V> {}

/// In-order iterator over `(key, payload)` pairs. See [`CoordIndex::iter`].
#[derive(Clone)]
pub struct Iter<'a, K, V> {
    index: &'a CoordIndex<K, V>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<K, V> Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("next", &self.next)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

impl<'a, K: Coord, V> Iterator for Iter<'a, K, V> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = &self.index.nodes[id.idx()];
        self.next = node.next;
        self.remaining -= 1;
        Some((node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Coord, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K: Coord, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K: Coord, V> IntoIterator for &'a CoordIndex<K, V> {
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
