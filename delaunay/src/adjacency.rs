//! Per-vertex adjacency rings: a circular, angularly-ordered doubly linked
//! list of neighbors for every vertex, stored in a flat arena instead of
//! individually heap-allocated nodes.
//!
//! This is the representation the divide-and-conquer merge operates on
//! directly: [`Adjacency::insert`]/[`Adjacency::delete`] keep each ring
//! sorted by angle around its owning vertex, and [`Adjacency::pred`]/
//! [`Adjacency::succ`] walk one step around a ring.

use crate::predicates::{left_of, right_of};
use crate::types::{NodeId, VertexId};
use glam::DVec2;

#[derive(Debug, Clone, Copy)]
struct Node {
    vertex: VertexId,
    prev: NodeId,
    next: NodeId,
}

/// Arena of per-vertex adjacency rings, indexed by [`VertexId`].
pub(crate) struct Adjacency {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    head: Vec<NodeId>,
}

impl Adjacency {
    pub(crate) fn new(nverts: usize) -> Self {
        Adjacency {
            nodes: Vec::new(),
            free: Vec::new(),
            head: vec![NodeId::NIL; nverts],
        }
    }

    fn alloc(&mut self, vertex: VertexId) -> NodeId {
        let node = Node {
            vertex,
            prev: NodeId::NIL,
            next: NodeId::NIL,
        };
        if let Some(id) = self.free.pop() {
            self.nodes[id] = node;
            id
        } else {
            let id = NodeId::from(self.nodes.len());
            self.nodes.push(node);
            id
        }
    }

    fn splice_after(&mut self, after: NodeId, new: NodeId) {
        let tail = self.nodes[after].next;
        self.nodes[after].next = new;
        self.nodes[tail].prev = new;
        self.nodes[new].prev = after;
        self.nodes[new].next = tail;
    }

    /// The first neighbor in `vi`'s ring, if any.
    pub(crate) fn first(&self, vi: VertexId) -> Option<VertexId> {
        let head = self.head[vi];
        (!head.is_nil()).then(|| self.nodes[head].vertex)
    }

    pub(crate) fn has_neighbors(&self, vi: VertexId) -> bool {
        !self.head[vi].is_nil()
    }

    fn find(&self, vi: VertexId, vj: VertexId) -> Option<NodeId> {
        let head = self.head[vi];
        if head.is_nil() {
            return None;
        }
        let mut cur = head;
        loop {
            if self.nodes[cur].vertex == vj {
                return Some(cur);
            }
            cur = self.nodes[cur].next;
            if cur == head {
                return None;
            }
        }
    }

    /// The neighbor immediately before `vj` in `vi`'s ring.
    pub(crate) fn pred(&self, vi: VertexId, vj: VertexId) -> Option<VertexId> {
        self.find(vi, vj).map(|n| self.nodes[self.nodes[n].prev].vertex)
    }

    /// The neighbor immediately after `vj` in `vi`'s ring.
    pub(crate) fn succ(&self, vi: VertexId, vj: VertexId) -> Option<VertexId> {
        self.find(vi, vj).map(|n| self.nodes[self.nodes[n].next].vertex)
    }

    /// Inserts `in_` into `parent`'s ring in angular order around `parent`.
    fn insert(&mut self, points: &[DVec2], parent: VertexId, in_: VertexId) {
        let new = self.alloc(in_);
        let Some(head) = self.head_id(parent) else {
            self.head[parent] = new;
            self.nodes[new].prev = new;
            self.nodes[new].next = new;
            return;
        };
        let head_vertex = self.nodes[head].vertex;

        if right_of(points[in_], points[parent], points[head_vertex]) {
            let mut cur = self.nodes[head].prev;
            while cur != head && right_of(points[in_], points[parent], points[self.nodes[cur].vertex]) {
                cur = self.nodes[cur].prev;
            }
            if cur == head {
                // `in_` is the convex-hull successor of `parent`: it becomes "first".
                let tail = self.nodes[cur].prev;
                self.splice_after(tail, new);
                self.head[parent] = new;
            } else {
                self.splice_after(cur, new);
            }
        } else {
            let mut cur = self.nodes[head].next;
            while cur != head && left_of(points[in_], points[parent], points[self.nodes[cur].vertex]) {
                cur = self.nodes[cur].next;
            }
            if self.nodes[cur].vertex == in_ {
                self.free.push(new); // duplicate edge, discard the unused node
                return;
            }
            let before = self.nodes[cur].prev;
            self.splice_after(before, new);
        }
    }

    /// Removes `child` from `parent`'s ring, if present.
    fn delete(&mut self, parent: VertexId, child: VertexId) {
        let Some(node) = self.find(parent, child) else {
            return;
        };
        let head = self.head[parent];
        let prev = self.nodes[node].prev;
        let next = self.nodes[node].next;
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        if node == head {
            self.head[parent] = if next == node { NodeId::NIL } else { next };
        }
        self.free.push(node);
    }

    /// Connects `a` and `b`: inserts each into the other's ring. No-op if
    /// `a == b`.
    pub(crate) fn connect(&mut self, points: &[DVec2], a: VertexId, b: VertexId) {
        if a == b {
            return;
        }
        self.insert(points, a, b);
        self.insert(points, b, a);
    }

    /// Disconnects `a` and `b`. No-op if `a == b`.
    pub(crate) fn cut(&mut self, a: VertexId, b: VertexId) {
        if a == b {
            return;
        }
        self.delete(a, b);
        self.delete(b, a);
    }

    /// Frees every node in `vi`'s ring and empties it. Used by triangle
    /// extraction to mark a vertex as fully processed.
    pub(crate) fn clear_vertex(&mut self, vi: VertexId) {
        let head = self.head[vi];
        if head.is_nil() {
            return;
        }
        let mut cur = head;
        loop {
            let next = self.nodes[cur].next;
            self.free.push(cur);
            if next == head {
                break;
            }
            cur = next;
        }
        self.head[vi] = NodeId::NIL;
    }

    fn head_id(&self, vi: VertexId) -> Option<NodeId> {
        let head = self.head[vi];
        (!head.is_nil()).then_some(head)
    }
}
