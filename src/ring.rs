use std::fmt;

use crate::{Coords, idx::{Idx, IdxDisplay, SliceExt}};

/// A polygon vertex linked into the circular vertex list of a [Ring]
#[derive(Clone)]
pub(crate) struct RingVertex<C: Copy> {
    coords: Coords<C>,
    source: usize,
    prev: Idx<RingVertex<C>>,
    next: Idx<RingVertex<C>>,
    live: bool,
}

impl<C: Copy> RingVertex<C> {
    /// Position of this vertex in the caller's polygon
    pub fn source(&self) -> usize { self.source }
    pub fn is_live(&self) -> bool { self.live }
}

impl<C: Copy + fmt::Debug> fmt::Debug for RingVertex<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingVertex")
            .field("coords", &self.coords)
            .field("source", &self.source)
            .field("prev", &self.prev)
            .field("next", &self.next)
            .field("live", &self.live)
            .finish()
    }
}

impl<C: Copy> IdxDisplay for RingVertex<C> {
    fn fmt(f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result {
        write!(f, "v{}", idx)
    }
}

pub(crate) type VertexIdx<C> = Idx<RingVertex<C>>;

/// A circular doubly-linked list over a dense vertex arena.
///
/// Removing a vertex unlinks it and marks it dead; its index is never reused, so
/// indices held elsewhere stay meaningful.
#[derive(Debug, Clone)]
pub(crate) struct Ring<C: Copy> {
    vs: Vec<RingVertex<C>>,
    len: usize,
}

impl<C: Copy> Ring<C> {
    /// Links `points` in order, closing the ring from the last point back to the first.
    /// Each point carries its position in the caller's polygon.
    pub fn new(points: impl ExactSizeIterator<Item = (usize, Coords<C>)>) -> Self {
        let len = points.len();
        let mut vs = Vec::with_capacity(len);
        for (i, (source, coords)) in points.enumerate() {
            let vi = Idx::new(i);
            vs.push(RingVertex {
                coords,
                source,
                prev: vi.prev_wrapped(len),
                next: vi.next_wrapped(len),
                live: true,
            });
        }
        Self { vs, len }
    }

    /// The number of live vertices
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn prev(&self, vi: VertexIdx<C>) -> VertexIdx<C> {
        self.vs[vi].prev
    }

    pub fn next(&self, vi: VertexIdx<C>) -> VertexIdx<C> {
        self.vs[vi].next
    }

    pub fn coords(&self, vi: VertexIdx<C>) -> Coords<C> {
        self.vs[vi].coords
    }

    pub fn vertex(&self, vi: VertexIdx<C>) -> &RingVertex<C> {
        &self.vs[vi]
    }

    /// `(prev, vi, next)` coordinates, the triangle a vertex would be clipped with
    pub fn triangle(&self, vi: VertexIdx<C>) -> [Coords<C>; 3] {
        [self.coords(self.prev(vi)), self.coords(vi), self.coords(self.next(vi))]
    }

    /// Unlinks `vi`, joining its neighbors to each other
    pub fn remove(&mut self, vi: VertexIdx<C>) {
        debug_assert!(self.vs[vi].live, "{:?} was already removed", vi);
        let RingVertex { prev, next, .. } = self.vs[vi];
        self.vs[prev].next = next;
        self.vs[next].prev = prev;
        self.vs[vi].live = false;
        self.len -= 1;
    }

    /// All vertices in their original order, including removed ones
    pub fn iter_index(&self) -> impl Iterator<Item = VertexIdx<C>> {
        self.vs.iter_index()
    }

    /// Live vertices, following the ring from the lowest live index
    #[cfg(any(test, feature = "debugging"))]
    pub fn iter_live(&self) -> impl Iterator<Item = VertexIdx<C>> + '_ {
        let start = self.iter_index().find(|vi| self.vs[*vi].live);
        let len = self.len;
        let mut current = start;
        (0..len).filter_map(move |_| {
            let vi = current?;
            current = Some(self.next(vi));
            Some(vi)
        })
    }
}
