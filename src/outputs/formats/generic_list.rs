use std::marker::PhantomData;

use crate::List;

/// Wraps a caller-provided [List], remembering its initial length so a failed
/// triangulation can be rolled back
pub(crate) struct GenericList<L: List<V>, V> {
    list: L,
    initial_triangle_count: usize,
    _phantom: PhantomData<V>,
}

impl<L: List<V>, V> GenericList<L, V> {
    pub fn new(list: L) -> Self {
        let initial_triangle_count = list.len();
        Self {
            list,
            initial_triangle_count,
            _phantom: PhantomData,
        }
    }

    pub fn new_triangle(&mut self, v0: V, v1: V, v2: V) {
        self.list.push(v0, v1, v2);
    }

    pub fn build(self) -> L {
        self.list
    }

    pub fn fail(mut self) {
        self.list.truncate(self.initial_triangle_count);
    }
}
