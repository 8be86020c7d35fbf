use std::{fmt, marker::PhantomData, ops, cmp};

/// A typed index into a `Vec<T>` arena. Stays valid for as long as the arena is
/// only appended to, which lets sets of `Idx` stand in for sets of references.
#[repr(transparent)]
pub struct Idx<T>(usize, PhantomData<fn() -> T>);

impl<T> fmt::Debug for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

pub trait IdxDisplay {
    fn fmt(f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result;
}

impl<T: IdxDisplay> fmt::Display for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::fmt(f, self.usize())
    }
}

impl<T> Idx<T> {
    pub fn new(index: usize) -> Self {
        Self(index, PhantomData)
    }

    /// The following index in a ring of `len` elements
    pub fn next_wrapped(&self, len: usize) -> Self {
        if len == 0 {
            panic!("ring must not be empty");
        }
        Self::new((self.usize() + 1) % len)
    }

    /// The preceding index in a ring of `len` elements
    pub fn prev_wrapped(&self, len: usize) -> Self {
        if len == 0 {
            panic!("ring must not be empty");
        }

        let index = if self.usize() == 0 {
            len
        } else {
            self.usize()
        };
        Self::new(index - 1)
    }

    pub fn usize(&self) -> usize {
        self.0
    }
}

// #[derive] does not work where type parameters do not implement the trait
// https://github.com/rust-lang/rust/issues/26925
impl<T> Clone for Idx<T> {
    fn clone(&self) -> Self {
        Self(self.0, PhantomData)
    }
}

impl<T> Copy for Idx<T> { }

impl<T> PartialEq for Idx<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Idx<T> { }

impl<T> cmp::PartialOrd for Idx<T> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> cmp::Ord for Idx<T> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> ops::Index<Idx<T>> for Vec<T> {
    type Output = T;

    fn index(&self, index: Idx<T>) -> &Self::Output {
        &self[index.usize()]
    }
}

impl<T> ops::IndexMut<Idx<T>> for Vec<T> {
    fn index_mut(&mut self, index: Idx<T>) -> &mut Self::Output {
        &mut self[index.usize()]
    }
}

pub trait SliceExt<T> {
    fn iter_index(&self) -> SliceIndexIter<T>;
}

impl<T> SliceExt<T> for Vec<T> {
    fn iter_index(&self) -> SliceIndexIter<T> {
        SliceIndexIter::new(self.len())
    }
}

pub struct SliceIndexIter<T> {
    len: usize,
    index: usize,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> SliceIndexIter<T> {
    fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            _phantom: PhantomData,
        }
    }
}

impl<T> Iterator for SliceIndexIter<T> {
    type Item = Idx<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.len {
            let result = Some(Idx::new(self.index));
            self.index += 1;
            result
        } else {
            None
        }
    }
}
