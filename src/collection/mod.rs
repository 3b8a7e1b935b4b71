#[cfg(test)]
mod tests;

mod lazy;

use mockall::automock;
use thiserror::Error;

pub use lazy::LazyCollection;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("Collection backend error: {0}")]
    Backend(String),
}

pub type CollectionResult<T> = Result<T, CollectionError>;

/// A sequence of items that can be counted and sliced by position.
///
/// Implementations must treat `slice` bounds the way slicing a list in a
/// dynamic language does: bounds past the end are clamped and `start >= end`
/// yields an empty result rather than an error.
#[automock(type Item = String;)]
pub trait Collection {
    /// The item type returned by [`Collection::slice`].
    type Item;

    /// Total number of items, possibly by materializing the collection.
    fn total_count(&self) -> CollectionResult<usize>;

    /// Efficient count, if the backend has one that does not load the items.
    fn query_count(&self) -> Option<CollectionResult<usize>> {
        None
    }

    /// Materialize the items in the half-open range `[start, end)`.
    fn slice(&self, start: usize, end: usize) -> CollectionResult<Vec<Self::Item>>;
}

impl<T: Clone> Collection for [T] {
    type Item = T;

    fn total_count(&self) -> CollectionResult<usize> {
        Ok(self.len())
    }

    fn slice(&self, start: usize, end: usize) -> CollectionResult<Vec<T>> {
        let end = end.min(self.len());
        let start = start.min(end);
        Ok(self[start..end].to_vec())
    }
}

impl<T: Clone> Collection for Vec<T> {
    type Item = T;

    fn total_count(&self) -> CollectionResult<usize> {
        Ok(self.len())
    }

    fn slice(&self, start: usize, end: usize) -> CollectionResult<Vec<T>> {
        <[T] as Collection>::slice(self.as_slice(), start, end)
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    type Item = C::Item;

    fn total_count(&self) -> CollectionResult<usize> {
        (**self).total_count()
    }

    fn query_count(&self) -> Option<CollectionResult<usize>> {
        (**self).query_count()
    }

    fn slice(&self, start: usize, end: usize) -> CollectionResult<Vec<Self::Item>> {
        (**self).slice(start, end)
    }
}
