use super::{Collection, CollectionResult};

type FetchFn<'a, T> = Box<dyn Fn(usize, usize) -> CollectionResult<Vec<T>> + 'a>;
type CountFn<'a> = Box<dyn Fn() -> CollectionResult<usize> + 'a>;

/// A collection backed by callbacks, e.g. a database cursor or a remote API.
///
/// Nothing is loaded until the paginator asks for a count or a page. The fetch
/// callback receives a half-open `[start, end)` range where `end` may be
/// `usize::MAX`, meaning "through the last item".
pub struct LazyCollection<'a, T> {
    fetch: FetchFn<'a, T>,
    count: Option<CountFn<'a>>,
}

impl<'a, T> LazyCollection<'a, T> {
    /// Create a collection from a range fetcher.
    pub fn new(fetch: impl Fn(usize, usize) -> CollectionResult<Vec<T>> + 'a) -> Self {
        Self { fetch: Box::new(fetch), count: None }
    }

    /// Attach a count query that avoids loading every item.
    pub fn with_count(mut self, count: impl Fn() -> CollectionResult<usize> + 'a) -> Self {
        self.count = Some(Box::new(count));
        self
    }
}

impl<T> Collection for LazyCollection<'_, T> {
    type Item = T;

    fn total_count(&self) -> CollectionResult<usize> {
        tracing::debug!("Materializing lazy collection to measure its length");
        Ok((self.fetch)(0, usize::MAX)?.len())
    }

    fn query_count(&self) -> Option<CollectionResult<usize>> {
        self.count.as_ref().map(|count| count())
    }

    fn slice(&self, start: usize, end: usize) -> CollectionResult<Vec<T>> {
        if start >= end {
            return Ok(Vec::new());
        }
        (self.fetch)(start, end)
    }
}
