use std::{fmt, ops::Index, slice};

use super::{Paginator, Result};
use crate::collection::Collection;

/// One page of items loaded from a [`Paginator`].
pub struct Page<'a, C: Collection> {
    items: Vec<C::Item>,
    number: usize,
    paginator: &'a Paginator<C>,
    // Snapshots of the paginator's cached totals.
    count: usize,
    num_pages: usize,
}

impl<'a, C: Collection> Page<'a, C> {
    pub(super) fn new(
        items: Vec<C::Item>,
        number: usize,
        paginator: &'a Paginator<C>,
        count: usize,
        num_pages: usize,
    ) -> Self {
        Self { items, number, paginator, count, num_pages }
    }

    /// The 1-based number of this page.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn paginator(&self) -> &'a Paginator<C> {
        self.paginator
    }

    /// Total number of items across all pages.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Total number of pages.
    pub fn num_pages(&self) -> usize {
        self.num_pages
    }

    pub fn items(&self) -> &[C::Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<C::Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&C::Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, C::Item> {
        self.items.iter()
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_other_pages(&self) -> bool {
        self.has_previous() || self.has_next()
    }

    /// The next page number, or an error on the last page.
    pub fn next_page_number(&self) -> Result<usize> {
        self.paginator.validate_number(self.number + 1)
    }

    /// The previous page number, or an error on the first page.
    pub fn previous_page_number(&self) -> Result<usize> {
        self.paginator.validate_number(self.number - 1)
    }

    /// The 1-based position of the first item on this page within the whole
    /// collection, or 0 when the collection is empty.
    pub fn start_index(&self) -> usize {
        if self.count == 0 {
            return 0;
        }
        self.paginator.per_page() * (self.number - 1) + 1
    }

    /// The 1-based position of the last item on this page within the whole
    /// collection.
    pub fn end_index(&self) -> usize {
        // The last page may carry orphans.
        if self.number == self.num_pages {
            return self.count;
        }
        self.number * self.paginator.per_page()
    }
}

impl<C: Collection> Index<usize> for Page<'_, C> {
    type Output = C::Item;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<'p, C: Collection> IntoIterator for &'p Page<'_, C> {
    type Item = &'p C::Item;
    type IntoIter = slice::Iter<'p, C::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<C: Collection> fmt::Display for Page<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {} of {}", self.number, self.num_pages)
    }
}

impl<C: Collection> fmt::Debug for Page<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("number", &self.number)
            .field("num_pages", &self.num_pages)
            .field("len", &self.items.len())
            .finish_non_exhaustive()
    }
}
