
mod number;
mod page;

use std::{cell::OnceCell, fmt, ops::RangeInclusive};

use thiserror::Error;

pub use number::IntoPageNumber;
pub use page::Page;

use crate::{
    collection::{Collection, CollectionError},
    config::PaginationConfig,
};

/// Why a page number points at no page.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPage {
    #[error("That page number is less than 1")]
    LessThanOne,
    #[error("That page contains no results")]
    NoResults,
}

/// A requested page that cannot be served.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPage {
    #[error("That page number is not an integer")]
    PageNotAnInteger,
    #[error(transparent)]
    EmptyPage(#[from] EmptyPage),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginatorError {
    #[error("Invalid page: {0}")]
    InvalidPage(#[from] InvalidPage),
    #[error("Failed to read collection: {0}")]
    Collection(#[from] CollectionError),
    #[error("Page size must be at least 1")]
    ZeroPerPage,
}

impl PaginatorError {
    /// The page error, if this is one.
    pub fn as_invalid_page(&self) -> Option<InvalidPage> {
        match self {
            Self::InvalidPage(e) => Some(*e),
            _ => None,
        }
    }
}

type Result<T> = std::result::Result<T, PaginatorError>;

/// Splits a collection into numbered pages of `per_page` items.
///
/// The item count and the page count are computed on first use and cached for
/// the paginator's lifetime, so the collection must not change underneath it.
pub struct Paginator<C: Collection> {
    collection: C,
    per_page: usize,
    // Trailing items that get folded into the last page instead of forming
    // their own short page.
    orphans: usize,
    allow_empty_first_page: bool,
    count: OnceCell<usize>,
    num_pages: OnceCell<usize>,
}

impl<C: Collection> Paginator<C> {
    /// Create a paginator that allows an empty first page.
    pub fn new(collection: C, per_page: usize, orphans: usize) -> Result<Self> {
        if per_page == 0 {
            return Err(PaginatorError::ZeroPerPage);
        }

        Ok(Self {
            collection,
            per_page,
            orphans,
            allow_empty_first_page: true,
            count: OnceCell::new(),
            num_pages: OnceCell::new(),
        })
    }

    /// Create a paginator from the page size, orphans and empty-first-page
    /// settings of `config`.
    pub fn from_config(collection: C, config: &PaginationConfig) -> Result<Self> {
        Ok(Self::new(collection, config.per_page, config.orphans)?
            .allow_empty_first_page(config.allow_empty_first_page))
    }

    /// Set whether an empty collection still has a first page.
    pub fn allow_empty_first_page(mut self, allow: bool) -> Self {
        self.allow_empty_first_page = allow;
        self
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn orphans(&self) -> usize {
        self.orphans
    }

    pub fn allows_empty_first_page(&self) -> bool {
        self.allow_empty_first_page
    }

    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// Total number of items across all pages.
    ///
    /// Uses the collection's query count when it has one and falls back to its
    /// plain length otherwise.
    pub fn count(&self) -> Result<usize> {
        if let Some(count) = self.count.get() {
            return Ok(*count);
        }

        let count = match self.collection.query_count() {
            Some(count) => count?,
            None => self.collection.total_count()?,
        };
        tracing::debug!("Counted {count} items to paginate");

        Ok(*self.count.get_or_init(|| count))
    }

    /// Total number of pages.
    pub fn num_pages(&self) -> Result<usize> {
        if let Some(num_pages) = self.num_pages.get() {
            return Ok(*num_pages);
        }

        let count = self.count()?;
        let num_pages = if count == 0 && !self.allow_empty_first_page {
            0
        } else {
            let hits = count.saturating_sub(self.orphans).max(1);
            hits.div_ceil(self.per_page)
        };

        Ok(*self.num_pages.get_or_init(|| num_pages))
    }

    /// The 1-based page numbers, `1..=num_pages`.
    pub fn page_range(&self) -> Result<RangeInclusive<usize>> {
        Ok(1..=self.num_pages()?)
    }

    /// Check that `number` names an existing page and return it.
    pub fn validate_number(&self, number: impl IntoPageNumber) -> Result<usize> {
        let number = number.into_page_number()?;
        if number < 1 {
            return Err(InvalidPage::from(EmptyPage::LessThanOne).into());
        }

        let number =
            usize::try_from(number).map_err(|_| InvalidPage::from(EmptyPage::NoResults))?;
        if number > self.num_pages()? && !(number == 1 && self.allow_empty_first_page) {
            return Err(InvalidPage::from(EmptyPage::NoResults).into());
        }

        Ok(number)
    }

    /// Load the items of page `number`.
    ///
    /// When `orphans` or fewer items would remain after this page, they are
    /// included in it instead of forming a page of their own.
    pub fn page(&self, number: impl IntoPageNumber) -> Result<Page<'_, C>> {
        let number = self.validate_number(number)?;
        let count = self.count()?;
        let num_pages = self.num_pages()?;

        let bottom = (number - 1) * self.per_page;
        let mut top = bottom + self.per_page;
        if top.saturating_add(self.orphans) >= count {
            top = count;
        }

        let items = self.collection.slice(bottom, top)?;
        tracing::debug!("Loaded page {number} of {num_pages}: items {bottom}..{top}");

        Ok(Page::new(items, number, self, count, num_pages))
    }
}

impl<C: Collection> fmt::Debug for Paginator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("per_page", &self.per_page)
            .field("orphans", &self.orphans)
            .field("allow_empty_first_page", &self.allow_empty_first_page)
            .field("count", &self.count.get())
            .field("num_pages", &self.num_pages.get())
            .finish_non_exhaustive()
    }
}
