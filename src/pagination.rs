use std::fmt;

use crate::{
    collection::Collection,
    config::InvalidPagePolicy,
    paginator::{IntoPageNumber, InvalidPage, Page, Paginator, PaginatorError},
};

/// The outcome of resolving a requested page.
pub enum Paginated<'a, C: Collection> {
    /// The requested page exists.
    Page(Page<'a, C>),
    /// The requested page does not exist and the policy asked for an empty
    /// result instead of an error.
    Invalid(InvalidPage),
}

impl<'a, C: Collection> Paginated<'a, C> {
    /// Items to render: the page's items, or nothing for an invalid page.
    pub fn items(&self) -> &[C::Item] {
        match self {
            Self::Page(page) => page.items(),
            Self::Invalid(_) => &[],
        }
    }

    pub fn page(&self) -> Option<&Page<'a, C>> {
        match self {
            Self::Page(page) => Some(page),
            Self::Invalid(_) => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

impl<C: Collection> fmt::Debug for Paginated<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => f.debug_tuple("Page").field(page).finish(),
            Self::Invalid(e) => f.debug_tuple("Invalid").field(e).finish(),
        }
    }
}

/// Load the requested page, applying `policy` when it does not exist.
///
/// Collection errors are returned regardless of the policy.
pub fn resolve_page<C: Collection>(
    paginator: &Paginator<C>,
    number: impl IntoPageNumber,
    policy: InvalidPagePolicy,
) -> Result<Paginated<'_, C>, PaginatorError> {
    match paginator.page(number) {
        Ok(page) => Ok(Paginated::Page(page)),
        Err(PaginatorError::InvalidPage(e)) if policy == InvalidPagePolicy::Empty => {
            tracing::warn!("Invalid page requested, rendering no items: {e}");
            Ok(Paginated::Invalid(e))
        }
        Err(e) => Err(e),
    }
}
