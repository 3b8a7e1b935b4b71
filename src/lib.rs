#![warn(missing_docs)]
//! Digg-style pagination for large, lazily evaluated collections.
//!
//! A [`Paginator`] splits a [`Collection`] into fixed-size pages, folding a
//! short trailing page into its predecessor when it would hold fewer than
//! `orphans` items. A [`DisplayWindow`] then turns the page range and the
//! current page into a compact list of page numbers, with `None` marking the
//! gaps a renderer shows as an ellipsis.

/// Collection adapters the paginator reads from.
pub mod collection;
/// Pagination defaults and their environment overrides.
pub mod config;
/// Resolving a requested page under an invalid-page policy.
pub mod pagination;
/// The paginator, its pages and page-number validation.
pub mod paginator;
/// Page-number windows with gap markers.
pub mod window;

pub use crate::{
    collection::{Collection, CollectionError, LazyCollection},
    config::{InvalidPagePolicy, PaginationConfig},
    pagination::{Paginated, resolve_page},
    paginator::{EmptyPage, IntoPageNumber, InvalidPage, Page, Paginator, PaginatorError},
    window::{DisplayWindow, PageSummary, build_window, query_fragment},
};
