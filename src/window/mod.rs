
mod query;

use std::{collections::BTreeSet, ops::RangeInclusive};

use serde::Serialize;

pub use query::query_fragment;

use crate::{
    collection::Collection,
    paginator::{Page, Paginator},
};

/// Build the page numbers to show for `current` out of `num_pages` pages.
///
/// The result holds the first `window` pages, the pages around `current` and
/// the last `window` pages in ascending order. `None` stands for a run of two
/// or more hidden pages; a single hidden page is shown instead.
///
/// The neighbourhood of `current` is taken by position in the page range: it
/// spans `window` pages before `current` but only `window - 1` pages after it.
pub fn build_window(num_pages: usize, current: usize, window: usize) -> Vec<Option<usize>> {
    // Position `i` in the page range holds page `i + 1`.
    let pages_at = |start: usize, end: usize| -> BTreeSet<usize> {
        (start.min(num_pages)..end.min(num_pages)).map(|i| i + 1).collect()
    };

    let first = pages_at(0, window);
    let last = pages_at(num_pages.saturating_sub(window), num_pages);
    let current_start = current.saturating_sub(1).saturating_sub(window);
    let current_end = current.saturating_add(window).saturating_sub(1);
    let around = pages_at(current_start, current_end);

    let mut pages = Vec::with_capacity(first.len() + around.len() + last.len() + 2);

    if first.is_disjoint(&around) {
        pages.extend(first.iter().copied().map(Some));
        if let (Some(&head_end), Some(&around_start)) = (first.last(), around.first()) {
            push_gap(&mut pages, head_end, around_start);
        }
        pages.extend(around.iter().copied().map(Some));
    } else {
        pages.extend(first.union(&around).copied().map(Some));
    }

    if around.is_disjoint(&last) {
        let emitted = pages.last().copied().flatten();
        if let (Some(emitted), Some(&tail_start)) = (emitted, last.first()) {
            push_gap(&mut pages, emitted, tail_start);
        }
        pages.extend(last.iter().copied().map(Some));
    } else {
        pages.extend(last.difference(&around).copied().map(Some));
    }

    tracing::debug!("Built window around page {current} of {num_pages}: {pages:?}");
    pages
}

fn push_gap(pages: &mut Vec<Option<usize>>, from: usize, to: usize) {
    match to.checked_sub(from) {
        Some(1) => {}
        Some(2) => pages.push(Some(to - 1)),
        _ => pages.push(None),
    }
}

/// Everything a renderer needs to draw the page links for one page.
pub struct DisplayWindow<'p, 'a, C: Collection> {
    page: &'p Page<'a, C>,
    pages: Vec<Option<usize>>,
    is_paginated: bool,
    query_fragment: Option<String>,
}

impl<'p, 'a, C: Collection> DisplayWindow<'p, 'a, C> {
    /// Build the window around `page`, showing `window` neighbours.
    pub fn new(page: &'p Page<'a, C>, window: usize) -> Self {
        let pages = build_window(page.num_pages(), page.number(), window);
        let is_paginated = page.count() > page.paginator().per_page();

        Self { page, pages, is_paginated, query_fragment: None }
    }

    /// Attach the query string to append to every page link.
    pub fn with_query_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.query_fragment = Some(fragment.into());
        self
    }

    /// Page numbers to link to, `None` marking an elided gap.
    pub fn pages(&self) -> &[Option<usize>] {
        &self.pages
    }

    pub fn page(&self) -> &'p Page<'a, C> {
        self.page
    }

    pub fn paginator(&self) -> &'a Paginator<C> {
        self.page.paginator()
    }

    pub fn page_range(&self) -> RangeInclusive<usize> {
        1..=self.page.num_pages()
    }

    /// Whether there is more than one page worth of items.
    pub fn is_paginated(&self) -> bool {
        self.is_paginated
    }

    pub fn query_fragment(&self) -> Option<&str> {
        self.query_fragment.as_deref()
    }

    pub fn summary(&self) -> PageSummary {
        let page = self.page;
        PageSummary {
            number: page.number(),
            num_pages: page.num_pages(),
            count: page.count(),
            per_page: self.paginator().per_page(),
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            previous_page_number: page.has_previous().then(|| page.number() - 1),
            next_page_number: page.has_next().then(|| page.number() + 1),
            start_index: page.start_index(),
            end_index: page.end_index(),
            pages: self.pages.clone(),
            is_paginated: self.is_paginated,
            query_fragment: self.query_fragment.clone(),
        }
    }
}

/// A serializable snapshot of a [`DisplayWindow`] for template engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub number: usize,
    pub num_pages: usize,
    pub count: usize,
    pub per_page: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_page_number: Option<usize>,
    pub next_page_number: Option<usize>,
    pub start_index: usize,
    pub end_index: usize,
    pub pages: Vec<Option<usize>>,
    pub is_paginated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_fragment: Option<String>,
}
