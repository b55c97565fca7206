// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Paginated result sets.
//!
//! A collection that knows its page, page size and total implements
//! [`Paginate`]; the engine then reports those numbers in the collection
//! metadata instead of the item count. [`Paginated`] covers the common case
//! of a page of describable items.

use std::fmt;

use crate::Describable;

/// Page request parameters.
///
/// Pages are 1-based.
///
/// # Example
///
/// ```rust
/// use sieve_core::PageRequest;
///
/// let first = PageRequest::page(1, 25); // offset=0, limit=25
/// let third = PageRequest::page(3, 25); // offset=50, limit=25
/// assert_eq!(third.offset, 50);
/// assert_eq!(third.number(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of results to return.
    pub limit: u64,

    /// Number of results to skip.
    pub offset: u64
}

impl PageRequest {
    /// Create request parameters from a raw limit and offset.
    pub const fn new(limit: u64, offset: u64) -> Self {
        Self {
            limit,
            offset
        }
    }

    /// Request page `page` (1-based) of `per_page` items.
    ///
    /// Page `0` is treated as page `1`. An offset that would overflow
    /// saturates, so such a page is past the end of any result set.
    pub const fn page(page: u64, per_page: u64) -> Self {
        let page = if page == 0 { 1 } else { page };
        Self {
            limit:  per_page,
            offset: (page - 1).saturating_mul(per_page)
        }
    }

    /// 1-based page number this request points at.
    pub const fn number(&self) -> u64 {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit).saturating_add(1)
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit:  10,
            offset: 0
        }
    }
}

/// Marker for one page of a paginated collection.
///
/// Renders as the query suffix selecting that page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageMarker {
    /// 1-based page number.
    pub id: u64
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?page={}", self.id)
    }
}

/// Pagination capability of a collection.
pub trait Paginate {
    /// Page size.
    fn limit(&self) -> u64;

    /// Number of items across all pages.
    fn total(&self) -> u64;

    /// Current 1-based page number.
    fn page(&self) -> u64;

    /// Items on the current page.
    fn items(&self) -> Vec<&dyn Describable>;

    /// Markers for every page, in order.
    fn pages(&self) -> Box<dyn Iterator<Item = PageMarker> + '_>;
}

impl fmt::Debug for dyn Paginate + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginate")
            .field("page", &self.page())
            .field("limit", &self.limit())
            .field("total", &self.total())
            .finish()
    }
}

/// One page of describable items.
///
/// # Example
///
/// ```rust,ignore
/// let all: Vec<User> = load_users();
/// let page = Paginated::paginate(&all, 2, 10);
///
/// assert_eq!(page.total(), all.len() as u64);
/// assert_eq!(page.items().len(), 10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Paginated<'a, T> {
    items: &'a [T],
    page:  u64,
    limit: u64,
    total: u64
}

impl<'a, T> Paginated<'a, T> {
    /// Wrap an already-fetched page.
    pub const fn new(items: &'a [T], page: u64, limit: u64, total: u64) -> Self {
        Self {
            items,
            page,
            limit,
            total
        }
    }

    /// Slice page `page` (1-based) of `limit` items out of `all`.
    ///
    /// A page past the end is empty.
    pub fn paginate(all: &'a [T], page: u64, limit: u64) -> Self {
        Self::with_request(all, PageRequest::page(page, limit))
    }

    /// Slice the page described by `request` out of `all`.
    pub fn with_request(all: &'a [T], request: PageRequest) -> Self {
        let len = all.len();
        let start = usize::try_from(request.offset).unwrap_or(usize::MAX).min(len);
        let end = usize::try_from(request.limit)
            .map_or(len, |limit| start.saturating_add(limit))
            .min(len);

        Self {
            items: &all[start..end],
            page:  request.number(),
            limit: request.limit,
            total: len as u64
        }
    }

    /// Items on this page.
    pub const fn as_slice(&self) -> &'a [T] {
        self.items
    }

    /// Number of pages, `0` when `limit` is zero.
    pub const fn page_count(&self) -> u64 {
        if self.limit == 0 {
            0
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    /// Whether a later page exists.
    pub const fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Whether an earlier page exists.
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

impl<T> Paginate for Paginated<'_, T>
where
    T: Describable
{
    fn limit(&self) -> u64 {
        self.limit
    }

    fn total(&self) -> u64 {
        self.total
    }

    fn page(&self) -> u64 {
        self.page
    }

    fn items(&self) -> Vec<&dyn Describable> {
        self.items.iter().map(|item| item as &dyn Describable).collect()
    }

    fn pages(&self) -> Box<dyn Iterator<Item = PageMarker> + '_> {
        Box::new((1..=self.page_count()).map(|id| PageMarker {
            id
        }))
    }
}
