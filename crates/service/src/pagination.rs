//! Pagination utilities for service layer
//!
//! Provides the `PageParam` request parameter, a `Paginator` that cuts an
//! ordered record list into pages, and the resulting `PageContext` consumed
//! by list views.

use std::ops::Range;

use configs::MAX_PER_PAGE;
use serde::Serialize;
use tracing::warn;

use crate::errors::ServiceError;
use crate::page_links::PageLinkRange;

/// Page requested through the query string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageParam {
    Number(u32),
    /// the literal `last`
    Last,
}

impl PageParam {
    /// Parse a raw query value. Absent means page 1.
    pub fn parse(raw: Option<&str>) -> Result<Self, ServiceError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::Number(1)),
            Some("last") => Ok(Self::Last),
            Some(s) => s
                .parse::<u32>()
                .map(Self::Number)
                .map_err(|_| ServiceError::InvalidPage(format!("page {s:?} is not an integer"))),
        }
    }

    /// Concrete page number for a result set with `num_pages` pages.
    pub fn resolve(self, num_pages: u32) -> u32 {
        match self {
            Self::Number(n) => n,
            Self::Last => num_pages.max(1),
        }
    }
}

/// Splits `count` ordered records into pages of `per_page`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    count: usize,
    per_page: u32,
}

impl Paginator {
    /// `per_page` must lie within `1..=MAX_PER_PAGE`, the same bound the
    /// pagination settings are validated against.
    pub fn new(count: usize, per_page: u32) -> Result<Self, ServiceError> {
        if per_page == 0 || per_page > MAX_PER_PAGE {
            return Err(ServiceError::Validation(format!(
                "per_page must be within 1..={MAX_PER_PAGE}, got {per_page}"
            )));
        }
        Ok(Self { count, per_page })
    }

    pub fn count(&self) -> usize { self.count }

    pub fn per_page(&self) -> u32 { self.per_page }

    /// Zero for an empty record set.
    pub fn num_pages(&self) -> u32 {
        let pages = self.count.div_ceil(self.per_page as usize);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Accept `number` if it names an existing page. Page 1 of an empty
    /// record set is accepted so list views can show an empty first page.
    pub fn validate_number(&self, number: u32) -> Result<u32, ServiceError> {
        let num_pages = self.num_pages();
        if number == 0 || (number > num_pages && !(number == 1 && num_pages == 0)) {
            warn!(number, num_pages, "requested page does not exist");
            return Err(ServiceError::page_out_of_range(number, num_pages));
        }
        Ok(number)
    }

    /// Record indices covered by page `number`.
    pub fn bounds(&self, number: u32) -> Result<Range<usize>, ServiceError> {
        let number = self.validate_number(number)?;
        let bottom = (number as usize - 1).saturating_mul(self.per_page as usize);
        let top = bottom.saturating_add(self.per_page as usize).min(self.count);
        Ok(bottom.min(top)..top)
    }

    /// Build page `number`, loading only its records through `fetch`, like an
    /// offset/limit query against the full result set.
    pub fn page_with<T, F>(&self, number: u32, fetch: F) -> Result<PageContext<T>, ServiceError>
    where
        F: FnOnce(Range<usize>) -> Vec<T>,
    {
        let items = fetch(self.bounds(number)?);
        Ok(PageContext {
            number,
            total_pages: self.num_pages(),
            count: self.count,
            per_page: self.per_page,
            items,
        })
    }

    /// Cut page `number` out of `records`.
    pub fn page<T: Clone>(
        &self,
        records: &[T],
        number: u32,
    ) -> Result<PageContext<T>, ServiceError> {
        self.page_with(number, |range| {
            records.iter().skip(range.start).take(range.len()).cloned().collect()
        })
    }
}

/// One page of a result set as handed to a list view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageContext<T> {
    pub number: u32,
    pub total_pages: u32,
    /// records in the whole result set
    pub count: usize,
    pub per_page: u32,
    pub items: Vec<T>,
}

impl<T> PageContext<T> {
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_other_pages(&self) -> bool {
        self.has_next() || self.has_previous()
    }

    pub fn next_page_number(&self) -> Option<u32> {
        self.has_next().then(|| self.number + 1)
    }

    pub fn previous_page_number(&self) -> Option<u32> {
        self.has_previous().then(|| self.number - 1)
    }

    /// 1-based index of the first record on this page, 0 when empty.
    pub fn start_index(&self) -> usize {
        if self.count == 0 {
            return 0;
        }
        (self.number as usize - 1) * self.per_page as usize + 1
    }

    /// 1-based index of the last record on this page, 0 when empty.
    pub fn end_index(&self) -> usize {
        if self.items.is_empty() {
            return 0;
        }
        self.start_index() + self.items.len() - 1
    }

    /// Link window around this page, `None` when there are no pages to link.
    pub fn link_range(
        &self,
        on_each_side: u32,
    ) -> Result<Option<PageLinkRange>, ServiceError> {
        if self.total_pages == 0 {
            return Ok(None);
        }
        PageLinkRange::compute(self.number, self.total_pages, on_each_side).map(Some)
    }
}
