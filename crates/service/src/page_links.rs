//! Window of page numbers rendered as navigation links around the current page.
//!
//! The window is `current - on_each_side ..= current + on_each_side`, clamped
//! to `1..=total_pages`. It is clamped, not shifted: on the first page of ten
//! with two links per side the window is `1..=3`.

use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::ServiceError;

/// Links shown on each side of the current page unless configured otherwise.
pub const DEFAULT_ON_EACH_SIDE: u32 = 2;

/// Inclusive bounds of the page numbers to render as links.
///
/// Always `1 <= first <= last <= total_pages` for the page count it was
/// computed against; [`PageLinkRange::compute`] is the only constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageLinkRange {
    first: u32,
    last: u32,
}

impl PageLinkRange {
    /// Compute the link window for `current` out of `total_pages`.
    ///
    /// Fails with [`ServiceError::InvalidPage`] when `current` is not within
    /// `1..=total_pages`; with no pages at all every `current` is rejected, so
    /// callers must skip link rendering for empty result sets.
    pub fn compute(
        current: u32,
        total_pages: u32,
        on_each_side: u32,
    ) -> Result<Self, ServiceError> {
        if current == 0 || current > total_pages {
            warn!(current, total_pages, "rejecting page outside of link range");
            return Err(ServiceError::page_out_of_range(current, total_pages));
        }
        let first = current.saturating_sub(on_each_side).max(1);
        let last = current.saturating_add(on_each_side).min(total_pages);
        debug!(current, total_pages, on_each_side, first, last, "computed page link range");
        Ok(Self { first, last })
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    /// Number of links in the window.
    pub fn len(&self) -> u32 {
        self.last - self.first + 1
    }

    /// A computed range always holds at least the current page.
    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }

    pub fn contains(&self, page: u32) -> bool {
        self.pages().contains(&page)
    }

    pub fn pages(&self) -> RangeInclusive<u32> {
        self.first..=self.last
    }
}

impl IntoIterator for PageLinkRange {
    type Item = u32;
    type IntoIter = RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages()
    }
}

/// Free-function form of [`PageLinkRange::compute`].
pub fn compute(
    current: u32,
    total_pages: u32,
    on_each_side: u32,
) -> Result<PageLinkRange, ServiceError> {
    PageLinkRange::compute(current, total_pages, on_each_side)
}
