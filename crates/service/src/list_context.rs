//! Everything a paginated list template needs, assembled in one call.

use std::ops::Range;

use common::types::PageQuery;
use configs::PaginationConfig;
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::ServiceError;
use crate::page_links::PageLinkRange;
use crate::page_nav::{page_url, PageNav};
use crate::pagination::{PageContext, PageParam, Paginator};

/// A numbered link inside the page window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub number: u32,
    pub url: String,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListContext<T> {
    pub page: PageContext<T>,
    /// more than one page exists
    pub is_paginated: bool,
    pub link_range: Option<PageLinkRange>,
    pub page_links: Vec<PageLink>,
    pub nav: PageNav,
}

impl<T: Clone> ListContext<T> {
    /// Paginate `records` for the page named in `query`.
    ///
    /// Unknown or out-of-range pages are [`ServiceError::InvalidPage`]; the
    /// caller maps that to its not-found response.
    pub fn build(
        records: &[T],
        query: &PageQuery,
        settings: &PaginationConfig,
    ) -> Result<Self, ServiceError> {
        Self::build_with(records.len(), query, settings, |range| {
            records.iter().skip(range.start).take(range.len()).cloned().collect()
        })
    }
}

impl<T> ListContext<T> {
    /// Like [`ListContext::build`] for a result set known only by its `count`;
    /// `fetch` loads the records of the selected page by index range.
    pub fn build_with<F>(
        count: usize,
        query: &PageQuery,
        settings: &PaginationConfig,
        fetch: F,
    ) -> Result<Self, ServiceError>
    where
        F: FnOnce(Range<usize>) -> Vec<T>,
    {
        let paginator = Paginator::new(count, settings.per_page)?;
        let number = PageParam::parse(query.page())
            .inspect_err(|e| warn!(error = %e, "unparseable page parameter"))?
            .resolve(paginator.num_pages());
        let page = paginator.page_with(number, fetch)?;
        Self::from_page(page, settings)
    }

    /// Attach link window and navigation to an already cut page.
    pub fn from_page(
        page: PageContext<T>,
        settings: &PaginationConfig,
    ) -> Result<Self, ServiceError> {
        let link_range = page.link_range(settings.on_each_side)?;
        let page_links = link_range
            .map(|range| {
                range
                    .into_iter()
                    .map(|n| PageLink {
                        number: n,
                        url: page_url(&settings.page_kwarg, n),
                        current: n == page.number,
                    })
                    .collect()
            })
            .unwrap_or_default();
        let nav = PageNav::new(page.number, page.total_pages, &settings.page_kwarg);
        debug!(
            number = page.number,
            total_pages = page.total_pages,
            items = page.items.len(),
            "built list context"
        );
        Ok(Self {
            is_paginated: page.total_pages > 1,
            page,
            link_range,
            page_links,
            nav,
        })
    }
}
