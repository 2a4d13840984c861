//! First/previous/next/last links shown next to the page number window.

use serde::Serialize;

/// Query-string link to `page`, e.g. `?page=3`.
pub fn page_url(page_kwarg: &str, page: u32) -> String {
    format!("?{page_kwarg}={page}")
}

/// Optional navigation URLs for the current page.
///
/// `previous` and `next` are suppressed where they would duplicate `first`
/// or `last`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageNav {
    pub first: Option<String>,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub last: Option<String>,
}

impl PageNav {
    pub fn new(number: u32, total_pages: u32, page_kwarg: &str) -> Self {
        let url = |n| Some(page_url(page_kwarg, n));
        Self {
            first: if number > 1 { url(1) } else { None },
            previous: if number > 2 { url(number - 1) } else { None },
            next: if number.saturating_add(1) < total_pages { url(number + 1) } else { None },
            last: if number < total_pages { url(total_pages) } else { None },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
            && self.previous.is_none()
            && self.next.is_none()
            && self.last.is_none()
    }
}
