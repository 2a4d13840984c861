//! Pagination services for the course registration list views.
//! - `page_links` computes the window of page numbers rendered as links.
//! - `pagination` cuts ordered records into pages.
//! - `page_nav` and `list_context` assemble what a list template consumes.

pub mod errors;
pub mod list_context;
pub mod page_links;
pub mod page_nav;
pub mod pagination;

pub use errors::ServiceError;
pub use list_context::{ListContext, PageLink};
pub use page_links::{compute, PageLinkRange, DEFAULT_ON_EACH_SIDE};
pub use page_nav::PageNav;
pub use pagination::{PageContext, PageParam, Paginator};
