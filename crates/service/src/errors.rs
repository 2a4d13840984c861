use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested page does not exist or could not be parsed.
    #[error("invalid page: {0}")]
    InvalidPage(String),
    #[error("validation error: {0}")]
    Validation(String),
}

impl ServiceError {
    pub fn page_out_of_range(number: u32, total_pages: u32) -> Self {
        if number == 0 {
            Self::InvalidPage("page number is less than 1".into())
        } else if total_pages == 0 {
            Self::InvalidPage(format!("page {number} requested but there are no pages"))
        } else {
            Self::InvalidPage(format!("page {number} is outside 1..={total_pages}"))
        }
    }

    pub fn is_invalid_page(&self) -> bool {
        matches!(self, Self::InvalidPage(_))
    }
}
