use serde::{Deserialize, Serialize};

/// Query string parameters of a paginated list request, e.g. `?page=3`.
///
/// The page value is kept raw: `"last"` and numbers are both accepted
/// downstream, anything else is rejected there.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

impl PageQuery {
    pub fn new(page: impl Into<String>) -> Self {
        Self { page: Some(page.into()) }
    }

    /// Raw page value with surrounding whitespace removed; empty counts as absent.
    pub fn page(&self) -> Option<&str> {
        self.page
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_page_is_absent() {
        assert_eq!(PageQuery::new("  ").page(), None);
        assert_eq!(PageQuery::default().page(), None);
    }

    #[test]
    fn page_is_trimmed() {
        assert_eq!(PageQuery::new(" 4 ").page(), Some("4"));
        assert_eq!(PageQuery::new("last").page(), Some("last"));
    }
}
