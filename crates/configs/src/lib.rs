use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

/// Largest page size a list view may request.
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PaginationConfig {
    /// records per page in the instructor and student lists
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// page links shown on each side of the current page
    #[serde(default = "default_on_each_side")]
    pub on_each_side: u32,
    /// query string key carrying the page number
    #[serde(default = "default_page_kwarg")]
    pub page_kwarg: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            on_each_side: default_on_each_side(),
            page_kwarg: default_page_kwarg(),
        }
    }
}

fn default_per_page() -> u32 { 25 }
fn default_on_each_side() -> u32 { 2 }
fn default_page_kwarg() -> String { "page".to_string() }

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Load `config.toml` (or `$CONFIG_PATH`).
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_from_file(&path)
}

/// Load an explicitly configured path, which must exist, or fall back to
/// defaults when `config.toml` is absent and no path was configured.
pub fn load_optional(config_path: Option<&str>) -> Result<AppConfig> {
    match config_path {
        Some(path) => load_from_file(path),
        None => match load_from_file(DEFAULT_CONFIG_PATH) {
            Err(e) if is_missing_file(&e) => Ok(AppConfig::default()),
            other => other,
        },
    }
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load via [`load_optional`] using `$CONFIG_PATH`; then apply environment
    /// overrides and validate. A malformed or missing configured file is an error.
    pub fn load_and_validate() -> Result<Self> {
        let config_path = std::env::var("CONFIG_PATH").ok();
        let mut cfg = load_optional(config_path.as_deref())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.pagination.apply_env_overrides(|key| std::env::var(key).ok())?;
        self.pagination.normalize();
        self.pagination.validate()?;
        Ok(())
    }
}

impl PaginationConfig {
    /// Override fields from `PAGINATION_PER_PAGE` / `PAGINATION_ON_EACH_SIDE`.
    /// `lookup` abstracts the environment so tests do not touch process state.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("PAGINATION_PER_PAGE") {
            self.per_page = parse_count("PAGINATION_PER_PAGE", &raw)?;
        }
        if let Some(raw) = lookup("PAGINATION_ON_EACH_SIDE") {
            self.on_each_side = parse_count("PAGINATION_ON_EACH_SIDE", &raw)?;
        }
        Ok(())
    }

    fn normalize(&mut self) {
        let trimmed = self.page_kwarg.trim();
        if trimmed.is_empty() {
            self.page_kwarg = default_page_kwarg();
        } else if trimmed.len() != self.page_kwarg.len() {
            self.page_kwarg = trimmed.to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(anyhow!("pagination.per_page must be within 1..={MAX_PER_PAGE}"));
        }
        if !self
            .page_kwarg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(anyhow!("pagination.page_kwarg may only contain [A-Za-z0-9_-]"));
        }
        Ok(())
    }
}

fn is_missing_file(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .map(|io| io.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}

fn parse_count(key: &str, raw: &str) -> Result<u32> {
    // negative counts are rejected here rather than wrapped
    raw.trim()
        .parse::<u32>()
        .map_err(|e| anyhow!("{key} must be a non-negative integer, got {raw:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = load_from_str("").unwrap();
        assert_eq!(cfg.pagination, PaginationConfig::default());
        assert_eq!(cfg.pagination.per_page, 25);
        assert_eq!(cfg.pagination.on_each_side, 2);
        assert_eq!(cfg.pagination.page_kwarg, "page");
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let cfg = load_from_str("[pagination]\non_each_side = 4\n").unwrap();
        assert_eq!(cfg.pagination.on_each_side, 4);
        assert_eq!(cfg.pagination.per_page, 25);
    }

    #[test]
    fn negative_window_in_toml_is_rejected() {
        assert!(load_from_str("[pagination]\non_each_side = -1\n").is_err());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut cfg = PaginationConfig::default();
        cfg.apply_env_overrides(env(&[
            ("PAGINATION_PER_PAGE", "10"),
            ("PAGINATION_ON_EACH_SIDE", " 3 "),
        ]))
        .unwrap();
        assert_eq!(cfg.per_page, 10);
        assert_eq!(cfg.on_each_side, 3);
    }

    #[test]
    fn negative_env_override_is_rejected() {
        let mut cfg = PaginationConfig::default();
        let err = cfg
            .apply_env_overrides(env(&[("PAGINATION_ON_EACH_SIDE", "-2")]))
            .unwrap_err();
        assert!(err.to_string().contains("PAGINATION_ON_EACH_SIDE"));
        assert_eq!(cfg.on_each_side, 2);
    }

    #[test]
    fn per_page_bounds_are_validated() {
        let mut cfg = PaginationConfig::default();
        cfg.per_page = 0;
        assert!(cfg.validate().is_err());
        cfg.per_page = MAX_PER_PAGE + 1;
        assert!(cfg.validate().is_err());
        cfg.per_page = MAX_PER_PAGE;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn blank_page_kwarg_falls_back_to_page() {
        let mut cfg = PaginationConfig { page_kwarg: "  ".into(), ..Default::default() };
        cfg.normalize();
        assert_eq!(cfg.page_kwarg, "page");

        let mut cfg = PaginationConfig { page_kwarg: " p ".into(), ..Default::default() };
        cfg.normalize();
        assert_eq!(cfg.page_kwarg, "p");
    }

    #[test]
    fn missing_file_is_detected() {
        let err = load_from_file("/nonexistent/courseinfo/config.toml").unwrap_err();
        assert!(is_missing_file(&err));
        let err = load_from_str("pagination = 3").unwrap_err();
        assert!(!is_missing_file(&err));
    }

    #[test]
    fn configured_path_must_exist() {
        let err = load_optional(Some("/nonexistent/courseinfo/config.toml")).unwrap_err();
        assert!(is_missing_file(&err));
    }

    #[test]
    fn unconfigured_path_falls_back_to_defaults() {
        // the crate directory carries no config.toml
        let cfg = load_optional(None).unwrap();
        assert_eq!(cfg.pagination, PaginationConfig::default());
    }

    #[test]
    fn page_kwarg_rejects_query_metacharacters() {
        let cfg = PaginationConfig { page_kwarg: "pa&ge".into(), ..Default::default() };
        assert!(cfg.validate().is_err());
    }
}
